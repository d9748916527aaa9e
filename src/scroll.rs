//! In-page anchor navigation with smooth scrolling.
//!
//! Clicks on `#id` links are intercepted; the viewport scrolls so the target
//! sits just below the fixed header. A bare `#` or an unknown id does nothing.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::ScrollConfig;
use crate::dom::{self, Page};
use crate::error::PortfolioError;

/// Extract the element id from an in-page link. `None` for `#` or a
/// non-hash href.
pub fn parse_hash_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document-relative scroll offset that puts an element at `element_top`
/// right below a header `header_height` tall.
pub fn scroll_target(element_top: f64, header_height: f64) -> f64 {
    element_top - header_height
}

/// Top edge of `el` relative to the document, independent of positioned
/// ancestors: viewport-relative top plus the current scroll offset.
pub fn document_top(page: &Page, el: &Element) -> f64 {
    el.get_bounding_client_rect().top() + page.scroll_y()
}

fn height_of(el: Option<Element>) -> f64 {
    el.as_ref()
        .and_then(|e| e.dyn_ref::<HtmlElement>())
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or(0.0)
}

pub fn mount(page: &Page, cfg: &ScrollConfig) -> Result<bool, PortfolioError> {
    let anchors = page.query_all(&cfg.anchor_selector)?;
    if anchors.is_empty() {
        debug!("scroll: no in-page links");
        return Ok(false);
    }
    for anchor in anchors {
        let page = page.clone();
        let header_selector = cfg.header_selector.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |evt: MouseEvent| {
            evt.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = parse_hash_target(&href) else {
                return;
            };
            let Some(target) = page.by_id(id) else {
                debug!("scroll: #{id} not found");
                return;
            };
            let header_height = height_of(page.query(&header_selector));
            let top = scroll_target(document_top(&page, &target), header_height);
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            page.window.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    Ok(true)
}
