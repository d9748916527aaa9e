//! Header compact state, a pure function of the scroll offset.

use log::debug;
use web_sys::Event;

use crate::config::HeaderConfig;
use crate::dom::{self, Page};
use crate::error::PortfolioError;

pub fn header_is_compact(scroll_y: f64, compact_above: f64) -> bool {
    scroll_y > compact_above
}

pub fn mount(page: &Page, cfg: &HeaderConfig) -> Result<bool, PortfolioError> {
    let Some(header) = page.query(&cfg.selector) else {
        debug!("header: `{}` not present", cfg.selector);
        return Ok(false);
    };
    let threshold = cfg.compact_above;
    let class = cfg.compact_class.clone();
    let scroller = page.clone();
    dom::listen(&page.window, "scroll", move |_evt: Event| {
        dom::set_class(&header, &class, header_is_compact(scroller.scroll_y(), threshold));
    })?;
    Ok(true)
}
