//! Custom cursor element following the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::config::CursorConfig;
use crate::dom::{self, Page};
use crate::error::PortfolioError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: i32,
    pub y: i32,
    pub visible: bool,
    pub hovering: bool, // pointer over a link / button
}

impl CursorState {
    pub fn moved(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.visible = true;
    }

    pub fn left_page(&mut self) {
        self.visible = false;
    }

    pub fn hover(&mut self, on: bool) {
        self.hovering = on;
    }

    /// `(left, top, opacity)` style values.
    pub fn style(&self) -> (String, String, &'static str) {
        (
            format!("{}px", self.x),
            format!("{}px", self.y),
            if self.visible { "1" } else { "0" },
        )
    }
}

struct CursorDom {
    state: CursorState,
    el: HtmlElement,
    class: String,
}

impl CursorDom {
    fn render(&self) {
        let (left, top, opacity) = self.state.style();
        let style = self.el.style();
        let _ = style.set_property("left", &left);
        let _ = style.set_property("top", &top);
        let _ = style.set_property("opacity", opacity);
        dom::set_class(&self.el, &self.class, self.state.hovering);
    }
}

pub fn mount(page: &Page, cfg: &CursorConfig) -> Result<bool, PortfolioError> {
    if !cfg.enabled {
        debug!("cursor: disabled");
        return Ok(false);
    }
    let found = page.query(&cfg.selector).and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let Some(el) = found else {
        debug!("cursor: `{}` not present", cfg.selector);
        return Ok(false);
    };
    let cursor = Rc::new(RefCell::new(CursorDom {
        state: CursorState::default(),
        el,
        class: cfg.active_class.clone(),
    }));

    {
        let cursor = cursor.clone();
        dom::listen(&page.document, "mousemove", move |evt: MouseEvent| {
            update(&cursor, |s| s.moved(evt.client_x(), evt.client_y()));
        })?;
    }
    {
        let cursor = cursor.clone();
        dom::listen(&page.document, "mouseleave", move |_evt: MouseEvent| {
            update(&cursor, CursorState::left_page);
        })?;
    }
    for target in page.query_all(&cfg.hover_selector)? {
        hover_listeners(&target, &cursor)?;
    }
    Ok(true)
}

fn update(cursor: &Rc<RefCell<CursorDom>>, f: impl FnOnce(&mut CursorState)) {
    let mut c = cursor.borrow_mut();
    f(&mut c.state);
    c.render();
}

fn hover_listeners(
    target: &Element,
    cursor: &Rc<RefCell<CursorDom>>,
) -> Result<(), PortfolioError> {
    for (event, on) in [("mouseenter", true), ("mouseleave", false)] {
        let cursor = cursor.clone();
        dom::listen(target, event, move |_evt: MouseEvent| {
            update(&cursor, |s| s.hover(on));
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_pointer() {
        let mut s = CursorState::default();
        assert_eq!(s.style().2, "0");
        s.moved(120, 48);
        assert_eq!(s.style(), ("120px".to_string(), "48px".to_string(), "1"));
    }

    #[test]
    fn test_leave_hides_but_keeps_position() {
        let mut s = CursorState::default();
        s.moved(5, 6);
        s.left_page();
        assert!(!s.visible);
        assert_eq!((s.x, s.y), (5, 6));
    }

    #[test]
    fn test_hover_flag() {
        let mut s = CursorState::default();
        s.hover(true);
        assert!(s.hovering);
        s.hover(false);
        assert!(!s.hovering);
    }
}
