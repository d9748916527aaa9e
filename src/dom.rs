//! Thin helpers over `web_sys` shared by the component mounts.
//!
//! Lookups return `Option` so callers branch explicitly on a missing element.

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Storage, Window};

use crate::error::PortfolioError;

/// Handles to the current window and document.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> Result<Self, PortfolioError> {
        let window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
        let document = window.document().ok_or(PortfolioError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Look up `id` and cast it; a present element of the wrong type is an error.
    pub fn by_id_as<T: JsCast>(&self, id: &str) -> Result<Option<T>, PortfolioError> {
        match self.by_id(id) {
            Some(el) => el
                .dyn_into::<T>()
                .map(Some)
                .map_err(|_| PortfolioError::UnexpectedElement(id.to_string())),
            None => Ok(None),
        }
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, PortfolioError> {
        let list = self.document.query_selector_all(selector)?;
        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
        Ok(out)
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    pub fn local_storage(&self) -> Option<Storage> {
        self.window.local_storage().ok().flatten()
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Current viewport size in CSS px.
    pub fn viewport(&self) -> (f64, f64) {
        let w = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w, h)
    }

    pub fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PortfolioError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}
