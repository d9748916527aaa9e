//! Scroll-triggered fade-in.
//!
//! Every element matching one of the reveal selectors is watched by a single
//! `IntersectionObserver`. The first intersection marks it visible and stops
//! watching it; visible is terminal.

use js_sys::Array;
use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom::{self, Page};
use crate::error::PortfolioError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    /// Feed one intersection notification. Returns true only on the
    /// hidden -> visible edge.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }
}

/// Build an observer that calls `on_entry` for each notified entry.
pub(crate) fn observer<F>(
    threshold: f64,
    mut on_entry: F,
) -> Result<IntersectionObserver, PortfolioError>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, obs: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry, &obs);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let obs = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    Ok(obs)
}

pub fn mount(page: &Page, cfg: &RevealConfig) -> Result<bool, PortfolioError> {
    let mut targets = Vec::new();
    for selector in &cfg.selectors {
        targets.extend(page.query_all(selector)?);
    }
    if targets.is_empty() {
        debug!("reveal: no elements matched {:?}", cfg.selectors);
        return Ok(false);
    }

    let class = cfg.visible_class.clone();
    let obs = observer(cfg.threshold, move |entry, obs| {
        let target = entry.target();
        let mut state = if dom::has_class(&target, &class) {
            RevealState::Visible
        } else {
            RevealState::Hidden
        };
        if state.observe(entry.is_intersecting()) {
            dom::set_class(&target, &class, true);
        }
        if state == RevealState::Visible {
            obs.unobserve(&target);
        }
    })?;
    for el in &targets {
        obs.observe(el);
    }
    debug!("reveal: watching {} elements", targets.len());
    Ok(true)
}
