//! Floating profile badge.
//!
//! Revealed after a fixed delay. Under [`BadgePolicy::ScrollLinked`] it is
//! also hidden while the page is scrolled past the threshold and shown again
//! below it.

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Event;

use crate::config::{BadgeConfig, BadgePolicy};
use crate::dom::{self, Page};
use crate::error::PortfolioError;

impl BadgePolicy {
    /// Visibility the badge should take at `scroll_y`; `None` leaves it as is.
    pub fn visible_at(self, scroll_y: f64) -> Option<bool> {
        match self {
            BadgePolicy::ShowOnce => None,
            BadgePolicy::ScrollLinked { hide_above } => Some(scroll_y <= hide_above),
        }
    }
}

pub fn mount(page: &Page, cfg: &BadgeConfig) -> Result<bool, PortfolioError> {
    let Some(badge) = page.by_id(&cfg.element_id) else {
        debug!("badge: #{} not present", cfg.element_id);
        return Ok(false);
    };

    {
        let badge = badge.clone();
        let class = cfg.visible_class.clone();
        Timeout::new(cfg.reveal_delay_ms, move || dom::set_class(&badge, &class, true)).forget();
    }

    if let BadgePolicy::ScrollLinked { .. } = cfg.policy {
        let policy = cfg.policy;
        let class = cfg.visible_class.clone();
        let scroller = page.clone();
        dom::listen(&page.window, "scroll", move |_evt: Event| {
            if let Some(visible) = policy.visible_at(scroller.scroll_y()) {
                dom::set_class(&badge, &class, visible);
            }
        })?;
    }
    Ok(true)
}
