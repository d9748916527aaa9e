//! Light / dark theme toggle.
//!
//! The preference is a single string slot (`"light"` or `"dark"`) in a
//! key-value store; `localStorage` in the browser, [`MemoryStore`] in tests.
//! Anything other than `"light"` (including nothing stored) means dark.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info};
use web_sys::{Element, MouseEvent, Storage};

use crate::config::ThemeConfig;
use crate::dom::{self, Page};
use crate::error::PortfolioError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Markup for the toggle button: a sun in light mode, a moon in dark mode.
    pub fn icon_html(self) -> &'static str {
        match self {
            Theme::Light => r#"<i class="fas fa-sun"></i>"#,
            Theme::Dark => r#"<i class="fas fa-moon"></i>"#,
        }
    }
}

/// Durable string slots surviving page reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl PreferenceStore for Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        // Quota / privacy-mode failures leave the in-page theme applied.
        let _ = self.set_item(key, value);
    }
}

/// In-memory store used when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemeController<S: PreferenceStore> {
    theme: Theme,
    key: String,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, key: &str) -> Self {
        let theme = Theme::from_stored(store.get(key).as_deref());
        Self { theme, key: key.to_string(), store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(&self.key, self.theme.as_str());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

// --- DOM wiring -------------------------------------------------------------

fn apply(body: Option<&Element>, button: &Element, cfg: &ThemeConfig, theme: Theme) {
    if let Some(body) = body {
        dom::set_class(body, &cfg.light_class, theme == Theme::Light);
    }
    button.set_inner_html(theme.icon_html());
}

pub fn mount(page: &Page, cfg: &ThemeConfig) -> Result<bool, PortfolioError> {
    let Some(button) = page.by_id(&cfg.toggle_id) else {
        debug!("theme: #{} not present", cfg.toggle_id);
        return Ok(false);
    };
    let body: Option<Element> = page.body().map(Into::into);

    let key = cfg.storage_key.as_str();
    match page.local_storage() {
        Some(storage) => wire(button, body, cfg.clone(), ThemeController::load(storage, key)),
        None => {
            info!("theme: localStorage unavailable, preference kept for this page only");
            let controller = ThemeController::load(MemoryStore::default(), key);
            wire(button, body, cfg.clone(), controller)
        }
    }
}

fn wire<S: PreferenceStore + 'static>(
    button: Element,
    body: Option<Element>,
    cfg: ThemeConfig,
    controller: ThemeController<S>,
) -> Result<bool, PortfolioError> {
    apply(body.as_ref(), &button, &cfg, controller.theme());
    let controller = Rc::new(RefCell::new(controller));
    let target = button.clone();
    dom::listen(&target, "click", move |_evt: MouseEvent| {
        let theme = controller.borrow_mut().toggle();
        apply(body.as_ref(), &button, &cfg, theme);
        debug!("theme: switched to {}", theme.as_str());
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_light_is_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_icons() {
        assert!(Theme::Light.icon_html().contains("fa-sun"));
        assert!(Theme::Dark.icon_html().contains("fa-moon"));
    }

    #[test]
    fn test_toggle_persists() {
        let mut c = ThemeController::load(MemoryStore::default(), "theme");
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.toggle(), Theme::Light);
        assert_eq!(c.store().get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = MemoryStore::default();
        store.set("theme", "light");
        let mut c = ThemeController::load(store, "theme");
        let icon = c.theme().icon_html();
        c.toggle();
        c.toggle();
        assert_eq!(c.theme(), Theme::Light);
        assert_eq!(c.theme().icon_html(), icon);
        assert_eq!(c.store().get("theme").as_deref(), Some("light"));
    }
}
