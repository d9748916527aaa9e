//! Error type shared by every component initializer.
//!
//! A missing page element is never an error: mount functions return
//! `Ok(false)` for that case. Errors are reserved for host failures (no
//! window, a throwing DOM call) and bad configuration.

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element #{0} is not the expected element type")]
    UnexpectedElement(String),
    #[error("mapping library not loaded")]
    MapUnavailable,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[cfg(feature = "serde_json")]
    #[error("config parse: {0}")]
    Config(#[from] serde_json::Error),
    #[error("js: {0}")]
    Js(String),
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        PortfolioError::Js(describe_js(&value))
    }
}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a thrown JS value as text for logging.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
