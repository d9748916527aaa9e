//! Portfolio FX core crate.
//!
//! Page effects for a static portfolio site, compiled to WASM and started
//! from the page with `init_portfolio()` once the DOM is ready. Each effect
//! is an independent component: a pure state machine plus a `mount` function
//! binding it to the document. A component whose elements are missing is
//! skipped; a component that fails is logged and skipped. Neither stops the
//! others from starting.

use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{ErrorEvent, EventTarget};

pub mod badge;
pub mod config;
pub mod counter;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod header;
pub mod map;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod rng;
pub mod scroll;
pub mod theme;
pub mod typewriter;

pub use config::SiteConfig;
pub use error::PortfolioError;

use dom::Page;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Already initialised when the module is instantiated twice.
    let _ = console_log::init_with_level(level);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn init_portfolio() -> Result<(), JsValue> {
    mount_all(&SiteConfig::default())?;
    Ok(())
}

/// Same as [`init_portfolio`] with a (partial) JSON [`SiteConfig`].
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn init_portfolio_with_config(json: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(json)?;
    mount_all(&config)?;
    Ok(())
}

/// Install the failure sink, then mount every component once.
pub fn mount_all(config: &SiteConfig) -> Result<(), PortfolioError> {
    config.validate()?;
    let page = Page::current()?;
    info!("portfolio loading");
    install_failure_sink(&page.window)?;

    let mut started = 0;
    let mut tally = |name: &str, result: Result<bool, PortfolioError>| {
        if report(name, result) {
            started += 1;
        }
    };
    tally("theme", theme::mount(&page, &config.theme));
    tally("nav", nav::mount(&page, &config.nav));
    tally("reveal", reveal::mount(&page, &config.reveal));
    tally("scroll", scroll::mount(&page, &config.scroll));
    tally("badge", badge::mount(&page, &config.badge));
    tally("typewriter", typewriter::mount(&page, &config.typewriter));
    tally("header", header::mount(&page, &config.header));
    tally("map", map::mount(&page, &config.map));
    tally("counter", counter::mount(&page, &config.counter));
    tally("particles", particles::mount(&page, &config.particles));
    tally("cursor", cursor::mount(&page, &config.cursor));

    info!("portfolio loaded ({started} effects active)");
    Ok(())
}

/// Log one component's mount outcome; true when it is running.
fn report(name: &str, result: Result<bool, PortfolioError>) -> bool {
    match result {
        Ok(true) => {
            debug!("{name}: ready");
            true
        }
        Ok(false) => false,
        Err(e) => {
            warn!("{name}: disabled: {e}");
            false
        }
    }
}

/// Log `error` events reaching `target` and cancel them, so the host does
/// not report them and one broken handler does not take the rest of the
/// page down. [`mount_all`] installs it on the window.
pub fn install_failure_sink(target: &EventTarget) -> Result<(), PortfolioError> {
    dom::listen(target, "error", |evt: ErrorEvent| {
        error!(
            "uncaught: {} ({}:{}:{})",
            evt.message(),
            evt.filename(),
            evt.lineno(),
            evt.colno()
        );
        evt.prevent_default();
    })
}
