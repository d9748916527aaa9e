// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use portfolio_fx::config::{
    CounterConfig, CursorConfig, HeaderConfig, MapConfig, NavConfig, ParticleConfig,
    RevealConfig, ScrollConfig, ThemeConfig,
};
use portfolio_fx::dom::Page;
use portfolio_fx::{
    counter, cursor, header, install_failure_sink, map, nav, particles, reveal, scroll, theme,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{ErrorEvent, ErrorEventInit, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn add(page: &Page, tag: &str, id: &str) -> HtmlElement {
    let el: HtmlElement = page.document.create_element(tag).unwrap().dyn_into().unwrap();
    el.set_id(id);
    page.body().unwrap().append_child(&el).unwrap();
    el
}

/// A small box pinned to the top-left corner, so it is always on screen.
fn pinned(page: &Page, tag: &str, id: &str) -> HtmlElement {
    let el = add(page, tag, id);
    el.set_attribute("style", "position:fixed;top:0;left:0;width:80px;height:40px")
        .unwrap();
    el
}

#[wasm_bindgen_test]
fn missing_elements_are_skipped() {
    let page = Page::current().unwrap();
    let cfg = HeaderConfig { selector: "#no-such-header".into(), ..HeaderConfig::default() };
    assert!(!header::mount(&page, &cfg).unwrap());
}

#[wasm_bindgen_test]
fn theme_toggle_persists() {
    let page = Page::current().unwrap();
    let storage = page.local_storage().unwrap();
    storage.set_item("theme-web-test", "light").unwrap();
    let button = add(&page, "button", "theme-web-test-btn");
    let cfg = ThemeConfig {
        toggle_id: "theme-web-test-btn".into(),
        storage_key: "theme-web-test".into(),
        ..ThemeConfig::default()
    };
    assert!(theme::mount(&page, &cfg).unwrap());
    assert!(button.inner_html().contains("fa-sun"));
    button.click();
    assert!(button.inner_html().contains("fa-moon"));
    assert_eq!(storage.get_item("theme-web-test").unwrap().as_deref(), Some("dark"));
    button.click();
    assert_eq!(storage.get_item("theme-web-test").unwrap().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn hamburger_opens_and_links_close() {
    let page = Page::current().unwrap();
    let burger = add(&page, "button", "burger-web-test");
    let panel = add(&page, "nav", "panel-web-test");
    let link = add(&page, "a", "link-web-test");
    link.class_list().add_1("web-test-link").unwrap();
    let cfg = NavConfig {
        hamburger_id: "burger-web-test".into(),
        panel_id: "panel-web-test".into(),
        link_selector: ".web-test-link".into(),
        ..NavConfig::default()
    };
    assert!(nav::mount(&page, &cfg).unwrap());
    burger.click();
    assert!(burger.class_list().contains("active"));
    assert!(panel.class_list().contains("active"));
    link.click();
    assert!(!burger.class_list().contains("active"));
    assert!(!panel.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn unknown_hash_link_does_not_scroll() {
    let page = Page::current().unwrap();
    let link = add(&page, "a", "anchor-web-test");
    link.set_attribute("href", "#missing-web-test").unwrap();
    link.class_list().add_1("web-test-anchor").unwrap();
    let cfg = ScrollConfig {
        anchor_selector: ".web-test-anchor".into(),
        ..ScrollConfig::default()
    };
    assert!(scroll::mount(&page, &cfg).unwrap());
    let before = page.scroll_y();
    link.click();
    assert_eq!(page.scroll_y(), before);
}

#[wasm_bindgen_test]
fn document_top_ignores_positioned_parent() {
    let page = Page::current().unwrap();
    let outer = add(&page, "div", "outer-web-test");
    outer
        .set_attribute("style", "position:absolute;top:300px;left:0;padding-top:40px")
        .unwrap();
    let inner: HtmlElement = page.document.create_element("div").unwrap().dyn_into().unwrap();
    inner.set_attribute("style", "height:10px").unwrap();
    outer.append_child(&inner).unwrap();
    assert_eq!(inner.offset_top(), 40);
    let top = scroll::document_top(&page, &inner);
    assert!((top - 340.0).abs() < 1.0, "document top {top}");
}

#[wasm_bindgen_test]
fn map_without_leaflet_is_skipped() {
    let page = Page::current().unwrap();
    add(&page, "div", "map-web-test");
    let cfg = MapConfig { container_id: "map-web-test".into(), ..MapConfig::default() };
    assert!(!map::mount(&page, &cfg).unwrap());
}

#[wasm_bindgen_test]
async fn reveal_marks_on_screen_element() {
    let page = Page::current().unwrap();
    let el = pinned(&page, "div", "reveal-web-test");
    el.class_list().add_1("reveal-web-test").unwrap();
    let cfg = RevealConfig {
        selectors: vec![".reveal-web-test".into()],
        ..RevealConfig::default()
    };
    assert!(reveal::mount(&page, &cfg).unwrap());
    TimeoutFuture::new(300).await;
    assert!(el.class_list().contains("visible"));
}

#[wasm_bindgen_test]
async fn counter_counts_up_to_target() {
    let page = Page::current().unwrap();
    let el = pinned(&page, "span", "counter-web-test");
    el.class_list().add_1("counter-web-test").unwrap();
    el.set_attribute("data-target", "42").unwrap();
    el.set_text_content(Some("0"));
    let cfg = CounterConfig {
        selector: ".counter-web-test".into(),
        duration_ms: 160,
        frame_ms: 16,
        ..CounterConfig::default()
    };
    assert!(counter::mount(&page, &cfg).unwrap());
    TimeoutFuture::new(800).await;
    assert_eq!(el.text_content().as_deref(), Some("42"));
}

#[wasm_bindgen_test]
fn particle_canvas_fills_viewport() {
    let page = Page::current().unwrap();
    let canvas: HtmlCanvasElement = add(&page, "canvas", "particles-web-test").unchecked_into();
    let cfg = ParticleConfig {
        canvas_id: "particles-web-test".into(),
        ..ParticleConfig::default()
    };
    assert!(particles::mount(&page, &cfg).unwrap());
    let (w, h) = page.viewport();
    assert_eq!(canvas.width(), w as u32);
    assert_eq!(canvas.height(), h as u32);
}

#[wasm_bindgen_test]
fn cursor_needs_opt_in() {
    let page = Page::current().unwrap();
    add(&page, "div", "cursor-web-test")
        .class_list()
        .add_1("cursor-web-test")
        .unwrap();
    let cfg = CursorConfig { selector: ".cursor-web-test".into(), ..CursorConfig::default() };
    assert!(!cursor::mount(&page, &cfg).unwrap());
    let cfg = CursorConfig { enabled: true, ..cfg };
    assert!(cursor::mount(&page, &cfg).unwrap());
}

#[wasm_bindgen_test]
fn failure_sink_cancels_error_events() {
    let page = Page::current().unwrap();
    let target = page.document.create_element("div").unwrap();
    install_failure_sink(&target).unwrap();
    let init = ErrorEventInit::new();
    init.set_cancelable(true);
    init.set_message("boom");
    let evt = ErrorEvent::new_with_event_init_dict("error", &init).unwrap();
    assert!(!target.dispatch_event(&evt).unwrap());
    assert!(evt.default_prevented());
}
