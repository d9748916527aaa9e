//! Location map via the page's Leaflet global (`window.L`).
//!
//! Skipped when the container or the library is missing. Any exception
//! thrown while building the map is caught and logged; the page carries on
//! without a map.

use js_sys::{Array, Object, Reflect};
use log::{debug, info};
use wasm_bindgen::prelude::*;

use crate::config::MapConfig;
use crate::dom::Page;
use crate::error::PortfolioError;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type LeafletLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: u8) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &Object) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(at: &Array) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_to(this: &LeafletLayer, map: &LeafletMap) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(catch, method, js_name = bindPopup)]
    fn bind_popup(this: &LeafletLayer, content: &str) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(catch, method, js_name = openPopup)]
    fn open_popup(this: &LeafletLayer) -> Result<LeafletLayer, JsValue>;
}

fn lat_lng((lat, lon): (f64, f64)) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lon))
}

fn build(cfg: &MapConfig) -> Result<(), PortfolioError> {
    let center = lat_lng(cfg.center);
    let map = leaflet_map(&cfg.container_id)?.set_view(&center, cfg.zoom)?;

    let options = Object::new();
    Reflect::set(&options, &"attribution".into(), &cfg.attribution.as_str().into())?;
    tile_layer(&cfg.tile_url, &options)?.add_to(&map)?;

    marker(&center)?.add_to(&map)?.bind_popup(&cfg.popup)?.open_popup()?;
    Ok(())
}

fn library_loaded(page: &Page) -> bool {
    Reflect::get(&page.window, &"L".into())
        .map(|l| !l.is_undefined() && !l.is_null())
        .unwrap_or(false)
}

pub fn mount(page: &Page, cfg: &MapConfig) -> Result<bool, PortfolioError> {
    if page.by_id(&cfg.container_id).is_none() {
        debug!("map: #{} not present", cfg.container_id);
        return Ok(false);
    }
    if !library_loaded(page) {
        info!("map: {}", PortfolioError::MapUnavailable);
        return Ok(false);
    }
    if let Err(e) = build(cfg) {
        info!("map: falling back to no map ({e})");
        return Ok(false);
    }
    Ok(true)
}
