use crate::constants::CONFIG_ATTR_PREFIX;
use crate::core::{EffectConfig, Rect, OVERRIDE_KEYS};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Viewport size in CSS pixels; zero when the window cannot answer.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// `HtmlElement`s matching `selector` inside `container`.
pub fn query_in(container: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    html_elements(container.query_selector_all(selector), selector)
}

/// `HtmlElement`s matching `selector` anywhere in the document.
pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    html_elements(document.query_selector_all(selector), selector)
}

fn html_elements(list: Result<web::NodeList, JsValue>, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = list else {
        log::warn!("[hero] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Writes custom properties; a rejected value leaves the previous one in place.
#[inline]
pub fn set_properties<const N: usize>(el: &web::HtmlElement, props: &[(&'static str, String); N]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

/// Default config with any `data-*` overrides found on the container applied.
pub fn config_from_attributes(container: &web::Element) -> EffectConfig {
    let values: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            container
                .get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}"))
                .map(|v| (*key, v))
        })
        .collect();
    let (config, errors) =
        EffectConfig::default().with_overrides(values.iter().map(|(k, v)| (*k, v.as_str())));
    for e in errors {
        log::warn!("[hero] ignoring config override: {}", e);
    }
    config
}
