use super::EventListener;
use crate::effect::Shared;
use glam::DVec2;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn mouse_client_pos(ev: &web::Event) -> Option<DVec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(DVec2::new(ev.client_x() as f64, ev.client_y() as f64))
}

/// First touch point, if any.
#[inline]
pub fn touch_client_pos(ev: &web::Event) -> Option<DVec2> {
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(DVec2::new(touch.client_x() as f64, touch.client_y() as f64))
}

/// Registers mousemove/touchmove on the document and resize on the window.
/// Handlers hold weak references so the returned guards own the wiring.
pub fn wire_input_handlers(
    window: &web::Window,
    document: &web::Document,
    shared: &Rc<Shared>,
) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        wire_pointer(document, "mousemove", false, shared, mouse_client_pos)?,
        wire_pointer(document, "touchmove", true, shared, touch_client_pos)?,
        wire_resize(window, shared)?,
    ])
}

fn wire_pointer(
    document: &web::Document,
    event: &'static str,
    passive: bool,
    shared: &Rc<Shared>,
    extract: fn(&web::Event) -> Option<DVec2>,
) -> anyhow::Result<EventListener> {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    EventListener::new(document, event, passive, move |ev: web::Event| {
        let (Some(s), Some(pos)) = (weak.upgrade(), extract(&ev)) else {
            return;
        };
        s.on_pointer(pos);
    })
}

fn wire_resize(window: &web::Window, shared: &Rc<Shared>) -> anyhow::Result<EventListener> {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    EventListener::new(window, "resize", true, move |_ev: web::Event| {
        if let Some(s) = weak.upgrade() {
            s.on_resize();
        }
    })
}
