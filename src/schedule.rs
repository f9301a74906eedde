//! Cancellable wrappers around `requestAnimationFrame` and `setTimeout`.
//!
//! Each wrapper owns one long-lived closure and re-submits it, so scheduling
//! again (even from inside the callback) never drops a closure that is running.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    handle: Cell<Option<i32>>,
}

impl LoopInner {
    fn request(&self) -> bool {
        let Some(window) = web::window() else {
            return false;
        };
        let cb = self.callback.borrow();
        let Some(cb) = cb.as_ref() else {
            return false;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>()) {
            Ok(id) => {
                self.handle.set(Some(id));
                true
            }
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Frame callback that keeps rescheduling itself while `tick` returns `true`.
///
/// Starting an already scheduled loop is a no-op, which also makes a loop whose
/// tick returns `false` a coalescing one-shot request.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new(mut tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            callback: RefCell::new(None),
            handle: Cell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if tick(ts) {
                inner.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(closure);
        Self { inner }
    }

    /// Schedules the next frame unless one is already pending. Returns `true`
    /// when a new frame was requested.
    pub fn start(&self) -> bool {
        if self.is_scheduled() {
            return false;
        }
        self.inner.request()
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.inner.handle.get().is_some()
    }

    pub fn stop(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
        self.inner.callback.borrow_mut().take();
    }
}

/// Re-armable single-shot `setTimeout`.
pub struct Timer {
    callback: Closure<dyn FnMut()>,
    handle: Cell<Option<i32>>,
}

impl Timer {
    pub fn new(mut on_fire: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(move || on_fire()) as Box<dyn FnMut()>),
            handle: Cell::new(None),
        }
    }

    /// Clears any pending fire and schedules a new one `delay_ms` from now.
    pub fn arm(&self, delay_ms: f64) -> anyhow::Result<()> {
        self.clear();
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref::<js_sys::Function>(),
                delay_ms.ceil() as i32,
            )
            .map_err(|e| anyhow::anyhow!("setTimeout failed: {:?}", e))?;
        self.handle.set(Some(id));
        Ok(())
    }

    pub fn clear(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.clear();
    }
}
