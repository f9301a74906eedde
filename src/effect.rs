use crate::controller::HeroController;
use crate::dom;
use crate::events::{pointer, EventListener};
use crate::schedule::{FrameLoop, Timer};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// State shared by the frame loops, the idle timer and the input handlers.
///
/// Callbacks only hold `Weak` references; dropping the owning [`HeroEffect`]
/// releases everything.
pub struct Shared {
    controller: RefCell<HeroController>,
    /// Coalesced reflection update: at most one per frame.
    update: FrameLoop,
    sweep: FrameLoop,
    drift: FrameLoop,
    idle_timer: Timer,
}

impl Shared {
    fn new(controller: HeroController) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Shared>| {
            let w = weak.clone();
            let update = FrameLoop::new(move |_ts| {
                if let Some(s) = w.upgrade() {
                    s.controller.borrow().update_reflections();
                }
                false
            });

            let w = weak.clone();
            let sweep = FrameLoop::new(move |ts| {
                let Some(s) = w.upgrade() else {
                    return false;
                };
                s.controller.borrow_mut().sweep_tick(ts);
                true
            });

            let w = weak.clone();
            let drift = FrameLoop::new(move |_ts| {
                let Some(s) = w.upgrade() else {
                    return false;
                };
                let drifting = s.controller.borrow_mut().drift_step();
                if drifting {
                    s.update.start();
                }
                drifting
            });

            let w = weak.clone();
            let idle_timer = Timer::new(move || {
                if let Some(s) = w.upgrade() {
                    s.on_idle_timeout();
                }
            });

            Shared {
                controller: RefCell::new(controller),
                update,
                sweep,
                drift,
                idle_timer,
            }
        })
    }

    /// Real pointer or touch movement.
    pub fn on_pointer(&self, pos: DVec2) {
        self.controller.borrow_mut().set_pointer(pos);
        self.update.start();
        self.note_activity();
    }

    pub fn on_resize(&self) {
        self.controller.borrow_mut().refresh_frame();
    }

    fn note_activity(&self) {
        let threshold = {
            let mut c = self.controller.borrow_mut();
            if c.idle.record_activity(instant::now()) {
                log::debug!("[hero] idle drift cancelled");
            }
            c.refresh_frame();
            c.idle.threshold_ms()
        };
        self.drift.stop();
        self.arm_idle_timer(threshold);
    }

    fn on_idle_timeout(&self) {
        let now = instant::now();
        let (entered, still_active, remaining) = {
            let mut c = self.controller.borrow_mut();
            let entered = c.idle.enter_idle(now);
            (entered, !c.idle.is_idle(), c.idle.remaining_ms(now))
        };
        if entered {
            log::debug!("[hero] idle, starting drift");
            self.drift.start();
        } else if still_active {
            // Fired ahead of the tracker's clock; wait out the difference.
            self.arm_idle_timer(remaining);
        }
    }

    fn arm_idle_timer(&self, delay_ms: f64) {
        if let Err(e) = self.idle_timer.arm(delay_ms) {
            log::error!("[hero] idle timer: {:?}", e);
        }
    }
}

/// A mounted hero effect. Dropping it cancels every loop and listener.
pub struct HeroEffect {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl HeroEffect {
    /// Binds to the page and starts the effect. `Ok(None)` when the page has
    /// no hero container or no reflection targets.
    pub fn mount() -> anyhow::Result<Option<Self>> {
        let now = instant::now();
        let Some(controller) = HeroController::locate(now)? else {
            return Ok(None);
        };
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        let threshold = controller.idle.threshold_ms();
        let shared = Shared::new(controller);

        shared.controller.borrow().update_reflections();
        if !shared.sweep.start() {
            anyhow::bail!("could not schedule the glint sweep");
        }
        shared.idle_timer.arm(threshold)?;
        let listeners = pointer::wire_input_handlers(&window, &document, &shared)?;

        Ok(Some(Self {
            shared,
            _listeners: listeners,
        }))
    }
}

impl Drop for HeroEffect {
    fn drop(&mut self) {
        self.shared.update.stop();
        self.shared.sweep.stop();
        self.shared.drift.stop();
        self.shared.idle_timer.clear();
        log::info!("[hero] unmounted");
    }
}
