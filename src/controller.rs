use crate::constants::{CONTAINER_ID, GLINT_TARGET_SELECTOR, REFLECTION_TARGET_SELECTOR};
use crate::core::constants::INITIAL_POINTER_FRACTION;
use crate::core::{BeamStyle, IdleTracker, Rect, ReflectionStyle, SweepTimeline};
use crate::dom;
use glam::DVec2;
use web_sys as web;

/// All per-page state of the hero effect, bound to the elements it writes to.
pub struct HeroController {
    window: web::Window,
    document: web::Document,
    container: web::Element,
    targets: Vec<web::HtmlElement>,
    pointer: DVec2,
    frame: Rect,
    sweep: SweepTimeline,
    pub idle: IdleTracker,
}

impl HeroController {
    /// Binds to the hero container and its reflection targets. `Ok(None)` means
    /// the page has no hero (or an empty one) and nothing should be wired.
    pub fn locate(now_ms: f64) -> anyhow::Result<Option<Self>> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            log::debug!("[hero] no #{} on this page", CONTAINER_ID);
            return Ok(None);
        };
        let targets = dom::query_in(&container, REFLECTION_TARGET_SELECTOR);
        if targets.is_empty() {
            log::debug!(
                "[hero] #{} has no {} targets",
                CONTAINER_ID,
                REFLECTION_TARGET_SELECTOR
            );
            return Ok(None);
        }

        let config = dom::config_from_attributes(&container);
        let (vw, vh) = dom::viewport_size(&window);
        let frame = dom::rect_of(&container);
        log::info!(
            "[hero] targets={} frame=({:.0},{:.0} {:.0}x{:.0}) sweep={}ms idle={}ms",
            targets.len(),
            frame.left,
            frame.top,
            frame.width,
            frame.height,
            config.sweep_ms,
            config.idle_ms
        );
        Ok(Some(Self {
            sweep: SweepTimeline::new(config.sweep_ms, config.pause_ms, config.overshoot_px),
            idle: IdleTracker::new(now_ms, config.idle_ms, config.drift_step),
            pointer: DVec2::new(
                vw * INITIAL_POINTER_FRACTION[0],
                vh * INITIAL_POINTER_FRACTION[1],
            ),
            frame,
            window,
            document,
            container,
            targets,
        }))
    }

    #[inline]
    pub fn set_pointer(&mut self, pos: DVec2) {
        self.pointer = pos;
    }

    /// Re-reads the cached container rectangle used for drift.
    pub fn refresh_frame(&mut self) {
        self.frame = dom::rect_of(&self.container);
    }

    /// Writes reflection properties on every target for the current pointer.
    /// Targets with degenerate geometry are skipped for this frame.
    pub fn update_reflections(&self) {
        let container = dom::rect_of(&self.container);
        for target in &self.targets {
            let rect = dom::rect_of(target);
            if let Some(style) = ReflectionStyle::compute(self.pointer, &container, &rect) {
                dom::set_properties(target, &style.properties());
            }
        }
    }

    /// Advances the glint timeline and broadcasts the beam to all chrome
    /// elements. Glint targets are re-queried so late additions join the sweep.
    pub fn sweep_tick(&mut self, ts: f64) {
        let (vw, _) = dom::viewport_size(&self.window);
        let Some(beam_px) = self.sweep.tick(ts, vw) else {
            return;
        };
        let glints = dom::query_document(&self.document, GLINT_TARGET_SELECTOR);
        let extra = glints
            .iter()
            .filter(|g| {
                let node: &web::Node = g;
                !self.targets.iter().any(|t| t.is_same_node(Some(node)))
            });
        for el in self.targets.iter().chain(extra) {
            let style = BeamStyle::new(&dom::rect_of(el), beam_px);
            dom::set_properties(el, &style.properties());
        }
    }

    /// One idle-drift frame. Returns `false` once the tracker is no longer idle.
    pub fn drift_step(&mut self) -> bool {
        match self.idle.drift_step(&self.frame) {
            Some(pos) => {
                self.pointer = pos;
                true
            }
            None => false,
        }
    }
}
