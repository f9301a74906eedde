use super::constants::*;
use super::geometry::Rect;
use glam::DVec2;

/// Pointer position normalized to the container, `[0, 1]` on both axes while
/// the pointer is inside it.
#[inline]
pub fn normalized_in(pointer: DVec2, container: &Rect) -> DVec2 {
    DVec2::new(
        (pointer.x - container.left) / container.width,
        (pointer.y - container.top) / container.height,
    )
}

/// Pointer position in the target's own box, `[0, 100]` on both axes while the
/// pointer is over the target.
///
/// The target box is first expressed in container-normalized units, so a target
/// spanning the whole container yields `global * 100`.
pub fn local_coords(pointer: DVec2, container: &Rect, target: &Rect) -> DVec2 {
    let global = normalized_in(pointer, container);
    let b_left = (target.left - container.left) / container.width;
    let b_right = (target.right() - container.left) / container.width;
    let b_top = (target.top - container.top) / container.height;
    let b_bottom = (target.bottom() - container.top) / container.height;
    DVec2::new(
        (global.x - b_left) / (b_right - b_left) * 100.0,
        (global.y - b_top) / (b_bottom - b_top) * 100.0,
    )
}

/// Reflection strength for a local x coordinate: full at the center, dimming
/// toward both edges, never below the floor. Rounded to two decimals.
#[inline]
pub fn opacity_for(lx: f64) -> f64 {
    let d = (lx - 50.0).abs() / 50.0;
    let o = (1.0 - d * OPACITY_FALLOFF).max(OPACITY_FLOOR);
    (o * 100.0).round() / 100.0
}

/// Derived style values for one reflection target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectionStyle {
    pub reflection: DVec2,
    pub secondary: DVec2,
    pub specular: DVec2,
    pub opacity: f64,
}

impl ReflectionStyle {
    /// Computes the style for a target, or `None` when the container or target
    /// box is degenerate and the result would not be finite.
    pub fn compute(pointer: DVec2, container: &Rect, target: &Rect) -> Option<Self> {
        let local = local_coords(pointer, container, target);
        if !local.is_finite() {
            return None;
        }
        Some(Self::from_local(local))
    }

    pub fn from_local(local: DVec2) -> Self {
        Self {
            reflection: local,
            secondary: DVec2::new(
                100.0 - local.x * SECONDARY_X_SCALE,
                100.0 - local.y * SECONDARY_Y_SCALE,
            ),
            specular: DVec2::new(
                local.x * SPECULAR_X_SCALE + SPECULAR_X_OFFSET,
                local.y * SPECULAR_Y_SCALE,
            ),
            opacity: opacity_for(local.x),
        }
    }

    /// CSS custom properties and their values, ready for `style.setProperty`.
    pub fn properties(&self) -> [(&'static str, String); 7] {
        [
            (PROP_REFLECTION_X, percent(self.reflection.x)),
            (PROP_REFLECTION_Y, percent(self.reflection.y)),
            (PROP_SECONDARY_X, percent(self.secondary.x)),
            (PROP_SECONDARY_Y, percent(self.secondary.y)),
            (PROP_SPECULAR_X, percent(self.specular.x)),
            (PROP_SPECULAR_Y, percent(self.specular.y)),
            (PROP_OPACITY, format!("{:.2}", self.opacity)),
        ]
    }
}

#[inline]
fn percent(v: f64) -> String {
    format!("{v}%")
}
