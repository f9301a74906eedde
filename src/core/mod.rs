pub mod config;
pub mod constants;
pub mod geometry;
pub mod idle;
pub mod reflection;
pub mod sweep;

pub use config::{EffectConfig, OVERRIDE_KEYS};
pub use geometry::Rect;
pub use idle::IdleTracker;
pub use reflection::ReflectionStyle;
pub use sweep::{BeamStyle, SweepTimeline};
