use super::constants::*;

/// Attribute-style keys accepted by [`EffectConfig::apply`].
pub const OVERRIDE_KEYS: [&str; 5] = ["sweep-ms", "pause-ms", "overshoot", "idle-ms", "drift-step"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects a number, got `{value}`")]
    NotANumber { key: String, value: String },
    #[error("`{key}` must be positive, got {value}")]
    NotPositive { key: String, value: f64 },
}

/// Tuning for one mounted effect. Defaults come from `core::constants`; a page
/// can override individual values through `data-*` attributes on the container.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    pub sweep_ms: f64,
    pub pause_ms: f64,
    pub overshoot_px: f64,
    pub idle_ms: f64,
    pub drift_step: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            sweep_ms: SWEEP_DURATION_MS,
            pause_ms: SWEEP_PAUSE_MS,
            overshoot_px: BEAM_OVERSHOOT_PX,
            idle_ms: IDLE_THRESHOLD_MS,
            drift_step: DRIFT_ANGLE_STEP,
        }
    }
}

impl EffectConfig {
    /// Sets one value from its string form. Leaves the config untouched on error.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let slot = match key {
            "sweep-ms" => &mut self.sweep_ms,
            "pause-ms" => &mut self.pause_ms,
            "overshoot" => &mut self.overshoot_px,
            "idle-ms" => &mut self.idle_ms,
            "drift-step" => &mut self.drift_step,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        let parsed: f64 = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        // Overshoot may be zero; every other value must be positive.
        let valid = if key == "overshoot" {
            parsed.is_finite() && parsed >= 0.0
        } else {
            parsed.is_finite() && parsed > 0.0
        };
        if !valid {
            return Err(ConfigError::NotPositive {
                key: key.to_string(),
                value: parsed,
            });
        }
        *slot = parsed;
        Ok(())
    }

    /// Applies every pair, collecting the failures instead of stopping.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut errors = Vec::new();
        for (key, value) in pairs {
            if let Err(e) = self.apply(key, value) {
                errors.push(e);
            }
        }
        (self, errors)
    }
}
