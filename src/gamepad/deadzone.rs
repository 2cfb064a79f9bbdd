//! Deadzone shaping for thumbstick axes

use crate::error::InputError;
use serde::{Deserialize, Serialize};

/// Inner/outer deadzone pair applied to thumbstick axes
///
/// `inner` suppresses noise around the center, `outer` is the distance from
/// the rail that snaps to full deflection. Triggers are never shaped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadzoneConfig {
    pub inner: f32,
    pub outer: f32,
}

impl Default for DeadzoneConfig {
    fn default() -> Self {
        Self {
            inner: 0.1,
            outer: 0.05,
        }
    }
}

impl DeadzoneConfig {
    /// Create a validated deadzone pair
    pub fn new(inner: f32, outer: f32) -> Result<Self, InputError> {
        let config = Self { inner, outer };
        config.validate()?;
        Ok(config)
    }

    /// Both thresholds in [0, 1) and `inner < 1 - outer`
    pub fn validate(&self) -> Result<(), InputError> {
        let in_range = |v: f32| (0.0..1.0).contains(&v);
        if !in_range(self.inner) || !in_range(self.outer) {
            return Err(InputError::InvalidArgument(format!(
                "deadzone thresholds must lie in [0, 1), got inner={} outer={}",
                self.inner, self.outer
            )));
        }
        if self.inner >= 1.0 - self.outer {
            return Err(InputError::InvalidArgument(format!(
                "inner deadzone {} overlaps outer deadzone {}",
                self.inner, self.outer
            )));
        }
        Ok(())
    }

    pub fn apply(&self, value: f32) -> f32 {
        apply_deadzone(value, self.inner, self.outer)
    }
}

/// Remap one axis value so the usable range between both thresholds spans [0, 1]
pub fn apply_deadzone(value: f32, inner: f32, outer: f32) -> f32 {
    let magnitude = value.abs();
    if magnitude < inner {
        return 0.0;
    }

    let edge = 1.0 - outer;
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    if magnitude > edge {
        return sign;
    }

    sign * (magnitude - inner) / (edge - inner)
}
