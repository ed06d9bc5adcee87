//! Pipeline configuration

use super::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};

/// Largest accepted delay multiplier. A full run at this scale takes under
/// three hours.
pub const MAX_DELAY_SCALE: f64 = 1000.0;

/// Pipeline tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Multiplier applied to every simulated step duration. `0.0` disables
    /// sleeping entirely.
    pub delay_scale: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { delay_scale: 1.0 }
    }
}

impl PipelineConfig {
    /// Configuration that skips all simulated delays.
    pub fn instant() -> Self {
        Self { delay_scale: 0.0 }
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if !self.delay_scale.is_finite() || self.delay_scale < 0.0 {
            return Err(PipelineError::InvalidConfig(format!(
                "delay_scale must be a finite non-negative number, got {}",
                self.delay_scale
            )));
        }
        if self.delay_scale > MAX_DELAY_SCALE {
            return Err(PipelineError::InvalidConfig(format!(
                "delay_scale must be at most {MAX_DELAY_SCALE}, got {}",
                self.delay_scale
            )));
        }
        Ok(())
    }
}
