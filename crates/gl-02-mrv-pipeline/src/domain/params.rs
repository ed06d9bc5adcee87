//! Pipeline request parameters
//!
//! Requests carry arbitrary JSON. Only three keys drive the simulation; a
//! key counts as absent when it is missing, null, zero, empty or not a
//! number, in which case the stage default applies.

use serde_json::{Map, Value};

/// Emission reduction methodology used when the request names none.
pub const DEFAULT_METHOD: &str = "AWD";

/// Project area in hectares used when the request names none.
pub const DEFAULT_AREA: f64 = 100.0;

/// Parameters of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineParams {
    pub area: Option<f64>,
    pub method: Option<String>,
    pub mint_amount: Option<f64>,
    /// Every other key of the request, kept for logging.
    pub extra: Map<String, Value>,
}

impl PipelineParams {
    /// Extract parameters from a request body. Non-object bodies yield
    /// defaults.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let mut extra = object.clone();
        let area = extra.remove("area").as_ref().and_then(truthy_number);
        let method = extra
            .remove("method")
            .and_then(|v| v.as_str().map(str::to_string))
            .filter(|m| !m.is_empty());
        let mint_amount = extra.remove("mintAmount").as_ref().and_then(truthy_number);

        Self {
            area,
            method,
            mint_amount,
            extra,
        }
    }

    pub fn with_mint_amount(mut self, amount: f64) -> Self {
        self.mint_amount = (amount != 0.0 && amount.is_finite()).then_some(amount);
        self
    }

    pub fn area_or_default(&self) -> f64 {
        self.area.unwrap_or(DEFAULT_AREA)
    }

    pub fn method_or_default(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_METHOD)
    }
}

/// A non-zero finite number, given either as a JSON number or a numeric string.
pub fn truthy_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n != 0.0 && n.is_finite()).then_some(n)
}
