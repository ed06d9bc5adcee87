//! Domain layer for the MRV pipeline
//!
//! - params: lenient request parameters
//! - outputs: stage outputs and the final report
//! - config: pipeline tuning
//! - error: pipeline errors

mod config;
mod error;
mod outputs;
mod params;

pub use config::*;
pub use error::*;
pub use outputs::*;
pub use params::*;

/// Round to `dp` decimals through decimal formatting, then parse back.
pub fn to_fixed(x: f64, dp: usize) -> f64 {
    format!("{x:.dp$}").parse().unwrap_or(x)
}
