//! Domain layer for the Registry subsystem
//!
//! - state: `AppState` and the seeded sample project
//! - action: `Action` and the pure `reduce` function
//! - hydrate: restoring and repairing persisted state
//! - requests: operation inputs and read models

mod action;
mod error;
mod hydrate;
mod requests;
mod state;

pub use action::*;
pub use error::*;
pub use hydrate::*;
pub use requests::*;
pub use state::*;
