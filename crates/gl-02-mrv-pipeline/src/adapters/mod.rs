//! Adapters (Hexagonal Architecture)

pub mod tracing_hook;

pub use tracing_hook::TracingHook;
