//! Storage adapters
//!
//! - `InMemoryStorage`: tests and ephemeral nodes
//! - `FileStorage`: one JSON file per key under a directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
