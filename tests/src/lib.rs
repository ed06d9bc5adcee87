//! # Green Ledger Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── ledger_flows.rs   # submit → verify → replay → trade → retire → restart
//!     ├── pipeline_flows.rs # MRV pipeline runs end to end
//!     └── http_flows.rs     # gateway served over a real TCP socket
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gl-tests
//! cargo test -p gl-tests integration::http_flows
//! ```

pub mod integration;
