//! Receipt scoring library.
//!
//! Awards reward points for purchase receipts from a fixed set of scoring
//! rules and exposes the HTTP surface the service binary mounts. The scoring
//! engine itself is pure: it holds no state, performs no I/O, and always
//! produces an integer total for a structurally well-formed receipt.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
