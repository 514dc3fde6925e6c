//! Receipt intake, scoring, and points lookup.
//!
//! The scoring rules live in [`scoring`] and are pure functions over a
//! [`Receipt`]; the service facade in [`service`] pairs the engine with a
//! [`PointsStore`] so computed totals can be retrieved later by id.

pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId};
pub use router::receipt_router;
pub use scoring::{breakdown, score, RuleContribution, RuleKind, ScoreBreakdown};
pub use service::ReceiptService;
pub use store::{PointsStore, StoreError};
