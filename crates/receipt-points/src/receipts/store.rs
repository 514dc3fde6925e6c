use super::domain::ReceiptId;

/// Storage abstraction for computed totals so the service and router can be
/// exercised in isolation. Implementations must be safe for concurrent use
/// from multiple request handlers; inserts and lookups on the same instance
/// observe read-after-write within a single process.
pub trait PointsStore: Send + Sync {
    fn put(&self, id: ReceiptId, points: u64) -> Result<(), StoreError>;
    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("receipt id already recorded")]
    Conflict,
    #[error("points store unavailable: {0}")]
    Unavailable(String),
}
