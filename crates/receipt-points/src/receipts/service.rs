use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::domain::{Receipt, ReceiptId};
use super::scoring;
use super::store::{PointsStore, StoreError};

/// Facade pairing the pure scoring engine with an injected points store.
/// Holds no state of its own; the engine never touches the store directly.
pub struct ReceiptService<S> {
    store: Arc<S>,
}

fn next_receipt_id() -> ReceiptId {
    ReceiptId(Uuid::new_v4().to_string())
}

impl<S> ReceiptService<S>
where
    S: PointsStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Score the receipt, persist the total under a fresh opaque id, and
    /// return both.
    pub fn process(&self, receipt: &Receipt) -> Result<(ReceiptId, u64), StoreError> {
        let points = scoring::score(receipt);
        let id = next_receipt_id();
        self.store.put(id.clone(), points)?;

        info!(receipt_id = %id.0, points, "receipt processed");
        Ok((id, points))
    }

    /// Look up the points previously recorded for an id.
    pub fn points(&self, id: &ReceiptId) -> Result<Option<u64>, StoreError> {
        self.store.get(id)
    }
}
