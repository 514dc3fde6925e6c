use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use receipt_points::receipts::{PointsStore, ReceiptId, StoreError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local points table. A single mutex serializes writers and readers,
/// which covers the read-after-write requirement for one-process deployments.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPointsStore {
    records: Arc<Mutex<HashMap<ReceiptId, u64>>>,
}

impl PointsStore for InMemoryPointsStore {
    fn put(&self, id: ReceiptId, points: u64) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("points store mutex poisoned");
        if guard.contains_key(&id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(id, points);
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, StoreError> {
        let guard = self.records.lock().expect("points store mutex poisoned");
        Ok(guard.get(id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_round_trips() {
        let store = InMemoryPointsStore::default();
        let id = ReceiptId("r-1".to_string());
        store.put(id.clone(), 42).expect("first insert succeeds");
        assert_eq!(store.get(&id).expect("store reachable"), Some(42));
    }

    #[test]
    fn duplicate_ids_conflict() {
        let store = InMemoryPointsStore::default();
        let id = ReceiptId("r-1".to_string());
        store.put(id.clone(), 1).expect("first insert succeeds");
        let err = store.put(id, 2).expect_err("second insert conflicts");
        assert!(matches!(err, StoreError::Conflict));
    }
}
