use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::receipts::domain::{Item, Receipt, ReceiptId};
use crate::receipts::service::ReceiptService;
use crate::receipts::store::{PointsStore, StoreError};

pub(super) fn item(short_description: &str, price: &str) -> Item {
    Item {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn receipt(
    retailer: &str,
    purchase_date: &str,
    purchase_time: &str,
    total: &str,
    items: Vec<Item>,
) -> Receipt {
    Receipt {
        retailer: retailer.to_string(),
        purchase_date: purchase_date.to_string(),
        purchase_time: purchase_time.to_string(),
        items,
        total: total.to_string(),
    }
}

/// The end-to-end scenario carried over from the original service's tests:
/// three items, round-dollar total, odd day, mid-afternoon purchase.
pub(super) fn example_receipt() -> Receipt {
    receipt(
        "Example Retailer",
        "2023-07-01",
        "15:30",
        "$60.00",
        vec![
            item("Item 1", "$10.00"),
            item("Item 2", "$20.00"),
            item("Item 3", "$30.00"),
        ],
    )
}

/// A receipt whose date, time, and total all miss every bonus, so single-rule
/// tests can flip one field at a time.
pub(super) fn neutral_receipt() -> Receipt {
    receipt("Target", "2022-03-20", "13:01", "35.36", Vec::new())
}

pub(super) fn build_service() -> (Arc<ReceiptService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(ReceiptService::new(store.clone()));
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<ReceiptId, u64>>>,
}

impl PointsStore for MemoryStore {
    fn put(&self, id: ReceiptId, points: u64) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(id, points);
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).copied())
    }
}

/// Store that refuses every operation, for exercising the 500 paths.
#[derive(Default, Clone)]
pub(super) struct UnavailableStore;

impl PointsStore for UnavailableStore {
    fn put(&self, _id: ReceiptId, _points: u64) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backing table offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Option<u64>, StoreError> {
        Err(StoreError::Unavailable("backing table offline".to_string()))
    }
}
