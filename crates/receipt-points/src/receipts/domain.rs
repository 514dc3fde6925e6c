use serde::{Deserialize, Serialize};

/// Opaque identifier handed back when a receipt is processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

/// A purchase record as submitted on the wire.
///
/// Date, time, and monetary fields stay textual: the scoring rules decide how
/// (and whether) each one parses, and an unparsable field only costs the
/// rules that needed it. The struct is never mutated after deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date of purchase, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Wall-clock time of purchase, 24-hour `HH:MM`.
    pub purchase_time: String,
    pub items: Vec<Item>,
    /// Grand total, decimal with an optional leading `$`.
    pub total: String,
}

/// A single line item. Order within the receipt matters only for the
/// pair-count rule; items have no identity beyond position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}
