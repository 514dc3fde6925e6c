//! The scoring engine: seven independent rules summed into a point total.
//!
//! Pure throughout. Rules that depend on a parsed field treat a parse
//! failure as "rule does not apply" and contribute 0, so `score` always
//! returns for a structurally well-formed receipt.

pub(crate) mod parsers;
pub(crate) mod rules;

pub use parsers::{CurrencyAmount, ParseFailure};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Receipt;

/// The scoring criteria, one variant per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    RetailerDensity,
    RoundDollar,
    QuarterMultiple,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonWindow,
}

impl RuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::RetailerDensity => "retailer name density",
            RuleKind::RoundDollar => "round dollar total",
            RuleKind::QuarterMultiple => "quarter-multiple total",
            RuleKind::ItemPairs => "item pairs",
            RuleKind::DescriptionLength => "description length",
            RuleKind::OddPurchaseDay => "odd purchase day",
            RuleKind::AfternoonWindow => "afternoon purchase window",
        }
    }
}

/// Discrete contribution of one rule, allowing transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContribution {
    pub rule: RuleKind,
    pub points: u64,
}

/// Per-rule contributions and their sum for a single receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
    pub total: u64,
}

/// Evaluate every rule against the receipt and report each contribution
/// alongside the total.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    let contributions = rules::evaluate(receipt);
    let total = contributions.iter().map(|c| c.points).sum();

    debug!(retailer = %receipt.retailer, total, "scored receipt");

    ScoreBreakdown {
        contributions,
        total,
    }
}

/// Total points awarded to the receipt: the sum of the seven rule
/// contributions.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total
}
