use chrono::{Datelike, Timelike};

use super::parsers::{
    parse_currency, parse_purchase_date, parse_purchase_time, space_stripped_len, trimmed_len,
};
use super::{RuleContribution, RuleKind};
use crate::receipts::domain::Receipt;

/// Evaluate the seven rules independently and in a fixed order. Each rule
/// yields a non-negative contribution; a field that fails to parse costs only
/// the rules that needed it.
pub(crate) fn evaluate(receipt: &Receipt) -> Vec<RuleContribution> {
    vec![
        RuleContribution {
            rule: RuleKind::RetailerDensity,
            points: retailer_density(&receipt.retailer),
        },
        RuleContribution {
            rule: RuleKind::RoundDollar,
            points: round_dollar(&receipt.total),
        },
        RuleContribution {
            rule: RuleKind::QuarterMultiple,
            points: quarter_multiple(&receipt.total),
        },
        RuleContribution {
            rule: RuleKind::ItemPairs,
            points: item_pairs(receipt.items.len()),
        },
        RuleContribution {
            rule: RuleKind::DescriptionLength,
            points: description_length(receipt),
        },
        RuleContribution {
            rule: RuleKind::OddPurchaseDay,
            points: odd_purchase_day(&receipt.purchase_date),
        },
        RuleContribution {
            rule: RuleKind::AfternoonWindow,
            points: afternoon_window(&receipt.purchase_time),
        },
    ]
}

/// One point per character of the retailer name with spaces removed.
fn retailer_density(retailer: &str) -> u64 {
    space_stripped_len(retailer) as u64
}

/// 50 points when the textual total ends in ".00". A suffix check on the
/// submitted string, deliberately not a numeric comparison.
fn round_dollar(total: &str) -> u64 {
    if total.ends_with(".00") {
        50
    } else {
        0
    }
}

/// 25 points when the total is a multiple of $0.25.
fn quarter_multiple(total: &str) -> u64 {
    match parse_currency(total) {
        Ok(amount) if amount.is_multiple_of_quarter() => 25,
        _ => 0,
    }
}

/// 5 points per complete pair of items. The odd item out earns nothing.
fn item_pairs(item_count: usize) -> u64 {
    (item_count / 2) as u64 * 5
}

/// Per item: when the trimmed description length is a multiple of 3, the item
/// earns a fifth of its price, rounded up. Length 0 is a multiple of 3 and
/// qualifies (its contribution is 0 regardless of price rounding).
fn description_length(receipt: &Receipt) -> u64 {
    receipt
        .items
        .iter()
        .filter(|item| trimmed_len(&item.short_description) % 3 == 0)
        .filter_map(|item| parse_currency(&item.price).ok())
        .map(|amount| amount.fifth_rounded_up())
        .sum()
}

/// 6 points when the day-of-month is odd.
fn odd_purchase_day(purchase_date: &str) -> u64 {
    match parse_purchase_date(purchase_date) {
        Ok(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points when the purchase time falls strictly between 14:00 and 16:00.
/// Both bounds are exclusive: exactly 14:00 or 16:00 earns nothing.
fn afternoon_window(purchase_time: &str) -> u64 {
    match parse_purchase_time(purchase_time) {
        Ok(time) => {
            let minute_of_day = time.hour() * 60 + time.minute();
            if minute_of_day > 14 * 60 && minute_of_day < 16 * 60 {
                10
            } else {
                0
            }
        }
        Err(_) => 0,
    }
}
