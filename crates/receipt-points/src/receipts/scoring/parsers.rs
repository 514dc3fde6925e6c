use chrono::{NaiveDate, NaiveTime};

/// A field failed to match its expected format. Absorbed by the rule that
/// needed the parse; never visible to callers of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("currency amount is not a non-negative decimal")]
    Currency,
    #[error("date does not match YYYY-MM-DD")]
    Date,
    #[error("time does not match 24-hour HH:MM")]
    Time,
}

/// Non-negative money value held as integer cents so rule arithmetic never
/// drifts through binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CurrencyAmount {
    cents: u64,
}

impl CurrencyAmount {
    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn is_multiple_of_quarter(&self) -> bool {
        self.cents % 25 == 0
    }

    /// `ceil(amount * 0.2)` in whole points. 0.2 of a cent count is
    /// `cents / 500`, rounded toward positive infinity.
    pub fn fifth_rounded_up(&self) -> u64 {
        self.cents.div_ceil(500)
    }
}

/// Parse a currency string: an optional leading `$`, then ASCII digits with
/// at most two fraction digits. Signs, exponents, grouping separators, and
/// empty strings all fail.
pub(crate) fn parse_currency(raw: &str) -> Result<CurrencyAmount, ParseFailure> {
    let unsigned = raw.strip_prefix('$').unwrap_or(raw);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseFailure::Currency);
    }
    let dollars: u64 = whole.parse().map_err(|_| ParseFailure::Currency)?;

    let cents = match fraction {
        None => 0,
        Some(digits) if digits.len() == 1 && digits.bytes().all(|b| b.is_ascii_digit()) => {
            let tenths: u64 = digits.parse().map_err(|_| ParseFailure::Currency)?;
            tenths * 10
        }
        Some(digits) if digits.len() == 2 && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse().map_err(|_| ParseFailure::Currency)?
        }
        Some(_) => return Err(ParseFailure::Currency),
    };

    dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .map(CurrencyAmount::from_cents)
        .ok_or(ParseFailure::Currency)
}

pub(crate) fn parse_purchase_date(raw: &str) -> Result<NaiveDate, ParseFailure> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ParseFailure::Date)
}

pub(crate) fn parse_purchase_time(raw: &str) -> Result<NaiveTime, ParseFailure> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| ParseFailure::Time)
}

/// Character count with every space removed. All other characters count,
/// punctuation included; the retailer-density rule is a literal
/// space-stripped length, not an alphanumeric count.
pub(crate) fn space_stripped_len(text: &str) -> usize {
    text.chars().filter(|c| *c != ' ').count()
}

/// Character count after trimming leading and trailing whitespace.
pub(crate) fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
