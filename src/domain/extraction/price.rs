//! Price extraction from query text and from budget answers.
//!
//! Patterns are tried in layers; the first layer that matches wins:
//!
//! | Layer     | Example                      | Result               | Confidence |
//! |-----------|------------------------------|----------------------|------------|
//! | Range     | "2000 to 5000", "2-5k"       | literal bounds       | 0.90       |
//! | Qualified | "under 50k", "around 4k"     | `[ratio*N, N]`       | 0.85       |
//! | Marked    | "₹4000", "$300", "4k"        | `[ratio*N, N]`       | 0.80       |
//! | Bare      | "for 500"                    | `[ratio*N, N]`       | 0.70       |
//!
//! Bare amounts below [`MIN_BARE_AMOUNT`] are not read as prices, and neither
//! is a range whose bounds are both unmarked and below it ("iphone 13 to 15").
//! A bare year after "in", "since" or "from" is skipped.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, FieldName, PriceRange, ValidationError};
use crate::domain::vocabulary::text;

/// Smallest unmarked number treated as a budget.
pub const MIN_BARE_AMOUNT: f64 = 100.0;

const YEAR_PREPOSITIONS: [&str; 3] = ["in", "since", "from"];

const CURRENCY_PREFIX: &str = r"(?:₹|rs\.?|inr|\$|usd)";
const CURRENCY_SUFFIX: &str = r"(?:rupees|rs|inr|dollars|usd|bucks)";
const NUMBER: &str = r"\d+(?:,\d{2,3})*(?:\.\d+)?";
const MULTIPLIER: &str = r"k|thousand|lakhs?|lacs?";

/// Builds an amount pattern whose groups are prefixed with `tag`.
fn amount(tag: &str) -> String {
    format!(
        r"(?:(?P<{tag}_cur>{CURRENCY_PREFIX})\s*|\b)(?P<{tag}_num>{NUMBER})(?:\s*(?P<{tag}_mult>{MULTIPLIER}))?\b(?:\s*(?P<{tag}_post>{CURRENCY_SUFFIX})\b)?"
    )
}

static RANGE_BETWEEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\bbetween\s+{}\s+and\s+{}", amount("a"), amount("b")))
        .expect("between-range pattern is valid")
});

static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\s*(?:to|-|–)\s*{}", amount("a"), amount("b")))
        .expect("range pattern is valid")
});

static QUALIFIED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?:under|below|less than|upto|up to|within|max|maximum|around|about|approx|approximately|roughly|budget(?:\s+(?:of|is))?)\s+{}",
        amount("v")
    ))
    .expect("qualified pattern is valid")
});

static AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&amount("v")).expect("amount pattern is valid"));

static ANSWER_SINGLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?P<neg>-)?\s*{}$", amount("v"))).expect("answer pattern is valid")
});

static ANSWER_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<neg_a>-)?\s*{}\s*(?:to|-|–)\s*(?P<neg_b>-)?\s*{}$",
        amount("a"),
        amount("b")
    ))
    .expect("answer range pattern is valid")
});

/// Which pattern layer produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceForm {
    Range,
    Qualified,
    Marked,
    Bare,
}

impl PriceForm {
    /// Confidence assigned to prices read through this layer.
    pub fn confidence(&self) -> Confidence {
        match self {
            PriceForm::Range => Confidence::new(0.90),
            PriceForm::Qualified => Confidence::new(0.85),
            PriceForm::Marked => Confidence::new(0.80),
            PriceForm::Bare => Confidence::new(0.70),
        }
    }
}

/// A price found in text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceMatch {
    pub range: PriceRange,
    pub form: PriceForm,
}

impl PriceMatch {
    pub fn confidence(&self) -> Confidence {
        self.form.confidence()
    }
}

/// A parsed amount before it becomes a range.
#[derive(Debug, Clone, Copy)]
struct Amount {
    value: f64,
    marked: bool,
    has_multiplier: bool,
    factor: f64,
}

impl Amount {
    fn from_captures(caps: &Captures<'_>, tag: &str) -> Option<Self> {
        let raw = caps.name(&format!("{tag}_num"))?.as_str().replace(',', "");
        let number: f64 = raw.parse().ok()?;
        let multiplier = caps.name(&format!("{tag}_mult")).map(|m| m.as_str());
        let factor = match multiplier {
            Some(m) if m.starts_with("lakh") || m.starts_with("lac") => 100_000.0,
            Some(_) => 1_000.0,
            None => 1.0,
        };
        let value = number * factor;
        // Digit runs too long for f64 are noise, not budgets.
        if !value.is_finite() {
            return None;
        }
        let has_currency = caps.name(&format!("{tag}_cur")).is_some()
            || caps.name(&format!("{tag}_post")).is_some();
        Some(Self {
            value,
            marked: has_currency || multiplier.is_some(),
            has_multiplier: multiplier.is_some(),
            factor,
        })
    }
}

/// Reads budgets out of text.
#[derive(Debug, Clone, Copy)]
pub struct PriceExtractor {
    floor_ratio: f64,
}

impl PriceExtractor {
    /// Creates an extractor; single amounts become `[floor_ratio * N, N]`.
    pub fn new(floor_ratio: f64) -> Self {
        Self { floor_ratio }
    }

    /// Finds the budget in normalized query text.
    ///
    /// Returns `Ok(None)` when nothing price-like is present, and an error
    /// when a price was stated but violates the range invariant (for example
    /// "5000 to 2000"). Reversed ranges are never silently swapped.
    pub fn extract(&self, normalized: &str) -> Result<Option<PriceMatch>, ValidationError> {
        for pattern in [&*RANGE_BETWEEN, &*RANGE] {
            for caps in pattern.captures_iter(normalized) {
                let (Some(low), Some(high)) = (
                    Amount::from_captures(&caps, "a"),
                    Amount::from_captures(&caps, "b"),
                ) else {
                    continue;
                };
                if !low.marked && !high.marked && high.value < MIN_BARE_AMOUNT {
                    continue;
                }
                let range = Self::range_between(low, high)?;
                return Ok(Some(PriceMatch {
                    range,
                    form: PriceForm::Range,
                }));
            }
        }

        if let Some(amount) = QUALIFIED
            .captures(normalized)
            .and_then(|caps| Amount::from_captures(&caps, "v"))
        {
            return self.single(amount.value, PriceForm::Qualified).map(Some);
        }

        let amounts: Vec<(usize, Amount)> = AMOUNT
            .captures_iter(normalized)
            .filter_map(|caps| {
                let start = caps.get(0)?.start();
                Amount::from_captures(&caps, "v").map(|a| (start, a))
            })
            .collect();

        if let Some((_, amount)) = amounts.iter().find(|(_, a)| a.marked) {
            return self.single(amount.value, PriceForm::Marked).map(Some);
        }
        if let Some((_, amount)) = amounts.iter().find(|(start, a)| {
            a.value >= MIN_BARE_AMOUNT && !is_year_reference(normalized, *start, a.value)
        }) {
            return self.single(amount.value, PriceForm::Bare).map(Some);
        }

        Ok(None)
    }

    /// Parses a budget answer such as "5000", "₹3,500", "2k to 4k" or "under 10k".
    ///
    /// # Errors
    ///
    /// - `OutOfRange` for negative amounts or reversed ranges
    /// - `InvalidFormat` when no amount can be read
    pub fn parse_answer(&self, answer: &str) -> Result<PriceRange, ValidationError> {
        let normalized = text::normalize(answer);

        if let Some(caps) = ANSWER_SINGLE.captures(&normalized) {
            if let Some(amount) = Amount::from_captures(&caps, "v") {
                let value = signed(amount.value, caps.name("neg").is_some());
                return PriceRange::from_upper_bound(value, self.floor_ratio);
            }
        }

        if let Some(caps) = ANSWER_RANGE.captures(&normalized) {
            if let (Some(low), Some(high)) = (
                Amount::from_captures(&caps, "a"),
                Amount::from_captures(&caps, "b"),
            ) {
                let low = Amount {
                    value: signed(low.value, caps.name("neg_a").is_some()),
                    ..low
                };
                let high = Amount {
                    value: signed(high.value, caps.name("neg_b").is_some()),
                    ..high
                };
                return Self::range_between(low, high);
            }
        }

        match self.extract(&normalized)? {
            Some(found) => Ok(found.range),
            None => Err(ValidationError::invalid_format(
                FieldName::PriceRange.as_str(),
                format!("could not read an amount from '{}'", answer.trim()),
            )),
        }
    }

    fn single(&self, value: f64, form: PriceForm) -> Result<PriceMatch, ValidationError> {
        let range = PriceRange::from_upper_bound(value, self.floor_ratio)?;
        Ok(PriceMatch { range, form })
    }

    /// "2 to 5k" reads as 2000 to 5000: an unmarked lower bound borrows the
    /// upper bound's multiplier when that keeps it below the upper bound.
    fn range_between(low: Amount, high: Amount) -> Result<PriceRange, ValidationError> {
        let low_value = if !low.has_multiplier
            && !low.marked
            && high.has_multiplier
            && low.value * high.factor <= high.value
        {
            low.value * high.factor
        } else {
            low.value
        };
        PriceRange::new(low_value, high.value)
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new(0.7)
    }
}

/// "in 2024", "since 2019": a whole number in 1900..=2099 right after a
/// year preposition.
fn is_year_reference(normalized: &str, start: usize, value: f64) -> bool {
    if value.fract() != 0.0 || !(1900.0..=2099.0).contains(&value) {
        return false;
    }
    let previous_word = normalized[..start]
        .trim_end()
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");
    YEAR_PREPOSITIONS.contains(&previous_word)
}

fn signed(value: f64, negative: bool) -> f64 {
    if negative {
        -value
    } else {
        value
    }
}
