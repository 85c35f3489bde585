//! Budget extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{BUDGET_BARE, BUDGET_CURRENCY};
use super::phone::is_valid_contact;
use super::{ExtractionMatch, FieldExtractor};

/// Ways a budget can be recognized, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStrategy {
    /// `₹`, `Rs` or `INR` followed by a number.
    CurrencyMarked,
    /// Comma-grouped number without a currency marker.
    BareGrouped,
}

impl BudgetStrategy {
    fn find_all(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        let pattern = match self {
            BudgetStrategy::CurrencyMarked => &*BUDGET_CURRENCY,
            BudgetStrategy::BareGrouped => &*BUDGET_BARE,
        };

        pattern
            .find_iter(text)
            .filter_map(|m| {
                let value = m.as_str().trim().trim_end_matches(',').to_string();
                if *self == BudgetStrategy::BareGrouped && looks_like_phone(&value) {
                    return None;
                }
                Some(ExtractionMatch::new(value, m.as_str()).with_position(m.start(), m.end()))
            })
            .collect()
    }
}

fn looks_like_phone(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    is_valid_contact(&digits)
}

/// Budget extractor running a chain of strategies.
pub struct BudgetExtractor {
    strategies: Vec<BudgetStrategy>,
}

impl BudgetExtractor {
    /// Currency marker required.
    pub fn new() -> Self {
        Self {
            strategies: vec![BudgetStrategy::CurrencyMarked],
        }
    }

    /// Also accept bare comma-grouped numbers when no marked budget exists.
    pub fn with_bare_numbers(mut self, allow: bool) -> Self {
        self.strategies.retain(|s| *s != BudgetStrategy::BareGrouped);
        if allow {
            self.strategies.push(BudgetStrategy::BareGrouped);
        }
        self
    }

    pub fn strategies(&self) -> &[BudgetStrategy] {
        &self.strategies
    }
}

impl Default for BudgetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BudgetExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.strategies
            .iter()
            .find_map(|s| s.find_all(text).into_iter().next())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();
        for strategy in &self.strategies {
            for m in strategy.find_all(text) {
                // A bare number inside an already marked budget is the same budget
                let overlaps = results.iter().any(|r| match (r.position, m.position) {
                    (Some((a0, a1)), Some((b0, b1))) => a0 < b1 && b0 < a1,
                    _ => false,
                });
                if !overlaps {
                    results.push(m);
                }
            }
        }
        results
    }
}

/// Numeric value of a budget string ("₹1,50,000.50" → 150000.50).
pub fn parse_budget_amount(budget: &str) -> Option<Decimal> {
    let start = budget.find(|c: char| c.is_ascii_digit())?;
    let number: String = budget[start..]
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Decimal::from_str(&number).ok()
}
