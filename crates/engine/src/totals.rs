//! Aggregate sums over a set of entries.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::{Entry, util::round2};

/// Summed income, expenses and tax across a set of entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_tax: f64,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        total_income: 0.0,
        total_expenses: 0.0,
        total_tax: 0.0,
    };

    /// Sum each field over `entries`, rounding every sum to cents.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let (income, expenses, tax) =
            entries
                .iter()
                .fold((0.0, 0.0, 0.0), |(income, expenses, tax), entry| {
                    (
                        income + entry.income,
                        expenses + entry.expenses,
                        tax + entry.tax_amount,
                    )
                });

        Self {
            total_income: round2(income),
            total_expenses: round2(expenses),
            total_tax: round2(tax),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            total_income: round2(self.total_income + rhs.total_income),
            total_expenses: round2(self.total_expenses + rhs.total_expenses),
            total_tax: round2(self.total_tax + rhs.total_tax),
        }
    }
}

/// Shorthand for [`Totals::from_entries`].
pub fn totals(entries: &[Entry]) -> Totals {
    Totals::from_entries(entries)
}
