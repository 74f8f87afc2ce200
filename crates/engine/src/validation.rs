//! Boundary checks applied to submitted amounts before they reach the store.
//!
//! The store itself never validates: callers run these first.

use crate::{EngineError, ResultEngine};

/// Reject a negative amount, naming the offending field.
///
/// Zero is accepted. `NaN` is rejected because it is not `>= 0`.
pub fn validate_positive(value: f64, field: &str) -> ResultEngine<()> {
    if value >= 0.0 {
        return Ok(());
    }
    Err(EngineError::Validation {
        field: field.to_string(),
        value,
    })
}

pub fn validate_income(income: f64) -> ResultEngine<()> {
    validate_positive(income, "Income")
}

pub fn validate_expenses(expenses: f64) -> ResultEngine<()> {
    validate_positive(expenses, "Expenses")
}
