//! The module contains the `Entry` type, one persisted income/expense/tax record.
//!
//! `tax_amount` is derived once at creation and stored; it is never recomputed
//! on read, so entries are immutable after insert.
use core::fmt;

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::util::{normalize_optional_text, round2};

/// Tax rate applied when the caller does not provide one.
pub const DEFAULT_TAX_RATE: f64 = 24.0;

/// A stored ledger entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i32,
    pub income: f64,
    pub expenses: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub description: Option<String>,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} income {:.2} expenses {:.2} tax {:.2} ({}%)",
            self.id, self.income, self.expenses, self.tax_amount, self.tax_rate
        )
    }
}

/// Input for [`Engine::create`](crate::Engine::create).
#[derive(Clone, Debug, PartialEq)]
pub struct NewEntry {
    pub income: f64,
    pub expenses: f64,
    pub tax_rate: f64,
    pub description: Option<String>,
}

impl NewEntry {
    pub fn new(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            tax_rate: DEFAULT_TAX_RATE,
            description: None,
        }
    }

    pub fn tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Tax owed on `expenses` at `tax_rate` percent, rounded to cents.
pub fn tax_amount(expenses: f64, tax_rate: f64) -> f64 {
    round2(expenses * tax_rate / 100.0)
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tax_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Double")]
    pub income: f64,
    #[sea_orm(column_type = "Double")]
    pub expenses: f64,
    #[sea_orm(column_type = "Double")]
    pub tax_amount: f64,
    #[sea_orm(column_type = "Double")]
    pub tax_rate: f64,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Entry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            income: model.income,
            expenses: model.expenses,
            tax_rate: model.tax_rate,
            tax_amount: model.tax_amount,
            description: model.description,
        }
    }
}

impl From<&NewEntry> for ActiveModel {
    fn from(entry: &NewEntry) -> Self {
        let expenses = round2(entry.expenses);
        Self {
            id: ActiveValue::NotSet,
            income: ActiveValue::Set(round2(entry.income)),
            expenses: ActiveValue::Set(expenses),
            tax_amount: ActiveValue::Set(tax_amount(expenses, entry.tax_rate)),
            tax_rate: ActiveValue::Set(entry.tax_rate),
            description: ActiveValue::Set(normalize_optional_text(entry.description.as_deref())),
        }
    }
}
