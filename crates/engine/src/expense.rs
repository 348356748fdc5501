//! The module contains the `Expense` type, the only record the tracker stores.
use core::fmt;

use chrono::NaiveDate;

use crate::{Amount, Category};

/// A dated, categorized expense.
///
/// Construct it from already validated parts: a store appends whatever it is
/// given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Amount,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            date,
            category,
            description: description.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}
