//! Command structs for engine operations.
//!
//! `NewExpense` carries the raw text collected by a front end, keeping call
//! sites readable. The engine validates it before anything is stored.

/// Raw input for a new expense.
#[derive(Clone, Debug, Default)]
pub struct NewExpense {
    pub date: String,
    pub selection: u8,
    pub custom_category: String,
    pub description: String,
    pub amount: String,
}

impl NewExpense {
    #[must_use]
    pub fn new(date: impl Into<String>, selection: u8, amount: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            selection,
            custom_category: String::new(),
            description: String::new(),
            amount: amount.into(),
        }
    }

    /// Label used when `selection` is the "Other" entry.
    #[must_use]
    pub fn custom_category(mut self, label: impl Into<String>) -> Self {
        self.custom_category = label.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
