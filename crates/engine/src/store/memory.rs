use crate::{Expense, ResultEngine};

use super::{ExpenseStore, sort_newest_first};

/// Store keeping everything in a `Vec`, nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    expenses: Vec<Expense>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order.
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }
}

impl ExpenseStore for MemoryStore {
    fn initialize(&mut self) -> ResultEngine<()> {
        Ok(())
    }

    fn append(&mut self, expense: &Expense) -> ResultEngine<()> {
        self.expenses.push(expense.clone());
        Ok(())
    }

    fn read_all(&self) -> ResultEngine<Vec<Expense>> {
        let mut expenses = self.expenses.clone();
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }
}
