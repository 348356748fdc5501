//! Persistence of expenses.
//!
//! A store is an append-only log: records are never updated or removed.
//! [`ExpenseStore::read_all`] returns them newest date first, keeping insertion
//! order among records sharing a date.

use crate::{Expense, ResultEngine};

pub use csv_file::{CsvStore, HEADER};
pub use memory::MemoryStore;

mod csv_file;
mod memory;

/// Append-only storage of expenses.
pub trait ExpenseStore {
    /// Prepares the backing resource. Calling it again is a no-op.
    fn initialize(&mut self) -> ResultEngine<()>;

    /// Persists one expense after the existing ones. No validation happens
    /// here.
    fn append(&mut self, expense: &Expense) -> ResultEngine<()>;

    /// Every stored expense, sorted by date descending.
    fn read_all(&self) -> ResultEngine<Vec<Expense>>;
}

/// Stable sort, newest first.
pub(crate) fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
}
