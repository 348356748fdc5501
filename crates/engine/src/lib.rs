pub use aggregate::{CategoryTotal, MonthlySummary, last_n, monthly_summary, total};
pub use category::Category;
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::NewExpense;
pub use error::{EngineError, ValidationError};
pub use expense::Expense;
pub use money::Amount;
pub use period::Period;
pub use store::{CsvStore, ExpenseStore, HEADER, MemoryStore};
pub use validate::{resolve_category, validate_amount, validate_date, validate_period};

mod aggregate;
mod category;
mod clock;
mod commands;
mod error;
mod expense;
mod money;
mod period;
mod store;
mod validate;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Expense tracker: the validation gate in front of a store, plus the views
/// computed from it.
#[derive(Debug)]
pub struct Tracker<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: ExpenseStore> Tracker<S> {
    /// Return a builder for `Tracker`. Help to build the struct.
    pub fn builder(store: S) -> TrackerBuilder<S> {
        TrackerBuilder {
            store,
            clock: SystemClock,
        }
    }
}

impl<S: ExpenseStore, C: Clock> Tracker<S, C> {
    /// Validates `cmd` and appends the resulting expense.
    ///
    /// Fields are checked in input order (date, category, amount) and the
    /// first failure is returned; nothing is written in that case.
    pub fn add_expense(&mut self, cmd: &NewExpense) -> ResultEngine<Expense> {
        let date = validate_date(&cmd.date, &self.clock)?;
        let category = resolve_category(cmd.selection, &cmd.custom_category)?;
        let amount = validate_amount(&cmd.amount)?;

        let expense = Expense::new(date, category, cmd.description.trim(), amount);
        self.store.append(&expense)?;
        tracing::info!("added expense {expense}");
        Ok(expense)
    }

    /// Every expense, newest first.
    pub fn expenses(&self) -> ResultEngine<Vec<Expense>> {
        self.store.read_all()
    }

    /// The `n` most recent expenses.
    pub fn recent(&self, n: usize) -> ResultEngine<Vec<Expense>> {
        let mut expenses = self.store.read_all()?;
        expenses.truncate(last_n(&expenses, n).len());
        Ok(expenses)
    }

    /// Per-category totals for `year`/`month`.
    ///
    /// A month after the current one returns an empty summary without
    /// reading the store.
    pub fn monthly_summary(&self, year: i32, month: u32) -> ResultEngine<MonthlySummary> {
        let period = validate_period(year, month)?;
        if period.is_after(self.clock.today()) {
            tracing::debug!("summary requested for future period {period}");
            return Ok(MonthlySummary::default());
        }
        let expenses = self.store.read_all()?;
        monthly_summary(&expenses, period, &self.clock)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// Builder for [`Tracker`].
#[derive(Debug)]
pub struct TrackerBuilder<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: ExpenseStore, C: Clock> TrackerBuilder<S, C> {
    /// Replace the clock used for date checks.
    pub fn clock<D: Clock>(self, clock: D) -> TrackerBuilder<S, D> {
        TrackerBuilder {
            store: self.store,
            clock,
        }
    }

    /// Initialize the store and construct `Tracker`.
    pub fn build(self) -> ResultEngine<Tracker<S, C>> {
        let mut store = self.store;
        store.initialize()?;
        Ok(Tracker {
            store,
            clock: self.clock,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn tracker() -> Tracker<MemoryStore, FixedClock> {
        Tracker::builder(MemoryStore::new())
            .clock(FixedClock(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()))
            .build()
            .unwrap()
    }

    #[test]
    fn add_expense_validates_before_storing() {
        let mut tracker = tracker();

        let err = tracker
            .add_expense(&NewExpense::new("2024-03-21", 1, "10"))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(ValidationError::FutureDate(_))
        ));
        let err = tracker
            .add_expense(&NewExpense::new("2024-03-01", 1, "0"))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation(ValidationError::NonPositive(Amount::ZERO))
        );
        let err = tracker
            .add_expense(&NewExpense::new("2024-03-01", 9, "10"))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation(ValidationError::InvalidSelection(9))
        );

        assert!(tracker.store().as_slice().is_empty());
    }

    #[test]
    fn add_expense_resolves_custom_category() {
        let mut tracker = tracker();
        let expense = tracker
            .add_expense(
                &NewExpense::new("2024-03-01", 6, "12.5")
                    .custom_category(" Pet Care ")
                    .description("Vet "),
            )
            .unwrap();

        assert_eq!(expense.category, Category::Other("Pet Care".to_string()));
        assert_eq!(expense.description, "Vet");
        assert_eq!(expense.amount, Amount::new(12_50));
        assert_eq!(tracker.store().as_slice(), &[expense]);
    }

    #[test]
    fn recent_and_summary_read_through_store() {
        let mut tracker = tracker();
        for (date, selection, amount) in [
            ("2024-03-01", 1, "250.00"),
            ("2024-03-01", 2, "1000.00"),
            ("2024-02-15", 1, "500.00"),
        ] {
            tracker
                .add_expense(&NewExpense::new(date, selection, amount))
                .unwrap();
        }

        let recent = tracker.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].category, Category::Food);
        assert_eq!(recent[1].category, Category::Bills);

        let summary = tracker.monthly_summary(2024, 3).unwrap();
        assert_eq!(summary.get("Food"), Some(Amount::new(250_00)));
        assert_eq!(summary.get("Bills"), Some(Amount::new(1_000_00)));
        assert!(tracker.monthly_summary(2024, 4).unwrap().is_empty());
        assert_eq!(
            tracker.monthly_summary(2024, 13).unwrap_err(),
            EngineError::Validation(ValidationError::InvalidMonth(13))
        );
    }
}
