//! Views over the expenses returned by [`crate::ExpenseStore::read_all`].
//!
//! All functions are pure: they expect the newest-first order the stores
//! return and never touch the backing resource.

use crate::{Amount, Clock, EngineError, Expense, Period, ResultEngine};

/// Total of one category within a month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Amount,
}

/// Per-category totals for a month, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    totals: Vec<CategoryTotal>,
}

impl MonthlySummary {
    fn add(&mut self, category: &str, amount: Amount) -> ResultEngine<()> {
        match self.totals.iter_mut().find(|t| t.category == category) {
            Some(total) => {
                total.amount = total
                    .amount
                    .checked_add(amount)
                    .ok_or(EngineError::Overflow)?;
            }
            None => self.totals.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Total for `category`, matched on its label.
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.totals.iter()
    }

    /// Sum over every category.
    pub fn total(&self) -> ResultEngine<Amount> {
        Amount::checked_sum(self.totals.iter().map(|t| t.amount)).ok_or(EngineError::Overflow)
    }
}

impl<'a> IntoIterator for &'a MonthlySummary {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.iter()
    }
}

/// The first `n` expenses, fewer when there are not enough.
pub fn last_n(expenses: &[Expense], n: usize) -> &[Expense] {
    &expenses[..n.min(expenses.len())]
}

/// Sums amounts per category for the expenses dated within `period`.
///
/// A period after the clock's current month yields an empty summary without
/// looking at `expenses`. Fails with [`EngineError::Overflow`] when a
/// category total does not fit in an [`Amount`].
pub fn monthly_summary(
    expenses: &[Expense],
    period: Period,
    clock: &impl Clock,
) -> ResultEngine<MonthlySummary> {
    let mut summary = MonthlySummary::default();
    if period.is_after(clock.today()) {
        return Ok(summary);
    }

    for expense in expenses.iter().filter(|e| period.contains(e.date)) {
        summary.add(expense.category.label(), expense.amount)?;
    }
    Ok(summary)
}

/// Sum of all amounts.
pub fn total(expenses: &[Expense]) -> ResultEngine<Amount> {
    Amount::checked_sum(expenses.iter().map(|e| e.amount)).ok_or(EngineError::Overflow)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Category, FixedClock};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(date(2024, 3, 1), Category::Food, "Lunch", Amount::new(250_00)),
            Expense::new(
                date(2024, 3, 1),
                Category::Bills,
                "Electricity",
                Amount::new(1_000_00),
            ),
            Expense::new(date(2024, 3, 1), Category::Food, "Dinner", Amount::new(120_50)),
            Expense::new(
                date(2024, 2, 15),
                Category::Food,
                "Groceries",
                Amount::new(500_00),
            ),
        ]
    }

    #[test]
    fn last_n_truncates_or_returns_everything() {
        let expenses = sample();
        assert_eq!(last_n(&expenses, 2), &expenses[..2]);
        assert_eq!(last_n(&expenses, 10).len(), 4);
        assert!(last_n(&expenses, 0).is_empty());
        assert!(last_n(&[], 10).is_empty());
    }

    #[test]
    fn summary_groups_in_first_encounter_order() {
        let clock = FixedClock(date(2024, 3, 20));
        let summary = monthly_summary(&sample(), Period::new(2024, 3).unwrap(), &clock).unwrap();

        let labels: Vec<_> = summary.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Bills"]);
        assert_eq!(summary.get("Food"), Some(Amount::new(370_50)));
        assert_eq!(summary.get("Bills"), Some(Amount::new(1_000_00)));
        assert_eq!(summary.total(), Ok(Amount::new(1_370_50)));
    }

    #[test]
    fn summary_for_future_month_is_empty() {
        let clock = FixedClock(date(2024, 2, 28));
        let summary = monthly_summary(&sample(), Period::new(2024, 3).unwrap(), &clock).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn summary_for_month_without_expenses_is_empty() {
        let clock = FixedClock(date(2024, 3, 20));
        let summary = monthly_summary(&sample(), Period::new(2024, 1).unwrap(), &clock).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total(), Ok(Amount::ZERO));
    }

    #[test]
    fn total_sums_every_amount() {
        assert_eq!(total(&sample()), Ok(Amount::new(1_870_50)));
        assert_eq!(total(&[]), Ok(Amount::ZERO));
    }

    #[test]
    fn sums_keep_fractions_beyond_cents() {
        let expenses = vec![
            Expense::new(date(2024, 3, 1), Category::Food, "Tea", "12.345".parse().unwrap()),
            Expense::new(date(2024, 3, 2), Category::Food, "Salt", "1e-05".parse().unwrap()),
        ];
        let clock = FixedClock(date(2024, 3, 20));
        let summary = monthly_summary(&expenses, Period::new(2024, 3).unwrap(), &clock).unwrap();
        assert_eq!(summary.get("Food"), Some("12.34501".parse().unwrap()));
    }

    #[test]
    fn overflowing_totals_are_an_error() {
        let huge: Amount = "50000000000000000000000000000".parse().unwrap();
        let expenses = vec![
            Expense::new(date(2024, 3, 1), Category::Food, "Feast", huge),
            Expense::new(date(2024, 3, 2), Category::Food, "Feast", huge),
        ];
        let clock = FixedClock(date(2024, 3, 20));

        assert_eq!(
            monthly_summary(&expenses, Period::new(2024, 3).unwrap(), &clock),
            Err(EngineError::Overflow)
        );
        assert_eq!(total(&expenses), Err(EngineError::Overflow));

        // Separate categories fit, only the grand total overflows.
        let expenses = vec![
            Expense::new(date(2024, 3, 1), Category::Food, "Feast", huge),
            Expense::new(date(2024, 3, 2), Category::Bills, "Rent", huge),
        ];
        let summary = monthly_summary(&expenses, Period::new(2024, 3).unwrap(), &clock).unwrap();
        assert_eq!(summary.get("Bills"), Some(huge));
        assert_eq!(summary.total(), Err(EngineError::Overflow));
    }
}
