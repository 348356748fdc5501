//! Plain-text rendering of engine views.
use std::io::Write;

use chrono::NaiveDate;
use engine::{Amount, Category, Expense, MonthlySummary, Period, total};

use crate::error::Result;

const RULE_WIDE: usize = 70;
const RULE_NARROW: usize = 40;

/// `symbol` followed by the amount rounded to cents with thousands
/// separators, e.g. `₹1,234.50`.
pub fn format_currency(symbol: &str, amount: Amount) -> String {
    let rounded = amount.value().round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (digits, frac) = text.split_once('.').unwrap_or((&text, ""));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{symbol}{grouped}.{frac:0<2}")
}

pub fn print_expenses<W: Write>(
    mut wr: W,
    title: &str,
    expenses: &[Expense],
    symbol: &str,
) -> Result<()> {
    if expenses.is_empty() {
        writeln!(wr, "No expenses recorded yet!")?;
        return Ok(());
    }

    writeln!(wr, "{title}:")?;
    writeln!(wr, "{}", "-".repeat(RULE_WIDE))?;
    for expense in expenses {
        writeln!(
            wr,
            "Date: {}, Category: {}, Description: {}, Amount: {}",
            expense.date.format("%Y-%m-%d"),
            expense.category,
            expense.description,
            format_currency(symbol, expense.amount)
        )?;
    }
    writeln!(wr, "{}", "-".repeat(RULE_WIDE))?;
    writeln!(wr, "Total: {}", format_currency(symbol, total(expenses)?))?;
    Ok(())
}

/// An empty summary for a month after `today` gets the future-month notice.
pub fn print_summary<W: Write>(
    mut wr: W,
    period: Period,
    today: NaiveDate,
    summary: &MonthlySummary,
    symbol: &str,
) -> Result<()> {
    if summary.is_empty() {
        if period.is_after(today) {
            writeln!(wr, "Cannot generate summary for future months!")?;
        } else {
            writeln!(wr, "No expenses recorded for {period}")?;
        }
        return Ok(());
    }

    writeln!(wr, "Monthly Summary for {period}")?;
    writeln!(wr, "{}", "-".repeat(RULE_NARROW))?;
    for entry in summary {
        writeln!(
            wr,
            "{}: {}",
            entry.category,
            format_currency(symbol, entry.amount)
        )?;
    }
    writeln!(wr, "{}", "-".repeat(RULE_NARROW))?;
    writeln!(
        wr,
        "Total Expenses: {}",
        format_currency(symbol, summary.total()?)
    )?;
    Ok(())
}

pub fn print_categories<W: Write>(mut wr: W) -> Result<()> {
    writeln!(wr, "Available Categories:")?;
    for (code, label) in Category::MENU {
        if code == Category::OTHER_SELECTION {
            writeln!(wr, "{code}. {label} (requires --other)")?;
        } else {
            writeln!(wr, "{code}. {label}")?;
        }
    }
    Ok(())
}
