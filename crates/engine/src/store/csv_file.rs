//! Flat comma-separated file backend.
//!
//! Layout, one record per line after a fixed header:
//!
//! ```text
//! Date,Category,Description,Amount
//! 2024-03-01,Food,Lunch,250.00
//! ```
//!
//! Fields are never quoted or escaped. A description containing a comma is
//! written as is and makes that line unreadable afterwards (`read_all` fails
//! on it with [`EngineError::Parse`]).

use std::{
    fs::{self, File, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use crate::{Amount, Category, EngineError, Expense, ResultEngine, validate::parse_date};

use super::{ExpenseStore, sort_newest_first};

/// First line of every store file.
pub const HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

#[derive(Serialize)]
struct Row<'a> {
    date: String,
    category: &'a str,
    description: &'a str,
    amount: String,
}

impl<'a> From<&'a Expense> for Row<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.label(),
            description: &expense.description,
            amount: expense.amount.to_string(),
        }
    }
}

/// Store backed by a plain text file.
///
/// The file is opened and closed inside each call. There is no locking: two
/// processes appending at the same time can interleave their lines.
#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, err: std::io::Error) -> EngineError {
        EngineError::io(self.path.clone(), err)
    }

    fn csv_err(&self, err: csv::Error) -> EngineError {
        if let csv::ErrorKind::Io(io) = err.kind() {
            return self.io_err(std::io::Error::new(io.kind(), io.to_string()));
        }
        EngineError::Csv(err)
    }

    /// Like [`Self::csv_err`], but a record the reader cannot decode is a
    /// malformed line.
    fn read_err(&self, err: csv::Error) -> EngineError {
        if err.is_io_error() {
            return self.csv_err(err);
        }
        let line = err.position().map_or(0, |pos| pos.line());
        EngineError::parse(line, err.to_string())
    }
}

impl ExpenseStore for CsvStore {
    fn initialize(&mut self) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| self.io_err(err))?;
        }

        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(()),
            Err(err) => return Err(self.io_err(err)),
        };

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(file);
        writer
            .write_record(HEADER)
            .map_err(|err| self.csv_err(err))?;
        writer.flush().map_err(|err| self.io_err(err))?;

        tracing::info!("created expense store at {}", self.path.display());
        Ok(())
    }

    fn append(&mut self, expense: &Expense) -> ResultEngine<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_err(err))?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(file);
        writer
            .serialize(Row::from(expense))
            .map_err(|err| self.csv_err(err))?;
        writer.flush().map_err(|err| self.io_err(err))?;

        tracing::debug!("appended expense {expense}");
        Ok(())
    }

    fn read_all(&self) -> ResultEngine<Vec<Expense>> {
        let file = File::open(&self.path).map_err(|err| self.io_err(err))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let mut expenses = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|err| self.read_err(err))?;
            if index == 0 {
                if record.iter().ne(HEADER) {
                    tracing::warn!(
                        "unexpected header in {}: {:?}",
                        self.path.display(),
                        record
                    );
                }
                continue;
            }
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }
            expenses.push(parse_record(&record)?);
        }

        sort_newest_first(&mut expenses);
        tracing::debug!(
            "read {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }
}

fn parse_record(record: &StringRecord) -> ResultEngine<Expense> {
    let line = record.position().map_or(0, |pos| pos.line());

    if record.len() != 4 {
        return Err(EngineError::parse(
            line,
            format!("expected 4 fields, found {}", record.len()),
        ));
    }
    let (date, category, description, amount) = (&record[0], &record[1], &record[2], &record[3]);

    let date = parse_date(date.trim())
        .ok_or_else(|| EngineError::parse(line, format!("invalid date \"{date}\"")))?;
    let amount: Amount = amount
        .trim()
        .parse()
        .map_err(|err: crate::ValidationError| EngineError::parse(line, err.to_string()))?;

    Ok(Expense::new(
        date,
        Category::from_label(category),
        description,
        amount,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn parses_line_written_by_older_versions() {
        let expense = parse_record(&record(&["2024-03-01", "Food", "Lunch", "250.0"])).unwrap();
        assert_eq!(expense.amount, Amount::new(25_000));
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn keeps_custom_category_and_empty_description() {
        let expense = parse_record(&record(&["2024-03-01", "Pet Care", "", "12"])).unwrap();
        assert_eq!(expense.category, Category::Other("Pet Care".to_string()));
        assert!(expense.description.is_empty());
    }

    #[test]
    fn wrong_field_count_is_a_parse_error() {
        let err = parse_record(&record(&["2024-03-01", "Food", "a", "b", "250.0"])).unwrap_err();
        assert!(matches!(err, EngineError::Parse { .. }));
        let err = parse_record(&record(&["2024-03-01", "Food", "250.0"])).unwrap_err();
        assert!(matches!(err, EngineError::Parse { .. }));
    }

    #[test]
    fn non_numeric_amount_is_a_parse_error() {
        let err = parse_record(&record(&["2024-03-01", "Food", "Lunch", "lots"])).unwrap_err();
        assert!(matches!(err, EngineError::Parse { ref reason, .. } if reason.contains("lots")));
    }

    #[test]
    fn reads_any_decimal_precision() {
        let expense = parse_record(&record(&["2024-03-01", "Food", "Tea", "12.345"])).unwrap();
        assert_eq!(expense.amount.to_string(), "12.345");
        let expense = parse_record(&record(&["2024-03-01", "Food", "Salt", "1e-05"])).unwrap();
        assert_eq!(expense.amount.to_string(), "0.00001");
    }

    #[test]
    fn row_keeps_at_least_two_decimals() {
        let expense = Expense::new(
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Category::Other("Pet Care".to_string()),
            "Vet",
            Amount::new(1_000_00),
        );
        let row = Row::from(&expense);
        assert_eq!(row.date, "2024-03-01");
        assert_eq!(row.category, "Pet Care");
        assert_eq!(row.amount, "1000.00");

        let expense = Expense::new(expense.date, Category::Food, "Tea", "12.345".parse().unwrap());
        assert_eq!(Row::from(&expense).amount, "12.345");
    }
}
