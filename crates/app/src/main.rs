use std::io;

use clap::{Args, Parser, Subcommand};
use engine::{Clock, CsvStore, EngineError, NewExpense, Tracker, ValidationError, validate_period};

use error::Result;
use settings::Settings;

mod display;
mod error;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "expenses")]
#[command(about = "Record expenses and review monthly totals")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the data file (also read from `EXPENSES_DATA_FILE`).
    #[arg(long)]
    data_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the data file if it does not exist yet.
    Init,
    /// Record a new expense.
    Add(AddArgs),
    /// Show recorded expenses, newest first.
    List(ListArgs),
    /// Show per-category totals for a month.
    Summary(SummaryArgs),
    /// Show the category codes accepted by `add`.
    Categories,
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Date of the expense, YYYY-MM-DD.
    #[arg(long)]
    date: String,
    /// Category code, see `categories`.
    #[arg(long)]
    category: u8,
    /// Custom category label, used with code 6.
    #[arg(long, default_value = "")]
    other: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, allow_hyphen_values = true)]
    amount: String,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Number of most recent expenses to show.
    #[arg(long, conflicts_with = "all")]
    last: Option<usize>,
    /// Show every expense.
    #[arg(long)]
    all: bool,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    #[arg(long)]
    year: i32,
    #[arg(long)]
    month: u32,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(data_file) = cli.data_file {
        settings.data_file = data_file;
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!(
            "expenses={level},engine={level}",
            level = settings.level
        ))
        .init();
    tracing::debug!("using data file {}", settings.data_file);

    let mut tracker = Tracker::builder(CsvStore::new(&settings.data_file)).build()?;
    let symbol = settings.currency_symbol.as_str();

    match cli.command {
        Command::Init => {
            println!("expense store ready: {}", tracker.store().path().display());
        }
        Command::Add(args) => {
            let cmd = NewExpense::new(args.date, args.category, args.amount)
                .custom_category(args.other)
                .description(args.description);
            match tracker.add_expense(&cmd) {
                Ok(expense) => println!("Expense added successfully! ({expense})"),
                Err(EngineError::Validation(err)) => rejected(err),
                Err(err) => return Err(err.into()),
            }
        }
        Command::List(args) => {
            let (title, expenses) = if args.all {
                ("Overall Expenses".to_string(), tracker.expenses()?)
            } else {
                let n = args.last.unwrap_or(settings.recent_limit);
                (format!("Last {n} Expenses"), tracker.recent(n)?)
            };
            display::print_expenses(io::stdout().lock(), &title, &expenses, symbol)?;
        }
        Command::Summary(args) => {
            let summary = match tracker.monthly_summary(args.year, args.month) {
                Ok(summary) => summary,
                Err(EngineError::Validation(err)) => rejected(err),
                Err(err) => return Err(err.into()),
            };
            let period = validate_period(args.year, args.month).unwrap_or_else(|err| rejected(err));
            display::print_summary(
                io::stdout().lock(),
                period,
                tracker.clock().today(),
                &summary,
                symbol,
            )?;
        }
        Command::Categories => {
            display::print_categories(io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Input rejected by the engine: report it and exit with status 2.
fn rejected(err: ValidationError) -> ! {
    eprintln!("{err}");
    std::process::exit(2);
}
