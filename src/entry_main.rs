use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use expenses_lib::errors::ValidationError;
use expenses_lib::store;
use expenses_lib::types::Expense;
use expenses_lib::validate::{normalize_amount, normalize_category, normalize_date};

const RECENT_COUNT: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "expense_entry")]
#[command(about = "Interactive expense entry")]
struct Cli {
    /// Path to the CSV file used for storage.
    #[arg(short, long, default_value = "expenses.csv")]
    file: PathBuf,
}

/// Reads one trimmed line. `None` means stdin closed, which callers treat as
/// a request to quit.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompts until `normalize` accepts the input.
fn prompt_validated<F>(message: &str, normalize: F) -> io::Result<Option<String>>
where
    F: Fn(&str) -> Result<String, ValidationError>,
{
    loop {
        match prompt(message)? {
            None => return Ok(None),
            Some(raw) => match normalize(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => println!("Error: {}", e),
            },
        }
    }
}

/// Prompts for all fields of one expense and appends it. Returns false when
/// stdin closed mid-entry.
fn add_expense(path: &Path) -> Result<bool> {
    let Some(date) = prompt_validated("Date (YYYY-MM-DD, or today/今日): ", normalize_date)?
    else {
        return Ok(false);
    };
    let Some(amount) = prompt_validated("Amount (> 0, decimals allowed): ", normalize_amount)?
    else {
        return Ok(false);
    };
    let Some(category) =
        prompt_validated("Category (e.g. Food/Transport/Entertainment): ", normalize_category)?
    else {
        return Ok(false);
    };
    let Some(notes) = prompt("Notes (optional): ")? else {
        return Ok(false);
    };

    let expense = Expense::new(date, amount, category, notes);
    store::append(path, &expense)?;
    println!(
        "Added: {} | {} | {}{}",
        expense.date,
        expense.amount,
        expense.category,
        if expense.notes.is_empty() {
            String::new()
        } else {
            format!(" | notes: {}", expense.notes)
        }
    );
    Ok(true)
}

fn list_recent(path: &Path) -> Result<()> {
    let recent = store::read_recent(path, RECENT_COUNT)?;
    if recent.is_empty() {
        println!("No data yet (or the file header is not recognized).");
        return Ok(());
    }

    println!("\nLast {} entries:", recent.len());
    println!("{}", "-".repeat(60));
    for (i, expense) in recent.iter().enumerate() {
        let notes_part = if expense.notes.is_empty() {
            String::new()
        } else {
            format!(" | notes: {}", expense.notes)
        };
        println!(
            "{}. {} | {} | {}{}",
            i + 1,
            expense.date,
            expense.amount,
            expense.category,
            notes_part
        );
    }
    println!("{}", "-".repeat(60));
    Ok(())
}

fn print_menu() {
    println!("\n==============================");
    println!("Expense Tracker - Entry");
    println!("==============================");
    println!("1) Add an expense");
    println!("2) Show last {} entries", RECENT_COUNT);
    println!("3) Quit");
    println!("------------------------------");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    println!("Storing data in: {}", cli.file.display());
    store::ensure_initialized(&cli.file)?;

    loop {
        print_menu();
        let Some(choice) = prompt("Choose an option (1/2/3): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                if !add_expense(&cli.file)? {
                    break;
                }
            }
            "2" => list_recent(&cli.file)?,
            "3" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Invalid choice, enter 1 / 2 / 3."),
        }
    }
    Ok(())
}
