use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use clap::Parser;
use expenses_lib::build_report;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "expense_report")]
#[command(about = "Render a category breakdown chart from the expense store")]
struct Cli {
    /// CSV path (needs `category` and `amount` columns).
    #[arg(short, long)]
    input: PathBuf,

    /// Output image path.
    #[arg(short, long, default_value = "output/pie.png")]
    output: PathBuf,

    /// Chart title.
    #[arg(long, default_value = "Spending by Category")]
    title: String,

    /// Open the saved image in the platform viewer.
    #[arg(long)]
    show: bool,

    /// Slices below this share of the total fold into "Other" (e.g. 0.03 = 3%).
    #[arg(long, default_value_t = 0.03)]
    min_ratio: f64,
}

fn open_in_viewer(path: &Path) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    };
    if let Err(e) = Command::new(opener).arg(path).spawn() {
        warn!(error = %e, "could not open image viewer");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    build_report(&cli.input, &cli.title, &cli.output, cli.min_ratio)?;
    println!("[OK] Saved: {}", cli.output.display());

    if cli.show {
        open_in_viewer(&cli.output);
    }
    Ok(())
}
