//! Terminal front end for the statline statistics engine.
//!
//! Reads one sample per submission, either from `--data` or from an
//! interactive prompt, and renders the computed statistics, the sorted
//! view with the median rows highlighted, and (on request) the
//! step-by-step derivation of every number.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use statline::prelude::*;

#[derive(Parser)]
#[command(
    name = "statline",
    version,
    about = "Descriptive statistics and a least-squares trend line for a list of numbers"
)]
struct Cli {
    /// Numbers separated by spaces and/or commas; without it, an
    /// interactive prompt reads one sample per line
    #[arg(short, long)]
    data: Option<String>,

    /// Print the step-by-step derivation of each statistic
    #[arg(short, long)]
    explain: bool,

    /// Decimal places in the statistics block
    #[arg(short, long, default_value_t = 2)]
    precision: usize,

    /// Disable colored output
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    match &cli.data {
        Some(text) => run_once(text, &cli),
        None => run_loop(&cli),
    }
}

/// Analyze a single sample and exit; a bad sample fails the process.
fn run_once(text: &str, cli: &Cli) -> Result<()> {
    let summary: Summary<f64> = analyze(text)?;
    render(&summary, cli);
    Ok(())
}

/// Prompt for samples until EOF or an empty line; a bad sample prints
/// its error and the loop continues.
fn run_loop(cli: &Cli) -> Result<()> {
    println!("Enter numbers separated by spaces or commas (empty line to exit).");

    loop {
        print!("{} ", "data>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let line = line.trim();
        if line.is_empty() || line == "exit" || line == "quit" {
            break;
        }

        match analyze::<f64>(line) {
            Ok(summary) => render(&summary, cli),
            Err(e) => eprintln!("{} {}", "err:".red().bold(), e),
        }
    }

    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

fn render(summary: &Summary<f64>, cli: &Cli) {
    debug!(count = summary.count, "sample analyzed");

    let p = cli.precision;

    println!();
    println!("{}", "Statistics".bold());
    println!("  Count:             {}", summary.count);
    println!("  Mean:              {:.prec$}", summary.mean, prec = p);
    println!("  Median:            {:.prec$}", summary.median, prec = p);
    println!("  Mode:              {}", summary.modes);
    println!(
        "  Sample variance:   {:.prec$}",
        summary.sample_variance,
        prec = p
    );
    println!(
        "  Sample std dev:    {:.prec$}",
        summary.sample_std_dev,
        prec = p
    );
    println!("  Trend line:        {}", summary.trend);
    println!(
        "  R^2:               {:.prec$}",
        summary.diagnostics.r_squared,
        prec = p
    );

    println!();
    println!("{}", "Values".bold());
    print_values_table(summary);

    println!();
    println!("{}", "Sorted values".bold());
    print_sorted_table(summary);

    if cli.explain {
        println!();
        println!("{}", Walkthrough::for_summary(summary));
    }
}

/// Original input order with the fitted trend value beside each point.
fn print_values_table(summary: &Summary<f64>) {
    let fitted = summary.fitted();

    println!("{:>8} {:>12} {:>12}", "Position", "Value", "Trend");
    println!("{:-<34}", "");

    for (i, (value, fit)) in summary.values.iter().zip(&fitted).enumerate() {
        println!("{:>8} {:>12.4} {:>12.4}", i + 1, value, fit);
    }
}

/// Ascending order with the median-contributing rows highlighted.
fn print_sorted_table(summary: &Summary<f64>) {
    println!("{:>8} {:>12}", "Position", "Value");
    println!("{:-<21}", "");

    for (i, value) in summary.sorted.values.iter().enumerate() {
        let position = i + 1;
        let row = format!("{:>8} {:>12.4}", position, value);

        if summary.sorted.median_span.contains(position) {
            println!("{} {}", row.green().bold(), "<- median".green());
        } else {
            println!("{}", row);
        }
    }
}
