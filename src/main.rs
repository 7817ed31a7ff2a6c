use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use abacus::input::events_from_line;
use abacus::{CalcError, Calculator, CalculatorBuilder, CalculatorConfig, Notifier, RoundingMode};
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keypad calculator driven from the terminal.
///
/// Each input line is split into keys: digits, `.`, `+ - * / %`, `=` and the
/// names `enter`, `backspace` and `esc`. The history and display are printed
/// after every line. `tape` lists completed calculations, `quit` exits.
#[derive(Debug, Parser)]
#[command(name = "abacus", version, about)]
struct Args {
    /// TOML file with calculator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fractional digits kept in results (overrides the config file)
    #[arg(long)]
    decimals: Option<u32>,

    /// Tie-breaking rule: half-away-from-zero, half-even or half-up
    #[arg(long)]
    rounding: Option<RoundingMode>,

    /// Keys to feed instead of reading stdin, e.g. "5+3=" or "9 * 2 enter"
    #[arg(long)]
    keys: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CalculatorConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let Some(decimals) = args.decimals {
        config.decimals = decimals;
    }
    if let Some(rounding) = args.rounding {
        config.rounding = rounding;
    }
    info!(
        decimals = config.decimals,
        rounding = config.rounding.name(),
        "starting calculator"
    );

    let mut calc = CalculatorBuilder::new()
        .config(&config)
        .notifier(|error: &CalcError| eprintln!("! {error}"))
        .build()?;

    match args.keys {
        Some(keys) => println!("{}", calc.handle_all(events_from_line(&keys))),
        None => run_interactive(&mut calc)?,
    }
    Ok(())
}

fn run_interactive<N: Notifier>(calc: &mut Calculator<N>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "quit" | "exit" => break,
            "tape" => {
                for entry in calc.tape().entries() {
                    writeln!(stdout, "{entry}")?;
                }
            }
            _ => writeln!(stdout, "{}", calc.handle_all(events_from_line(&line)))?,
        }
        stdout.flush()?;
    }

    info!(calculations = calc.tape().len(), "session finished");
    Ok(())
}
