use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vendmach::application::machine::VendingMachine;
use vendmach::config::{default_stock, float_from_entries, parse_float_entry};
use vendmach::domain::coin::Coin;
use vendmach::interfaces::command::Command;
use vendmach::interfaces::csv::stock_reader::StockReader;
use vendmach::interfaces::display;

/// Coin-operated vending machine driven by commands on stdin.
///
/// Commands: `1 <coin>` insert, `2 <item>` buy, `3` take items,
/// `4` return inserted coins, `5` take returned coins.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stock CSV file with a `name,price,stock` header. Uses the built-in stock if omitted.
    #[arg(long)]
    stock: Option<PathBuf>,

    /// Coin float as COIN=COUNT, repeatable (e.g. --float 10=200 --float 100=10).
    #[arg(long = "float", value_name = "COIN=COUNT", value_parser = parse_float_entry)]
    float: Vec<(Coin, u32)>,

    /// Do not print the status panel after each command.
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let slots = match &cli.stock {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            StockReader::new(file).read_all().into_diagnostic()?
        }
        None => default_stock(),
    };
    let mut machine = VendingMachine::new(float_from_entries(&cli.float), slots);

    info!(slots = machine.slots().len(), "vending machine ready, press CTRL-C to exit");
    println!("{}", display::render(&machine));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.into_diagnostic()?,
            _ = tokio::signal::ctrl_c() => break,
        };
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line).and_then(|cmd| cmd.execute(&mut machine)) {
            Ok(output) => {
                if let Some(output) = output {
                    println!("{output}");
                }
                if !cli.quiet {
                    println!("{}", display::render(&machine));
                }
            }
            Err(e) => {
                debug!(line = %line, error = %e, "command failed");
                eprintln!("ERR: {e}");
            }
        }
    }

    info!("shutting down");
    Ok(())
}
