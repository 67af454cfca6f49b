//! Classify and compare two five card hands from the command line.
//!
//! ```text
//! cargo run --example showdown -- "2H 3D 5S 9C KD" "2C 3H 4S 8C AH"
//! ```

use clap::Parser;
use poker_showdown::core::{check_distinct, Hand, PokerError};
use poker_showdown::showdown::{showdown, Showdown};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    about = "Classify two five card poker hands and pick the winner",
    long_about = "Each hand is five space separated cards such as \"2H 3D 5S 9C KD\".\n\
                  The first hand is Black, the second White."
)]
struct Args {
    /// Black's hand
    #[arg(default_value = "2H 3D 5S 9C KD")]
    black: String,

    /// White's hand
    #[arg(default_value = "2C 3H 4S 8C AH")]
    white: String,

    /// Refuse hands that share a card
    #[arg(long)]
    strict: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,
}

fn init_tracing(verbosity: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("{level},poker_showdown={level}"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[cfg(feature = "serde")]
fn print_json(result: &Showdown) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Unable to serialize result: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn print_json(_result: &Showdown) {
    eprintln!("JSON output needs the serde feature");
}

fn run(args: &Args) -> Result<(), PokerError> {
    let black = Hand::new_from_str(&args.black)?;
    let white = Hand::new_from_str(&args.white)?;

    if args.strict {
        check_distinct(&[&black, &white])?;
    } else if let Err(e) = check_distinct(&[&black, &white]) {
        warn!(%e, "Hands are not from a single deck");
    }

    let result = showdown(&black, &white)?;
    info!(?result, "Showdown complete");

    if args.json {
        print_json(&result);
        return Ok(());
    }

    println!("Black hand: {black}");
    println!("Black rank: {}", result.first);
    println!("White hand: {white}");
    println!("White rank: {}", result.second);
    println!("Result: {}", result.outcome);
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbosity);

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
