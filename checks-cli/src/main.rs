//! Storefront checks command line

mod commands;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use common::decimal::{Money, Percent};
use discount_check::config::parse_tolerance;
use discount_check::{TotalsText, VerifierConfig};
use dotenv::dotenv;
use money_parser::SeparatorStyle;
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::commands::{Checks, Rate};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Currency symbol used when printing amounts
    #[arg(long, global = true)]
    symbol: Option<String>,

    /// Separator style of the price text: comma-decimal, comma-grouping or dot-grouping
    #[arg(long, global = true)]
    separators: Option<SeparatorStyle>,

    /// Largest accepted difference between expected and observed amounts
    #[arg(long, global = true, value_parser = tolerance_arg)]
    tolerance: Option<Money>,

    /// Set the log level
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse price text into an amount
    Parse {
        /// Price text, e.g. "Total: £12.00"
        text: String,

        /// Fail instead of falling back to zero
        #[arg(long)]
        strict: bool,
    },
    /// Take a percentage of an amount
    Percent {
        /// Base amount as price text
        base: String,

        /// Whole-number percentage
        #[arg(allow_negative_numbers = true)]
        percent: Percent,
    },
    /// Check a coupon discount against scraped cart totals
    #[command(group(ArgGroup::new("rate").required(true).args(["percent", "coupon"])))]
    Verify {
        #[arg(long)]
        subtotal: String,

        /// Discount row text; leave out when no discount row is shown
        #[arg(long)]
        discount: Option<String>,

        #[arg(long)]
        shipping: String,

        #[arg(long)]
        total: String,

        /// Expected discount percentage
        #[arg(long)]
        percent: Option<Percent>,

        /// Coupon code to look the percentage up by
        #[arg(long)]
        coupon: Option<String>,
    },
    /// List discount scenarios
    Scenarios {
        /// JSON file with scenarios; built-in scenarios are used without it
        #[arg(long)]
        file: Option<PathBuf>,

        /// List the checkout scenarios instead of the discount ones
        #[arg(long)]
        checkout: bool,
    },
}

fn tolerance_arg(value: &str) -> Result<Money, String> {
    parse_tolerance(value).map_err(|e| e.to_string())
}

fn init_tracing(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    // DEBUG=1 in .env raises the default level for every other crate
    let env_debug = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let default_level = if env_debug == "1" { Level::DEBUG } else { Level::WARN };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse(format!(
            "storefront_checks={0},discount_check={0},money_parser={0}",
            log_level
        ))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    // Only set the global subscriber if it hasn't been set already
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        debug!("Tracing initialized");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut config = VerifierConfig::try_from_env()?;
    if let Some(symbol) = cli.symbol {
        config.money.currency_symbol = symbol;
    }
    if let Some(separators) = cli.separators {
        config.money.separators = separators;
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    info!(
        "Using symbol {} with {} separators, tolerance {}",
        config.money.currency_symbol, config.money.separators, config.tolerance
    );

    let checks = Checks::new(&config);
    let output = match cli.command {
        Commands::Parse { text, strict } => checks.parse(&text, strict)?,
        Commands::Percent { base, percent } => checks.percent(&base, percent)?,
        Commands::Verify {
            subtotal,
            discount,
            shipping,
            total,
            percent,
            coupon,
        } => {
            // clap guarantees one of the two is set
            let rate = match percent {
                Some(percent) => Rate::Percent(percent),
                None => Rate::Coupon(coupon.unwrap_or_default()),
            };
            let text = TotalsText::new(subtotal, discount, shipping, total);
            checks.verify(&text, &rate)?
        }
        Commands::Scenarios { file, checkout } => checks.scenarios(file.as_deref(), checkout)?,
    };

    println!("{}", output);
    Ok(())
}
