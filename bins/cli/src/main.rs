//! Pecunia CLI
//!
//! Exact money arithmetic from the command line.

mod commands;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pecunia_core::{DecimalCalculator, DynCurrencyRegistry, Formatter, MoneyFactory};
use pecunia_shared::AppConfig;

use commands::Toolkit;

#[derive(Parser)]
#[command(name = "pecunia")]
#[command(about = "Currency-aware decimal arithmetic", long_about = None)]
struct Cli {
    /// Currency code; defaults to `currency.default_code` from configuration
    #[arg(short, long, global = true)]
    currency: Option<String>,

    /// Locale for the printed result (e.g. en_US, fr_FR)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add amounts left to right
    Add {
        #[arg(required = true)]
        amounts: Vec<String>,
    },

    /// Subtract the remaining amounts from the first
    Subtract {
        #[arg(required = true)]
        amounts: Vec<String>,
    },

    /// Multiply an amount, truncating to the minor unit
    Multiply { amount: String, factor: String },

    /// Divide an amount, truncating to the minor unit
    Divide { amount: String, divisor: String },

    /// Split an amount proportionally to ratios (largest remainder)
    Allocate {
        amount: String,
        /// Comma separated weights, e.g. 50,30,20
        #[arg(long, value_delimiter = ',', required = true)]
        ratios: Vec<String>,
    },

    /// Split an amount into equal shares
    Split { amount: String, parts: usize },

    /// Print an amount with its currency symbol
    Format {
        amount: String,
        /// Print only the number, without symbol
        #[arg(long, default_value_t = false)]
        plain: bool,
    },

    /// List known currencies and their minor units
    Currencies,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pecunia=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    let registry = Arc::new(DynCurrencyRegistry::from_config(&config.currency));
    let loaded = registry
        .initialize()
        .context("Failed to load currency registry")?;
    info!(currencies = loaded, "Currency registry ready");

    let mut factory = MoneyFactory::new(Arc::clone(&registry));
    if let Some(code) = &config.currency.default_code {
        factory = factory
            .with_default_currency(code)
            .context("Invalid default currency in configuration")?;
    }

    let toolkit = Toolkit {
        factory,
        calculator: DecimalCalculator::new(Arc::clone(&registry)),
        formatter: Formatter::from_config(Arc::clone(&registry), &config.formatting),
        registry: Arc::clone(&registry),
        currency: cli.currency,
        locale: cli.locale,
    };

    let lines = match cli.cmd {
        Commands::Add { amounts } => toolkit.add(&amounts)?,
        Commands::Subtract { amounts } => toolkit.subtract(&amounts)?,
        Commands::Multiply { amount, factor } => toolkit.multiply(&amount, &factor)?,
        Commands::Divide { amount, divisor } => toolkit.divide(&amount, &divisor)?,
        Commands::Allocate { amount, ratios } => toolkit.allocate(&amount, &ratios)?,
        Commands::Split { amount, parts } => toolkit.split(&amount, parts)?,
        Commands::Format { amount, plain } => toolkit.format(&amount, plain)?,
        Commands::Currencies => toolkit.currencies()?,
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
