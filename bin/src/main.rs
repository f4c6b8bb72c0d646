//! WACC CLI binary.
//!
//! Provides a command-line interface for the WACC estimator.

mod cmd;
mod data;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use report::OutputFormat;
use std::process;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "wacc")]
#[command(about = "Weighted average cost of capital for a public company", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch market data and estimate WACC for a ticker
    Estimate {
        /// Ticker symbol
        ticker: String,

        /// Window end date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Statement period (annual or quarter)
        #[arg(short, long, default_value = "annual")]
        period: String,

        /// Calendar days of series history to request
        #[arg(long, default_value = "366")]
        lookback_days: i64,

        /// FRED series for the risk-free rate
        #[arg(long, default_value = wacc::fred::TREASURY_1Y)]
        treasury_series: String,

        /// FRED series for the equity index
        #[arg(long, default_value = wacc::fred::SP500)]
        index_series: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the interest coverage to credit spread table
    Spreads,

    /// Compute WACC offline from explicit figures
    Compute {
        /// Label for the report
        #[arg(long, default_value = "MANUAL")]
        ticker: String,

        /// EBITDA
        #[arg(long, allow_negative_numbers = true)]
        ebitda: f64,

        /// Depreciation and amortization
        #[arg(long, allow_negative_numbers = true)]
        depreciation: f64,

        /// Interest expense
        #[arg(long, allow_negative_numbers = true)]
        interest_expense: f64,

        /// Total debt
        #[arg(long, allow_negative_numbers = true)]
        total_debt: f64,

        /// Total stockholders' equity
        #[arg(long, allow_negative_numbers = true)]
        total_equity: f64,

        /// Effective tax rate as a fraction (e.g. 0.21)
        #[arg(long, allow_negative_numbers = true)]
        tax_rate: f64,

        /// Company beta
        #[arg(long, allow_negative_numbers = true)]
        beta: f64,

        /// Risk-free rate as a fraction (e.g. 0.045)
        #[arg(long, allow_negative_numbers = true)]
        risk_free_rate: f64,

        /// Trailing market return as a fraction (e.g. 0.12)
        #[arg(long, allow_negative_numbers = true)]
        market_return: f64,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    // Reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            ticker,
            as_of,
            period,
            lookback_days,
            treasury_series,
            index_series,
            format,
        } => {
            let args = cmd::estimate::EstimateArgs {
                ticker,
                as_of,
                period,
                lookback_days,
                treasury_series,
                index_series,
            };
            cmd::estimate::estimate(args, format).await?;
        }
        Commands::Spreads => {
            cmd::spreads::list_spreads();
        }
        Commands::Compute {
            ticker,
            ebitda,
            depreciation,
            interest_expense,
            total_debt,
            total_equity,
            tax_rate,
            beta,
            risk_free_rate,
            market_return,
            format,
        } => {
            let args = cmd::compute::ComputeArgs {
                ticker,
                ebitda,
                depreciation,
                interest_expense,
                total_debt,
                total_equity,
                tax_rate,
                beta,
                risk_free_rate,
                market_return,
            };
            cmd::compute::compute(&args, format)?;
        }
    }

    Ok(())
}
