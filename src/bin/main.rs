// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::{Parser, ValueEnum};
use csv::Writer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stay_pricing_rs::{
    BASE_RATE_KEY, ConfigurationStore, DEFAULT_HOTEL_TAX, Lodging, LongStayDiscount, MODE_KEY,
    PricingContext, PricingError, PricingStrategy, SettingValue, Standard,
};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::process;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Stay Pricing - Price a hotel and an apartment under different strategies
///
/// Initialises the global configuration, prices both lodgings with the
/// standard strategy, switches to a long-stay discount, then raises the
/// configured base rate and prices them again.
#[derive(Parser, Debug)]
#[command(name = "stay-pricing-rs")]
#[command(about = "Prices lodging stays under swappable strategies", long_about = None)]
struct Args {
    /// Number of nights to price
    #[arg(long, default_value_t = 5)]
    nights: u32,

    /// Value stored under `modo` when the configuration is created
    #[arg(long, default_value = "desarrollo")]
    mode: String,

    /// Initial `tarifa_base`, used by lodgings without an explicit rate
    #[arg(long, default_value = "100.0")]
    base_rate: Decimal,

    /// `tarifa_base` written before the final round of pricing
    #[arg(long, default_value = "130.0")]
    updated_base_rate: Decimal,

    /// Minimum nights for the long-stay discount
    #[arg(long, default_value_t = 7)]
    threshold: u32,

    /// Long-stay discount as a fraction between 0 and 1
    #[arg(long, default_value = "0.15")]
    discount: Decimal,

    /// Output format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter directive for stderr output (e.g. `debug`, `stay_pricing_rs=trace`)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// One quote per row: lodging,strategy,nights,nightly_rate,total
    Csv,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Install the stderr log subscriber
    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("Error initialising logging: {}", e);
        process::exit(1);
    }

    // Run the walkthrough, writing the report to stdout
    if let Err(e) = run_demo(&args, io::stdout().lock()) {
        eprintln!("Error running demo: {}", e);
        process::exit(1);
    }
}

fn init_tracing(directive: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(directive)?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// The two lodgings priced by the demo: a hotel that follows the configured
/// base rate and an apartment with its own rate.
fn demo_lodgings() -> Result<Vec<Lodging>, PricingError> {
    Ok(vec![
        Lodging::hotel("Gran Sol", "Mar del Plata", None, true, DEFAULT_HOTEL_TAX)?,
        Lodging::apartment("Depto Central", "Buenos Aires", Some(dec!(60.0)), dec!(25.0))?,
    ])
}

/// Runs the pricing walkthrough and writes the report to `writer`.
///
/// Strategies and lodgings are validated before the global configuration is
/// touched, so invalid arguments leave it untouched.
///
/// # Errors
///
/// Returns an error if any argument is rejected or writing fails.
fn run_demo<W: Write>(args: &Args, writer: W) -> Result<(), DemoError> {
    // Validate everything before the global configuration exists
    let lodgings = demo_lodgings()?;
    let standard: Arc<dyn PricingStrategy> = Arc::new(Standard);
    let discount: Arc<dyn PricingStrategy> =
        Arc::new(LongStayDiscount::new(args.threshold, args.discount)?);

    // Create (or reuse) the process-wide configuration
    let config = ConfigurationStore::init([
        (BASE_RATE_KEY, SettingValue::from(args.base_rate)),
        (MODE_KEY, SettingValue::from(args.mode.as_str())),
    ]);
    info!(nights = args.nights, "running pricing demo");

    let mut report = Report::new(args.format, writer);
    report.settings(&config.all())?;

    // Price with the standard strategy
    let mut context = PricingContext::new(standard);
    report.section("Standard strategy", &context, &lodgings, args.nights)?;

    // Swap strategies without touching the lodgings
    context.set_strategy(discount);
    report.section("Long-stay discount strategy", &context, &lodgings, args.nights)?;

    // Lodgings without an explicit rate follow the new base rate
    config.set(BASE_RATE_KEY, args.updated_base_rate);
    report.section(
        "After updating tarifa_base in the global configuration",
        &context,
        &lodgings,
        args.nights,
    )?;

    report.finish()
}

/// Destination of the demo output.
enum Report<W: Write> {
    Text(W),
    Csv(Writer<W>),
}

impl<W: Write> Report<W> {
    fn new(format: OutputFormat, writer: W) -> Self {
        match format {
            OutputFormat::Text => Report::Text(writer),
            OutputFormat::Csv => Report::Csv(Writer::from_writer(writer)),
        }
    }

    fn settings(&mut self, settings: &BTreeMap<String, SettingValue>) -> Result<(), DemoError> {
        // CSV output carries quotes only.
        if let Report::Text(w) = self {
            let rendered: Vec<String> = settings
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect();
            writeln!(w, "Initial global configuration: {{{}}}", rendered.join(", "))?;
        }
        Ok(())
    }

    fn section(
        &mut self,
        title: &str,
        context: &PricingContext,
        lodgings: &[Lodging],
        nights: u32,
    ) -> Result<(), DemoError> {
        match self {
            Report::Text(w) => {
                writeln!(w, "\n-- {} --", title)?;
                for lodging in lodgings {
                    writeln!(w, "{}", lodging.describe()?)?;
                    let cost = context.compute_cost(lodging, nights)?;
                    writeln!(w, "Cost for {} nights: ${}\n", nights, cost)?;
                }
            }
            Report::Csv(w) => {
                // Header row is written with the first quote
                for lodging in lodgings {
                    w.serialize(context.quote(lodging, nights)?)?;
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<(), DemoError> {
        // Flush to ensure all data is written
        match self {
            Report::Text(mut w) => w.flush()?,
            Report::Csv(mut w) => w.flush()?,
        }
        Ok(())
    }
}
