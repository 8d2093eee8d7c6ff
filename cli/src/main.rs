//! Body Metrics CLI
//!
//! Collects the calculator fields from flags or prompts, validates them with
//! the shared form rules and prints the results panel.

use anyhow::{bail, Result};
use body_metrics_cli::{args::Cli, config::AppConfig, prompt, render};
use body_metrics_engine::{calculator, CalculatorForm};
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_CONFIG: i32 = 2;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    init_tracing(&config, cli.verbose);

    let code = match run(&cli, &config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!(error = %e, "Calculation failed");
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    let mut form = CalculatorForm::new();
    cli.apply_to_form(&mut form);

    let missing = prompt::missing_fields(&form);
    if !missing.is_empty() {
        if cli.no_input || !io::stdin().is_terminal() {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            bail!("Missing fields: {}", names.join(", "));
        }
        debug!(count = missing.len(), "Prompting for missing fields");
        let stdin = io::stdin();
        prompt::prompt_missing(&mut form, &mut stdin.lock(), &mut io::stdout())?;
    }

    let input = match form.submit() {
        Ok(input) => input,
        Err(errors) => {
            for err in &errors {
                eprintln!("  {}", err.user_message());
            }
            bail!("{} field(s) failed validation", errors.len());
        }
    };
    debug!(?input, "Validated input");

    let result = calculator::compute(&input)?;
    info!(
        bmi = result.bmi,
        maintain = result.calories.maintain,
        status = %result.weight_difference.status,
        days = result.diet_duration_days,
        "Computed body metrics"
    );

    println!("{}", render::render(&result, &config.output)?);
    Ok(())
}

/// Initialize tracing/logging on stderr
fn init_tracing(config: &AppConfig, verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "body_metrics=debug,body_metrics_cli=debug".into()
        } else {
            config.logging.filter.as_str().into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.json_logs() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init();
    }
}
