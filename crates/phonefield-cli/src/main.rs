use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use phonefield_adapters::{JsonPhoneField, LibPhoneNumberService};
use phonefield_app::PhoneNumberFieldTransformer;
use phonefield_core::country::CountryChoices;

#[derive(Parser)]
#[command(
    name = "phonefield",
    about = "Convert phone numbers to and from country/number form fields, one JSON value per line"
)]
struct Cli {
    /// Allowed countries in preference order, e.g. "GB,JE".
    #[arg(long, env = "PHONEFIELD_COUNTRIES")]
    countries: CountryChoices,

    #[command(subcommand)]
    direction: Direction,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// Phone number (E.164 string or null) to {"country", "number"}.
    Transform,
    /// {"country", "number"} to an E.164 string or null.
    Reverse,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.countries.is_empty() {
        tracing::warn!("no countries configured, every number will be rejected");
    }
    tracing::info!(countries = %cli.countries, direction = ?cli.direction, "starting");

    let field = JsonPhoneField::new(PhoneNumberFieldTransformer::new(
        LibPhoneNumberService::new(),
        cli.countries,
    ));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let result = process_line(&field, cli.direction, &line);
        if let Some(error) = result.get("error") {
            tracing::debug!(line = index + 1, %error, "input rejected");
        }
        writeln!(out, "{result}").context("failed to write stdout")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn process_line(
    field: &JsonPhoneField<LibPhoneNumberService>,
    direction: Direction,
    line: &str,
) -> Value {
    let input: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => return json!({ "error": format!("invalid JSON: {e}") }),
    };
    let result = match direction {
        Direction::Transform => field.transform(&input),
        Direction::Reverse => field.reverse_transform(&input),
    };
    result.unwrap_or_else(|e| json!({ "error": e.to_string() }))
}
