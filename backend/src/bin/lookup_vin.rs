//! Diagnostic binary: run one VIN lookup against the live services
//! This is a utility binary, not part of the server
//!
//! Usage: `lookup_vin <VIN>` (reads the same environment as the server)

use mechtrack_backend::config::Config;
use mechtrack_backend::error::AppError;
use mechtrack_backend::orchestrator::run_lookup;
use mechtrack_backend::state::AppState;
use mechtrack_backend::vin::Vin;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw_vin = env::args().nth(1);
    let vin = match Vin::parse(raw_vin.as_deref()) {
        Ok(vin) => vin,
        Err(e) => {
            eprintln!("✗ {}", e.public_message());
            eprintln!("  Usage: lookup_vin <17-character VIN>");
            return ExitCode::from(2);
        }
    };

    let config = Config::from_env();
    if !config.anthropic.has_api_key() {
        eprintln!("⚠ ANTHROPIC_API_KEY not found in environment; schedule generation will fail");
    }

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("✗ Failed to build clients: {}", e);
            return ExitCode::FAILURE;
        }
    };

    eprintln!("Looking up {}...", vin);

    match run_lookup(state.decoder.as_ref(), state.generator.as_ref(), &vin).await {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{}", json);
                eprintln!("✓ {} maintenance items", response.schedule.len());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("✗ Failed to serialize response: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e @ AppError::VinNotDecoded(_)) => {
            eprintln!("✗ {}", e.public_message());
            ExitCode::FAILURE
        }
        Err(e) => {
            // Full detail here; the HTTP API only ever shows the generic message
            eprintln!("✗ Lookup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
