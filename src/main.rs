mod app;
mod config;
mod error;
mod headless;
mod upload;
mod utils;

use app::ApAutomator;
use clap::Parser;
use config::Cli;
use error::AppError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use upload::Phase;

/// Exit status for a headless run whose simulated outcome was `Error`.
const SIMULATED_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "ap-automator failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let runtime = tokio::runtime::Runtime::new().map_err(AppError::Runtime)?;

    if cli.headless {
        return Ok(match headless::run(&cli, &runtime)? {
            Phase::Processed => ExitCode::SUCCESS,
            Phase::Uploading | Phase::Error => ExitCode::from(SIMULATED_FAILURE),
        });
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 520.0]),
        ..Default::default()
    };

    let config = cli.simulator_config();
    let handle = runtime.handle().clone();
    eframe::run_native(
        "AP Automator",
        options,
        Box::new(move |cc| Box::new(ApAutomator::new(cc, config, handle))),
    )?;

    Ok(ExitCode::SUCCESS)
}
