//! Terminal mode: one simulated upload, one JSON line per record change.

use crate::config::{Cli, SimulatorConfig};
use crate::error::AppError;
use crate::upload::{
    Entropy, FileCandidate, Phase, SeededEntropy, ThreadEntropy, UploadRecord, UploadSimulator,
};
use std::io::{self, Write};
use tokio::runtime::Runtime;
use tracing::info;

pub fn run(cli: &Cli, runtime: &Runtime) -> Result<Phase, AppError> {
    let name = cli.name.clone().ok_or(AppError::MissingName)?;
    let candidate = FileCandidate::new(name, cli.size.unwrap_or(0));
    let entropy: Box<dyn Entropy> = match cli.seed {
        Some(seed) => Box::new(SeededEntropy::new(seed)),
        None => Box::new(ThreadEntropy),
    };

    let config = cli.simulator_config();
    let stdout = io::stdout();
    runtime.block_on(simulate(config, entropy, candidate, stdout.lock()))
}

/// Runs `candidate` to a terminal phase, writing every observed record.
pub async fn simulate<W: Write>(
    config: SimulatorConfig,
    entropy: Box<dyn Entropy>,
    candidate: FileCandidate,
    mut out: W,
) -> Result<Phase, AppError> {
    let mut simulator = UploadSimulator::new(config, entropy, tokio::runtime::Handle::current());
    simulator.start(candidate);
    emit(&mut out, simulator.record())?;

    while simulator.advance().await {
        emit(&mut out, simulator.record())?;
    }

    let phase = simulator
        .record()
        .map(UploadRecord::phase)
        .unwrap_or(Phase::Error);
    info!(?phase, "headless run finished");
    Ok(phase)
}

fn emit<W: Write>(out: &mut W, record: Option<&UploadRecord>) -> Result<(), AppError> {
    let Some(record) = record else {
        return Ok(());
    };
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out).map_err(AppError::Output)?;
    out.flush().map_err(AppError::Output)
}
