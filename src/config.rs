//! Command-line flags and the simulator timing they produce.

use clap::Parser;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = 200;
const DEFAULT_COMPLETION_DELAY_MS: u64 = 700;
const DEFAULT_SUCCESS_RATE: f64 = 0.9;

#[derive(Debug, Parser)]
#[command(
    name = "ap-automator",
    version,
    about = "Drop an invoice, receipt or email and watch the simulated AP workflow"
)]
pub struct Cli {
    /// Interval between progress ticks, in milliseconds.
    #[arg(
        long,
        env = "AP_TICK_MS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Delay between reaching 99% and the final outcome, in milliseconds.
    #[arg(long, env = "AP_COMPLETION_DELAY_MS", default_value_t = DEFAULT_COMPLETION_DELAY_MS)]
    pub completion_delay_ms: u64,

    /// Probability that a simulated upload ends as processed.
    #[arg(long, env = "AP_SUCCESS_RATE", default_value_t = DEFAULT_SUCCESS_RATE)]
    pub success_rate: f64,

    /// Run one simulated upload in the terminal and print each record as JSON.
    #[arg(long)]
    pub headless: bool,

    /// File name to simulate (headless only).
    #[arg(long, requires = "headless")]
    pub name: Option<String>,

    /// File size in bytes (headless only, defaults to 0).
    #[arg(long, requires = "headless")]
    pub size: Option<u64>,

    /// Seed for reproducible progress and outcome (headless only).
    #[arg(long, requires = "headless")]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig::new(
            Duration::from_millis(self.tick_ms),
            Duration::from_millis(self.completion_delay_ms),
            self.success_rate,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    pub tick_interval: Duration,
    pub completion_delay: Duration,
    pub success_rate: f64,
}

impl SimulatorConfig {
    pub fn new(tick_interval: Duration, completion_delay: Duration, success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            DEFAULT_SUCCESS_RATE
        } else {
            success_rate.clamp(0.0, 1.0)
        };

        Self {
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            completion_delay,
            success_rate,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_TICK_MS),
            Duration::from_millis(DEFAULT_COMPLETION_DELAY_MS),
            DEFAULT_SUCCESS_RATE,
        )
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
