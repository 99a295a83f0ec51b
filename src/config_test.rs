use super::*;
use clap::CommandFactory;

fn default_of(name: &str) -> String {
    let command = Cli::command();
    let arg = command
        .get_arguments()
        .find(|a| a.get_id() == name)
        .unwrap();
    arg.get_default_values()[0].to_string_lossy().into_owned()
}

#[test]
fn defaults_match_landing_page_timing() {
    // Read the declared defaults rather than parsing, so `AP_*` variables
    // in the test environment cannot change the outcome.
    assert_eq!(default_of("tick_ms"), "200");
    assert_eq!(default_of("completion_delay_ms"), "700");
    assert_eq!(default_of("success_rate"), "0.9");

    let config = SimulatorConfig::default();
    assert_eq!(config.tick_interval, Duration::from_millis(200));
    assert_eq!(config.completion_delay, Duration::from_millis(700));
    assert!((config.success_rate - 0.9).abs() < f64::EPSILON);
}

#[test]
fn flags_feed_simulator_config() {
    let cli = Cli::try_parse_from([
        "ap-automator",
        "--tick-ms",
        "50",
        "--completion-delay-ms",
        "10",
        "--success-rate",
        "0.25",
    ])
    .unwrap();
    let config = cli.simulator_config();

    assert!(!cli.headless);
    assert_eq!(config.tick_interval, Duration::from_millis(50));
    assert_eq!(config.completion_delay, Duration::from_millis(10));
    assert!((config.success_rate - 0.25).abs() < f64::EPSILON);
}

#[test]
fn headless_flags_parse() {
    let cli = Cli::try_parse_from([
        "ap-automator",
        "--headless",
        "--name",
        "receipt.jpg",
        "--size",
        "2048",
        "--seed",
        "9",
    ])
    .unwrap();

    assert!(cli.headless);
    assert_eq!(cli.name.as_deref(), Some("receipt.jpg"));
    assert_eq!(cli.size, Some(2048));
    assert_eq!(cli.seed, Some(9));
}

#[test]
fn headless_inputs_require_headless() {
    assert!(Cli::try_parse_from(["ap-automator", "--name", "a.pdf"]).is_err());
    assert!(Cli::try_parse_from(["ap-automator", "--size", "5"]).is_err());
    assert!(Cli::try_parse_from(["ap-automator", "--seed", "1"]).is_err());
}

#[test]
fn zero_tick_is_rejected() {
    assert!(Cli::try_parse_from(["ap-automator", "--tick-ms", "0"]).is_err());
}

#[test]
fn success_rate_is_clamped() {
    let high = SimulatorConfig::new(Duration::from_millis(1), Duration::ZERO, 3.0);
    assert!((high.success_rate - 1.0).abs() < f64::EPSILON);

    let low = SimulatorConfig::new(Duration::from_millis(1), Duration::ZERO, -1.0);
    assert!(low.success_rate.abs() < f64::EPSILON);

    let nan = SimulatorConfig::new(Duration::from_millis(1), Duration::ZERO, f64::NAN);
    assert!((nan.success_rate - 0.9).abs() < f64::EPSILON);
}

#[test]
fn zero_interval_is_raised_to_one_millisecond() {
    let config = SimulatorConfig::new(Duration::ZERO, Duration::ZERO, 0.5);
    assert_eq!(config.tick_interval, Duration::from_millis(1));
}
