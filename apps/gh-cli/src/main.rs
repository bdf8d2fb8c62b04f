mod sink;

use clap::{Parser, Subcommand};
use gh_config::Config;
use gh_log::{CsvLogWriter, SwitchState};
use gh_runtime::{MonitorLoop, ShutdownFlag, SystemClock};
use gh_sensors::SimulatedSensor;
use sink::ConsoleSink;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gh-cli")]
#[command(about = "Greenhouse monitor - simulated sensing, threshold control, CSV logging", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the monitoring/control loop until interrupted (Ctrl-C)
    Run {
        /// Path to the config YAML file; built-in defaults apply if omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override seconds between sensor readings
        #[arg(long)]
        read_interval: Option<u64>,
        /// Override seconds between log flushes
        #[arg(long)]
        save_interval: Option<u64>,
    },
    /// Validate a config file
    Validate {
        /// Path to the config YAML file
        config_path: PathBuf,
    },
    /// Write the default config to a file
    Init {
        /// Destination path for the config YAML file
        config_path: PathBuf,
    },
    /// Summarize the persisted log file
    LogSummary {
        /// Path to the config YAML file naming the log location
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Result type for CLI commands.
type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] gh_config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] gh_config::ValidationError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] gh_runtime::RuntimeError),

    #[error("Log error: {0}")]
    Log(#[from] gh_log::LogError),

    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            read_interval,
            save_interval,
        } => cmd_run(config.as_deref(), read_interval, save_interval),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Init { config_path } => cmd_init(&config_path),
        Commands::LogSummary { config } => cmd_log_summary(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    match path {
        Some(path) => Ok(gh_config::load_yaml(path)?),
        None => Ok(Config::default()),
    }
}

fn cmd_run(
    config_path: Option<&Path>,
    read_interval: Option<u64>,
    save_interval: Option<u64>,
) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(seconds) = read_interval {
        config.sampling.read_interval_s = seconds;
    }
    if let Some(seconds) = save_interval {
        config.sampling.save_interval_s = seconds;
    }
    // Overrides bypass the file loader, so re-validate the final value.
    gh_config::validate_config(&config)?;

    let shutdown = ShutdownFlag::new();
    let handler_flag = shutdown.clone();
    ctrlc::set_handler(move || handler_flag.request_stop())?;

    let sensor = SimulatedSensor::new();
    let mut monitor = MonitorLoop::new(&config, sensor, SystemClock::new(), shutdown)?;
    monitor.run(&mut ConsoleSink)?;
    Ok(())
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating config: {}", config_path.display());
    gh_config::load_yaml(config_path)?;
    println!("✓ Config is valid");
    Ok(())
}

fn cmd_init(config_path: &Path) -> CliResult<()> {
    gh_config::save_yaml(config_path, &Config::default())?;
    println!("✓ Wrote default config to {}", config_path.display());
    Ok(())
}

fn cmd_log_summary(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let writer = CsvLogWriter::new(&config.output.directory, &config.output.filename)?;

    if !writer.is_log_present() {
        println!("No log file at {}", writer.path().display());
        return Ok(());
    }

    let records = writer.read_back()?;
    let fan_on = records
        .iter()
        .filter(|r| r.fan_state == SwitchState::On)
        .count();
    let humidifier_on = records
        .iter()
        .filter(|r| r.humidifier_state == SwitchState::On)
        .count();

    println!("\nLog Summary: {}", writer.path().display());
    println!("  Records: {}", records.len());
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        println!("  Time range: {} - {}", first.timestamp, last.timestamp);
    }
    println!("  Cycles with fan on: {}", fan_on);
    println!("  Cycles with humidifier on: {}", humidifier_on);

    Ok(())
}
