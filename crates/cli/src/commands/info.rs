//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::DeskConfig;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    desk: String,
    intake: IntakeInfo,
    observability: ObservabilityInfo,
}

#[derive(Serialize)]
struct IntakeInfo {
    name_max_chars: usize,
    condition_max_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_age: Option<u32>,
    overflow: String,
}

#[derive(Serialize)]
struct ObservabilityInfo {
    log_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics_port: Option<u16>,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let config = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    if args.json {
        let info = build_config_info(&config);
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print_config_info(&config);
    }

    Ok(())
}

fn build_config_info(config: &DeskConfig) -> ConfigInfo {
    ConfigInfo {
        version: format!("{:?}", config.version),
        desk: config.desk.name.clone(),
        intake: IntakeInfo {
            name_max_chars: config.intake.name_max_chars,
            condition_max_chars: config.intake.condition_max_chars,
            max_age: config.intake.max_age,
            overflow: format!("{:?}", config.intake.overflow),
        },
        observability: ObservabilityInfo {
            log_format: format!("{:?}", config.observability.log_format),
            metrics_port: config.observability.metrics_port(),
        },
    }
}

fn print_config_info(config: &DeskConfig) {
    println!("Desk: {}", config.desk.name);
    println!("Version: {:?}", config.version);
    println!("\nIntake");
    println!("   ├─ Name limit: {} chars", config.intake.name_max_chars);
    println!("   ├─ Condition limit: {} chars", config.intake.condition_max_chars);
    match config.intake.max_age {
        Some(max) => println!("   ├─ Max age: {}", max),
        None => println!("   ├─ Max age: unbounded"),
    }
    println!("   └─ Overflow: {:?}", config.intake.overflow);
    println!("\nObservability");
    println!("   ├─ Log format: {:?}", config.observability.log_format);
    match config.observability.metrics_port() {
        Some(port) => println!("   └─ Metrics port: {}", port),
        None => println!("   └─ Metrics: disabled"),
    }
}
