//! `replay` command implementation.

use anyhow::{Context, Result};
use tracing::info;

use contracts::DeskConfig;

use crate::cli::ReplayArgs;
use crate::error::CliError;
use crate::session::Session;

/// Execute the `replay` command
pub fn run_replay(args: &ReplayArgs) -> Result<()> {
    let config = load_config(args)?;

    let metrics_port = match args.metrics_port {
        Some(0) => None,
        Some(port) => Some(port),
        None => config.observability.metrics_port(),
    };
    if let Some(port) = metrics_port {
        observability::init_metrics_only(port)?;
    }

    if !args.script.exists() {
        return Err(CliError::not_found(args.script.display().to_string()).into());
    }
    let script = config_loader::ConfigLoader::load_script_from_path(&args.script)
        .with_context(|| format!("Failed to load script from {}", args.script.display()))?;

    let mut session = Session::new(&config, args.keep_going);
    let limits = session.core().limits();
    info!(
        desk = %config.desk.name,
        steps = script.steps.len(),
        overflow = ?limits.overflow,
        max_age = ?limits.max_age,
        "Replaying session"
    );

    let reports = session.run(&script)?;

    let released = if args.drain { session.drain() } else { Vec::new() };

    if args.json {
        let output = serde_json::json!({
            "desk": config.desk.name,
            "steps": reports,
            "released_at_close": released,
            "census": session.core().census(),
        });
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize replay result")?;
        println!("{}", json);
    } else {
        println!("Desk: {}\n", config.desk.name);
        for report in &reports {
            report.print_text();
        }
        if args.drain {
            println!("\nReleased at close: {} patients", released.len());
        }
        println!("\n{}", session.summary());
    }

    Ok(())
}

fn load_config(args: &ReplayArgs) -> Result<DeskConfig> {
    let Some(path) = &args.config else {
        info!("No configuration given, using defaults");
        return Ok(DeskConfig::default());
    };

    if !path.exists() {
        return Err(CliError::not_found(path.display().to_string()).into());
    }
    config_loader::ConfigLoader::load_from_path(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
