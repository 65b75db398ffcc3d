//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::{DeskConfig, OverflowPolicy};

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<ScriptResult>,
}

#[derive(Serialize)]
struct ConfigSummary {
    version: String,
    desk: String,
    name_max_chars: usize,
    condition_max_chars: usize,
    overflow: String,
}

#[derive(Serialize)]
struct ScriptResult {
    path: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let mut result = validate_config(args);
    if let Some(ref script) = args.script {
        result.script = Some(validate_script(script));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    let script_ok = result.script.as_ref().is_none_or(|s| s.valid);
    if result.valid && script_ok {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
            script: None,
        };
    }

    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(config) => {
            let warnings = collect_warnings(&config);
            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    version: format!("{:?}", config.version),
                    desk: config.desk.name.clone(),
                    name_max_chars: config.intake.name_max_chars,
                    condition_max_chars: config.intake.condition_max_chars,
                    overflow: format!("{:?}", config.intake.overflow),
                }),
                script: None,
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
            script: None,
        },
    }
}

fn validate_script(path: &std::path::Path) -> ScriptResult {
    match config_loader::ConfigLoader::load_script_from_path(path) {
        Ok(script) => ScriptResult {
            path: path.display().to_string(),
            valid: true,
            steps: Some(script.steps.len()),
            error: None,
            warnings: config_loader::ConfigLoader::lint_script(&script),
        },
        Err(e) => ScriptResult {
            path: path.display().to_string(),
            valid: false,
            steps: None,
            error: Some(e.to_string()),
            warnings: Vec::new(),
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(config: &DeskConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.intake.overflow == OverflowPolicy::Truncate {
        warnings.push(format!(
            "intake.overflow is 'truncate' - names over {} chars and conditions over {} chars are cut silently",
            config.intake.name_max_chars, config.intake.condition_max_chars
        ));
    }

    if config.intake.name_max_chars < 8 {
        warnings.push(format!(
            "intake.name_max_chars is very small ({})",
            config.intake.name_max_chars
        ));
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  Desk: {}", summary.desk);
            println!("  Name limit: {} chars", summary.name_max_chars);
            println!("  Condition limit: {} chars", summary.condition_max_chars);
            println!("  Overflow: {}", summary.overflow);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }

    if let Some(ref script) = result.script {
        match (&script.steps, &script.error) {
            (Some(steps), _) => println!("\n✓ Script is valid: {} ({} steps)", script.path, steps),
            (None, Some(error)) => {
                println!("\n✗ Script is invalid: {}", script.path);
                println!("\n  Error: {}", error);
            }
            (None, None) => println!("\n✗ Script is invalid: {}", script.path),
        }
        for warning in &script.warnings {
            println!("  - {}", warning);
        }
    }
}
