//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON desk configuration and session scripts
//! - Validate configurations, lint scripts
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_from_path(Path::new("desk.toml")).unwrap();
//! println!("Desk: {}", config.desk.name);
//! ```

mod parser;
mod validator;

pub use contracts::{DeskConfig, SessionScript};
pub use parser::ConfigFormat;

use contracts::ContractError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load desk configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<DeskConfig, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load desk configuration from string
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<DeskConfig, ContractError> {
        let config = parser::parse(content, format)?;
        validator::validate(&config)?;
        Ok(config)
    }

    /// Load a session script from file path
    pub fn load_script_from_path(path: &Path) -> Result<SessionScript, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_script_from_str(&content, format)
    }

    /// Load a session script from string
    pub fn load_script_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<SessionScript, ContractError> {
        parser::parse(content, format)
    }

    /// Warnings for script steps that replay but are probably mistakes
    pub fn lint_script(script: &SessionScript) -> Vec<String> {
        validator::lint_script(script)
    }

    /// Serialize DeskConfig to TOML string
    pub fn to_toml(config: &DeskConfig) -> Result<String, ContractError> {
        toml::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize DeskConfig to JSON string
    pub fn to_json(config: &DeskConfig) -> Result<String, ContractError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::OverflowPolicy;
    use std::io::Write;

    const DESK_TOML: &str = r#"
[desk]
name = "Main Street Clinic"

[intake]
name_max_chars = 30
condition_max_chars = 60
max_age = 120
overflow = "reject"
"#;

    #[test]
    fn test_load_from_str_toml() {
        let result = ConfigLoader::load_from_str(DESK_TOML, ConfigFormat::Toml);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.desk.name, "Main Street Clinic");
        assert_eq!(config.intake.overflow, OverflowPolicy::Reject);
    }

    #[test]
    fn test_round_trip_toml() {
        let config = ConfigLoader::load_from_str(DESK_TOML, ConfigFormat::Toml).unwrap();
        let serialized = ConfigLoader::to_toml(&config).unwrap();
        let config2 = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_toml_to_json() {
        let config = ConfigLoader::load_from_str(DESK_TOML, ConfigFormat::Toml).unwrap();
        let json = ConfigLoader::to_json(&config).unwrap();
        let config2 = ConfigLoader::load_from_str(&json, ConfigFormat::Json).unwrap();
        assert_eq!(config.intake, config2.intake);
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let content = "[intake]\ncondition_max_chars = 0\n";
        let result = ConfigLoader::load_from_str(content, ConfigFormat::Toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("condition_max_chars"));
    }

    #[test]
    fn test_load_from_path_detects_format() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(DESK_TOML.as_bytes()).unwrap();
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.intake.max_age, Some(120));
    }

    #[test]
    fn test_load_from_path_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"), "got: {err}");
    }

    #[test]
    fn test_load_script_from_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"steps":[{"op":"consult"},{"op":"undo"}]}"#)
            .unwrap();
        let script = ConfigLoader::load_script_from_path(file.path()).unwrap();
        assert_eq!(script.steps.len(), 2);
    }

    #[test]
    fn test_blank_name_script_loads() {
        let content = r#"{"steps":[{"op":"register","channel":"regular","name":"","age":30}]}"#;
        let script = ConfigLoader::load_script_from_str(content, ConfigFormat::Json).unwrap();
        assert_eq!(script.steps.len(), 1);
        assert_eq!(ConfigLoader::lint_script(&script).len(), 1);
    }

    #[test]
    fn test_default_config_omits_age_cap() {
        let serialized = ConfigLoader::to_toml(&DeskConfig::default()).unwrap();
        assert!(!serialized.contains("max_age"), "got: {serialized}");
        let config = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(config, DeskConfig::default());
    }
}
