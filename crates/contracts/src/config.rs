//! DeskConfig - Config Loader output
//!
//! Describes one desk: its name, intake limits and observability settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::IntakeLimits;

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete desk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DeskConfig {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Desk identity
    #[serde(default)]
    #[validate(nested)]
    pub desk: DeskSection,

    /// Registration field bounds
    #[serde(default)]
    #[validate(nested)]
    pub intake: IntakeLimits,

    /// Logging and metrics
    #[serde(default)]
    pub observability: ObservabilitySection,
}

/// Desk identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DeskSection {
    /// Display name used in logs and reports
    #[serde(default = "default_desk_name")]
    #[validate(length(min = 1, max = 120))]
    pub name: String,
}

fn default_desk_name() -> String {
    "clinic-desk".to_string()
}

impl Default for DeskSection {
    fn default() -> Self {
        Self {
            name: default_desk_name(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

/// Logging and metrics settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilitySection {
    #[serde(default)]
    pub log_format: LogFormat,

    /// Prometheus port, 0 disables the exporter
    #[serde(default)]
    pub metrics_port: u16,
}

impl ObservabilitySection {
    pub fn metrics_port(&self) -> Option<u16> {
        (self.metrics_port != 0).then_some(self.metrics_port)
    }
}
