//! Intake fields and the bounded-length rule applied at the boundary.
//!
//! Rules:
//! - surrounding whitespace is trimmed before any check
//! - lengths are counted in chars, never bytes
//! - empty text is accepted for both fields
//! - over-long text is truncated or rejected according to `OverflowPolicy`
//! - age is unbounded unless `max_age` is set

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ContractError;

/// Raw registration fields supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub name: String,
    pub age: u32,
    pub condition: String,
}

impl IntakeForm {
    pub fn new(name: impl Into<String>, age: u32, condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            condition: condition.into(),
        }
    }
}

/// What to do with text longer than its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the first `max` chars
    #[default]
    Truncate,
    /// Fail with `ContractError::FieldTooLong`
    Reject,
}

/// Field bounds for registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IntakeLimits {
    /// Max chars kept for a name
    #[serde(default = "default_name_max_chars")]
    #[validate(range(min = 1, max = 4096))]
    pub name_max_chars: usize,

    /// Max chars kept for a condition
    #[serde(default = "default_condition_max_chars")]
    #[validate(range(min = 1, max = 4096))]
    pub condition_max_chars: usize,

    /// Oldest accepted age, `None` accepts any age
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 200))]
    pub max_age: Option<u32>,

    #[serde(default)]
    pub overflow: OverflowPolicy,
}

fn default_name_max_chars() -> usize {
    49
}

fn default_condition_max_chars() -> usize {
    99
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            name_max_chars: default_name_max_chars(),
            condition_max_chars: default_condition_max_chars(),
            max_age: None,
            overflow: OverflowPolicy::default(),
        }
    }
}

/// Which fields were shortened during normalization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truncation {
    pub name: bool,
    pub condition: bool,
}

impl IntakeLimits {
    /// Apply the intake rules to a form
    ///
    /// # Errors
    /// - `FieldTooLong` when a field is over its limit and the policy is `Reject`
    /// - `AgeOutOfRange` when a cap is configured and `age` exceeds it
    pub fn normalize(&self, form: IntakeForm) -> Result<(IntakeForm, Truncation), ContractError> {
        if let Some(max) = self.max_age {
            if form.age > max {
                return Err(ContractError::AgeOutOfRange { age: form.age, max });
            }
        }

        let mut truncation = Truncation::default();
        let (name, cut) = self.bound("name", form.name.trim(), self.name_max_chars)?;
        truncation.name = cut;
        let (condition, cut) =
            self.bound("condition", form.condition.trim(), self.condition_max_chars)?;
        truncation.condition = cut;

        Ok((
            IntakeForm {
                name,
                age: form.age,
                condition,
            },
            truncation,
        ))
    }

    fn bound(
        &self,
        field: &'static str,
        value: &str,
        max: usize,
    ) -> Result<(String, bool), ContractError> {
        match value.char_indices().nth(max) {
            None => Ok((value.to_string(), false)),
            Some((cut_at, _)) => match self.overflow {
                OverflowPolicy::Truncate => Ok((value[..cut_at].to_string(), true)),
                OverflowPolicy::Reject => Err(ContractError::FieldTooLong {
                    field,
                    actual: value.chars().count(),
                    max,
                }),
            },
        }
    }
}
