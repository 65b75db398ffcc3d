//! Configuration validation
//!
//! Rules:
//! - field ranges declared on the contract types (validator derive)
//! - desk name is not blank
//!
//! Scripts are only linted: every well-formed step is replayable.

use contracts::{ContractError, DeskConfig, SessionScript};
use validator::Validate;

/// Validate a DeskConfig
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &DeskConfig) -> Result<(), ContractError> {
    config.validate()?;
    validate_desk_name(config)?;
    Ok(())
}

/// Non-fatal findings in a SessionScript
pub fn lint_script(script: &SessionScript) -> Vec<String> {
    script
        .steps
        .iter()
        .enumerate()
        .filter_map(|(idx, step)| step.intake_form().map(|(_, form)| (idx, form)))
        .filter(|(_, form)| form.name.trim().is_empty())
        .map(|(idx, _)| {
            format!("steps[{idx}].name is blank; the patient is registered without a name")
        })
        .collect()
}

fn validate_desk_name(config: &DeskConfig) -> Result<(), ContractError> {
    if config.desk.name.trim().is_empty() {
        return Err(ContractError::config_validation(
            "desk.name",
            "desk name cannot be blank",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{Channel, ScriptStep};

    #[test]
    fn test_valid_config() {
        assert!(validate(&DeskConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_desk_name() {
        let mut config = DeskConfig::default();
        config.desk.name = "   ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("cannot be blank"), "got: {err}");
    }

    #[test]
    fn test_zero_name_limit() {
        let mut config = DeskConfig::default();
        config.intake.name_max_chars = 0;
        let err = validate(&config).unwrap_err();
        assert!(
            matches!(err, ContractError::ConfigValidation { .. }),
            "got: {err}"
        );
    }

    #[test]
    fn test_max_age_too_large() {
        let mut config = DeskConfig::default();
        config.intake.max_age = Some(500);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_script_blank_name_is_a_warning() {
        let script = SessionScript {
            steps: vec![
                ScriptStep::Consult,
                ScriptStep::Register {
                    channel: Channel::Regular,
                    name: " ".into(),
                    age: 3,
                    condition: String::new(),
                },
            ],
        };
        let warnings = lint_script(&script);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("steps[1].name"), "got: {warnings:?}");
    }
}
