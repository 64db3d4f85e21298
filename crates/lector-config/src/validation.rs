//! Full configuration validation.
//!
//! Validates numeric ranges and enumerated string values, collecting all
//! errors into a single [`ConfigError::ValidationError`].

use crate::schema::LectorConfig;
use lector_common::ConfigError;

/// Valid values for `logging.level`.
const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LectorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Rewriter constraints
    validate_range(
        &mut errors,
        "rewriter.min_out_length",
        config.rewriter.min_out_length,
        0,
        100_000,
    );
    if config.rewriter.stylesheet_resource.trim().is_empty() {
        errors.push("rewriter.stylesheet_resource must not be empty".into());
    }

    // Logging constraints
    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = {} is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
