//! Configuration schema types for Lector.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

use lector_common::Theme;
use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Rewriter Config
// =============================================================================

/// Rewriter provisioning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// Minimum rewritten output size in bytes before a result is accepted
    /// (valid range: 0-100000; 0 disables the gate).
    pub min_out_length: u32,
    /// Default theme applied to rewritten documents.
    pub theme: Theme,
    /// Resource key of the content stylesheet loaded at service startup.
    pub stylesheet_resource: String,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            min_out_length: 1000,
            theme: Theme::None,
            stylesheet_resource: "reader-stylesheet-desktop".into(),
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// =============================================================================
// Top-level Config
// =============================================================================

/// Complete Lector configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LectorConfig {
    pub rewriter: RewriterConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rewriter_config() {
        let config = RewriterConfig::default();
        assert_eq!(config.min_out_length, 1000);
        assert_eq!(config.theme, Theme::None);
        assert_eq!(config.stylesheet_resource, "reader-stylesheet-desktop");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: LectorConfig = toml::from_str(
            r#"
[rewriter]
min_out_length = 500
"#,
        )
        .unwrap();
        assert_eq!(config.rewriter.min_out_length, 500);
        assert_eq!(config.rewriter.theme, Theme::None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn theme_parses_from_toml() {
        let config: LectorConfig = toml::from_str(
            r#"
[rewriter]
theme = "sepia"
"#,
        )
        .unwrap();
        assert_eq!(config.rewriter.theme, Theme::Sepia);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: LectorConfig = toml::from_str("").unwrap();
        assert_eq!(config.rewriter.min_out_length, 1000);
        assert_eq!(config.logging.level, "info");
    }
}
