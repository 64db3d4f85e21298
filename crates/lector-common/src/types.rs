use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Visual theme applied by a rewriter engine to transformed documents.
///
/// `None` leaves the choice to the engine (typically following the system
/// preference of the renderer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    None,
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::None => "none",
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ConfigError;

    /// The empty string is accepted as `None` so callers can pass a
    /// plain "unset" identifier through without special-casing it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Theme::None),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "sepia" => Ok(Theme::Sepia),
            other => Err(ConfigError::ParseError(format!(
                "unrecognized theme: {other}"
            ))),
        }
    }
}

/// Transformation mode requested from a rewriter engine.
///
/// Only readability extraction is requested today; the factory seam is
/// mode-parameterized because engines distinguish between full extraction
/// and lighter-weight passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    Readability,
}
