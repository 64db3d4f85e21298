//! Text resource loading.
//!
//! Resources are identified by fixed string keys. Providers are injected
//! into [`crate::service::RewriterService`] at construction so the service
//! can be built deterministically in tests without any process-wide
//! registry.

use std::collections::HashMap;
use std::path::PathBuf;

use lector_common::ResourceError;

/// Resource key of the bundled default reader stylesheet.
pub const READER_STYLESHEET_DESKTOP: &str = "reader-stylesheet-desktop";

/// Resolves resource keys to text content.
pub trait ResourceProvider {
    fn load_text_resource(&self, key: &str) -> Result<String, ResourceError>;
}

/// Resources compiled into the binary at build time.
///
/// This is the provider used in production; a missing key here is a
/// packaging defect, not a runtime condition.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledResources;

impl ResourceProvider for BundledResources {
    fn load_text_resource(&self, key: &str) -> Result<String, ResourceError> {
        match key {
            READER_STYLESHEET_DESKTOP => {
                Ok(include_str!("../resources/reader-desktop.css").to_string())
            }
            _ => Err(ResourceError::ResourceNotFound(key.to_string())),
        }
    }
}

/// Resources served from a directory, with in-memory overrides.
///
/// Keys map to file names under `base_dir`. Overrides take precedence over
/// the filesystem, which lets tests and tooling swap individual resources
/// without touching disk.
pub struct DirResources {
    base_dir: PathBuf,
    overrides: HashMap<String, String>,
}

impl DirResources {
    /// Create a new provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Register an in-memory resource override.
    pub fn add_override(&mut self, key: impl Into<String>, content: impl Into<String>) {
        self.overrides.insert(key.into(), content.into());
    }
}

impl ResourceProvider for DirResources {
    fn load_text_resource(&self, key: &str) -> Result<String, ResourceError> {
        if let Some(content) = self.overrides.get(key) {
            return Ok(content.clone());
        }

        let path = self.base_dir.join(key);
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ResourceError::ResourceNotFound(key.to_string()),
            _ => ResourceError::Io(format!("{}: {e}", path.display())),
        })
    }
}
