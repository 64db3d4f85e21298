//! Readability rewriter provisioning.
//!
//! - CSP hash-pinned stylesheet wrapping (`csp`)
//! - URL readability heuristics (`hints`)
//! - Injectable text resource providers (`resource`)
//! - The rewriter engine seam (`engine`)
//! - The provisioning service tying them together (`service`)
//!
//! The HTML simplification itself is delegated to an implementation of
//! [`RewriterEngine`]; this crate owns everything around that seam.

pub mod csp;
pub mod engine;
pub mod hints;
pub mod resource;
pub mod service;

pub use engine::{PassthroughEngine, Rewriter, RewriterEngine};
pub use resource::{BundledResources, DirResources, ResourceProvider, READER_STYLESHEET_DESKTOP};
pub use service::RewriterService;
