//! Rewriter engine seam.
//!
//! The actual HTML simplification lives in an external engine; this module
//! defines the traits the service coordinates against, plus a passthrough
//! stand-in used by tests and the CLI.

use lector_common::{EngineError, RewriteMode, Theme};
use tracing::debug;
use url::Url;

/// A per-document rewriter handle.
///
/// Handles are exclusively owned by the caller that requested them and are
/// never shared across documents. `set_min_out_length` and `set_theme` are
/// order-independent configuration; apply them before the first `write`.
pub trait Rewriter {
    /// Minimum output size in bytes below which `finish` fails.
    /// Zero disables the gate.
    fn set_min_out_length(&mut self, len: u32);

    /// Visual theme the engine should stamp on transformed output.
    fn set_theme(&mut self, theme: Theme);

    /// Feed a chunk of the source document.
    fn write(&mut self, chunk: &[u8]) -> Result<(), EngineError>;

    /// Consume the handle and produce the transformed document.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, EngineError>;
}

/// Factory for per-document rewriter handles.
pub trait RewriterEngine: Send + Sync {
    fn make_rewriter(&self, url: &Url, mode: RewriteMode) -> Box<dyn Rewriter>;
}

/// Engine stand-in that performs no markup simplification.
///
/// It honors only the coordination-level contract: chunks are buffered
/// unaltered and the minimum-output-length gate is enforced at `finish`.
/// Useful for exercising provisioning end to end where a real readability
/// engine is not linked in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEngine;

impl RewriterEngine for PassthroughEngine {
    fn make_rewriter(&self, url: &Url, mode: RewriteMode) -> Box<dyn Rewriter> {
        debug!(url = %url, ?mode, "creating passthrough rewriter");
        Box::new(PassthroughRewriter::default())
    }
}

#[derive(Default)]
struct PassthroughRewriter {
    min_out_length: u32,
    theme: Theme,
    buf: Vec<u8>,
}

impl Rewriter for PassthroughRewriter {
    fn set_min_out_length(&mut self, len: u32) {
        self.min_out_length = len;
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn write(&mut self, chunk: &[u8]) -> Result<(), EngineError> {
        self.buf.extend_from_slice(chunk);
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, EngineError> {
        debug!(
            theme = %self.theme,
            bytes = self.buf.len(),
            "finishing passthrough rewrite"
        );
        if self.min_out_length > 0 && self.buf.len() < self.min_out_length as usize {
            return Err(EngineError::OutputTooShort {
                produced: self.buf.len(),
                minimum: self.min_out_length,
            });
        }
        Ok(self.buf)
    }
}
