//! Content-Security-Policy wrapping for the reader stylesheet.
//!
//! The wrapped bundle is injected verbatim into rewritten documents. The
//! policy forbids script execution entirely and allows exactly one inline
//! style: the one whose SHA-256 digest is pinned in the meta tag. The hash
//! is recomputed from the stylesheet bytes on every wrap, never cached
//! separately from its source.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Element id of the injected style block, used by renderers to locate it.
pub const STYLE_ELEMENT_ID: &str = "lector_reader_style";

/// Wrap a stylesheet with a hash-pinning CSP meta tag and a `<style>` block.
///
/// The stylesheet bytes are embedded unaltered; extracting the `<style>`
/// element's content reproduces the input exactly.
pub fn wrap_stylesheet_with_csp(stylesheet: &str) -> String {
    let digest = Sha256::digest(stylesheet.as_bytes());
    let hash_b64 = B64.encode(digest);

    format!(
        "<meta http-equiv=\"Content-Security-Policy\" content=\"\
script-src 'none'; style-src 'sha256-{hash_b64}'\">\n\
<style id=\"{STYLE_ELEMENT_ID}\">{stylesheet}</style>"
    )
}
