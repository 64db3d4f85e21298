//! Rewriter provisioning service.

use lector_common::{ResourceError, RewriteMode, Theme};
use lector_config::RewriterConfig;
use tracing::{debug, info};
use url::Url;

use crate::csp;
use crate::engine::{Rewriter, RewriterEngine};
use crate::hints;
use crate::resource::ResourceProvider;

/// Bootstraps the reader stylesheet and hands out per-document rewriter
/// handles.
///
/// The CSP-wrapped stylesheet bundle is computed once at construction and
/// is immutable afterwards, so a service behind a shared reference can be
/// used from any number of callers without locking.
pub struct RewriterService {
    engine: Box<dyn RewriterEngine>,
    config: RewriterConfig,
    content_stylesheet: String,
}

impl std::fmt::Debug for RewriterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriterService")
            .field("engine", &"<dyn RewriterEngine>")
            .field("config", &self.config)
            .field("content_stylesheet", &self.content_stylesheet)
            .finish()
    }
}

impl RewriterService {
    /// Build the service, loading and wrapping the configured stylesheet.
    ///
    /// A missing stylesheet resource is fatal to construction: the service
    /// cannot exist without its bundle, and a bad resource key is a
    /// packaging defect rather than a runtime condition.
    pub fn new(
        resources: &dyn ResourceProvider,
        engine: Box<dyn RewriterEngine>,
        config: RewriterConfig,
    ) -> Result<Self, ResourceError> {
        let stylesheet = resources.load_text_resource(&config.stylesheet_resource)?;
        let content_stylesheet = csp::wrap_stylesheet_with_csp(&stylesheet);
        info!(
            resource = %config.stylesheet_resource,
            bytes = stylesheet.len(),
            "content stylesheet loaded"
        );

        Ok(Self {
            engine,
            config,
            content_stylesheet,
        })
    }

    /// Whether the page at `url` likely contains long-form readable content.
    pub fn url_looks_readable(&self, url: &Url) -> bool {
        hints::url_looks_readable(url)
    }

    /// Construct a rewriter handle for one document.
    ///
    /// The handle comes back configured for readability extraction with the
    /// service's minimum-output-length threshold and the requested theme.
    /// Ownership transfers to the caller; handles never share state.
    pub fn make_rewriter(&self, url: &Url, theme: Theme) -> Box<dyn Rewriter> {
        debug!(url = %url, theme = %theme, "creating rewriter");
        let mut rewriter = self.engine.make_rewriter(url, RewriteMode::Readability);
        rewriter.set_min_out_length(self.config.min_out_length);
        rewriter.set_theme(theme);
        rewriter
    }

    /// The canonical CSP-wrapped stylesheet bundle.
    ///
    /// Byte-identical across calls for the lifetime of the service.
    pub fn content_stylesheet(&self) -> &str {
        &self.content_stylesheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PassthroughEngine;
    use crate::resource::{BundledResources, DirResources, READER_STYLESHEET_DESKTOP};

    fn service_with(css: &str, min_out_length: u32) -> RewriterService {
        let mut resources = DirResources::new("/nonexistent");
        resources.add_override("test.css", css);
        let config = RewriterConfig {
            min_out_length,
            stylesheet_resource: "test.css".into(),
            ..Default::default()
        };
        RewriterService::new(&resources, Box::new(PassthroughEngine), config).unwrap()
    }

    fn article_url() -> Url {
        Url::parse("https://example.com/2024/05/01/article-title").unwrap()
    }

    #[test]
    fn construction_fails_without_stylesheet() {
        let resources = DirResources::new("/nonexistent");
        let err = RewriterService::new(
            &resources,
            Box::new(PassthroughEngine),
            RewriterConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ResourceError::ResourceNotFound(_)));
    }

    #[test]
    fn bundled_stylesheet_constructs() {
        let service = RewriterService::new(
            &BundledResources,
            Box::new(PassthroughEngine),
            RewriterConfig::default(),
        )
        .unwrap();
        assert!(service
            .content_stylesheet()
            .contains("Content-Security-Policy"));
        assert_eq!(
            RewriterConfig::default().stylesheet_resource,
            READER_STYLESHEET_DESKTOP
        );
    }

    #[test]
    fn stylesheet_is_wrapped_and_verbatim() {
        let css = "article { max-width: 40rem; }";
        let service = service_with(css, 0);
        let bundle = service.content_stylesheet();
        assert!(bundle.contains("script-src 'none'"));
        assert!(bundle.contains("style-src 'sha256-"));
        assert!(bundle.contains(css));
    }

    #[test]
    fn content_stylesheet_is_idempotent() {
        let service = service_with("p { margin: 0; }", 0);
        let first = service.content_stylesheet().to_string();
        assert_eq!(service.content_stylesheet(), first);
        assert_eq!(service.content_stylesheet(), first);
    }

    #[test]
    fn classifier_matches_hint_rules() {
        let service = service_with("p {}", 0);
        assert!(service.url_looks_readable(&article_url()));
        assert!(!service.url_looks_readable(&Url::parse("https://example.com/login").unwrap()));
    }

    #[test]
    fn rewriter_gets_threshold_from_config() {
        let service = service_with("p {}", 50);
        let mut rw = service.make_rewriter(&article_url(), Theme::None);
        rw.write(b"tiny").unwrap();
        let err = rw.finish().unwrap_err();
        assert!(matches!(
            err,
            lector_common::EngineError::OutputTooShort { minimum: 50, .. }
        ));
    }

    #[test]
    fn handles_are_independent_and_do_not_touch_the_bundle() {
        let service = service_with("p { margin: 0; }", 0);
        let before = service.content_stylesheet().to_string();

        let mut a = service.make_rewriter(&article_url(), Theme::Light);
        let mut b = service.make_rewriter(
            &Url::parse("https://other.example/2023/01/02/another-story").unwrap(),
            Theme::Dark,
        );
        a.write(b"<p>first</p>").unwrap();
        b.write(b"<p>second</p>").unwrap();

        assert_eq!(a.finish().unwrap(), b"<p>first</p>");
        assert_eq!(b.finish().unwrap(), b"<p>second</p>");
        assert_eq!(service.content_stylesheet(), before);
    }
}
