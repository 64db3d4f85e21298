mod cli;

use std::io::{Read, Write};
use std::path::Path;

use lector_common::{LectorError, Theme};
use lector_config::LectorConfig;
use lector_rewriter::{BundledResources, PassthroughEngine, RewriterService};
use tracing_subscriber::EnvFilter;
use url::Url;

fn main() {
    let args = cli::parse();

    // Load config before logging init so the --log-level flag can still
    // override whatever the file says.
    let (config, config_err) = match &args.config {
        Some(path) => split_result(lector_config::load_from_path(path)),
        None => split_result(lector_config::load_config()),
    };

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let directive = format!("lector={level}");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "lector=info".parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        "Lector v{} (min_out_length: {}, theme: {})",
        env!("CARGO_PKG_VERSION"),
        config.rewriter.min_out_length,
        config.rewriter.theme
    );

    match run(args.command, config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn split_result(
    result: Result<LectorConfig, lector_common::ConfigError>,
) -> (LectorConfig, Option<lector_common::ConfigError>) {
    match result {
        Ok(config) => (config, None),
        Err(e) => (LectorConfig::default(), Some(e)),
    }
}

/// Dispatch a subcommand. `Ok(false)` means the command ran but the result
/// warrants a non-zero exit (e.g. a URL classified as not readable).
fn run(command: cli::Command, config: LectorConfig) -> lector_common::Result<bool> {
    let service = RewriterService::new(
        &BundledResources,
        Box::new(PassthroughEngine),
        config.rewriter.clone(),
    )?;

    match command {
        cli::Command::Check { urls } => check(&service, &urls),
        cli::Command::Stylesheet => {
            println!("{}", service.content_stylesheet());
            Ok(true)
        }
        cli::Command::Rewrite { url, input, theme } => {
            rewrite(&service, &config, &url, input.as_deref(), theme.as_deref())?;
            Ok(true)
        }
    }
}

fn check(service: &RewriterService, urls: &[String]) -> lector_common::Result<bool> {
    let mut all_readable = true;
    for raw in urls {
        let url = parse_url(raw)?;
        let readable = service.url_looks_readable(&url);
        all_readable &= readable;
        println!(
            "{}\t{}",
            if readable { "readable" } else { "not-readable" },
            url
        );
    }
    Ok(all_readable)
}

fn rewrite(
    service: &RewriterService,
    config: &LectorConfig,
    raw_url: &str,
    input: Option<&Path>,
    theme_arg: Option<&str>,
) -> lector_common::Result<()> {
    let url = parse_url(raw_url)?;
    let theme = match theme_arg {
        Some(s) => s.parse::<Theme>()?,
        None => config.rewriter.theme,
    };

    let html = match input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let mut rewriter = service.make_rewriter(&url, theme);
    rewriter.write(&html)?;
    let out = rewriter.finish()?;
    std::io::stdout().write_all(&out)?;
    Ok(())
}

fn parse_url(raw: &str) -> lector_common::Result<Url> {
    Url::parse(raw).map_err(|e| LectorError::Other(format!("invalid URL {raw}: {e}")))
}
