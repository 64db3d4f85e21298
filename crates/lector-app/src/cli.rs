use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lector — readability rewriting for article-like web pages.
#[derive(Parser, Debug)]
#[command(name = "lector", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify URLs as likely readable or not.
    Check {
        /// URLs to classify.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the CSP-wrapped content stylesheet.
    Stylesheet,

    /// Rewrite an HTML document in readability mode.
    Rewrite {
        /// URL the document was fetched from.
        url: String,

        /// Read the document from a file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Theme override (none, light, dark, sepia).
        #[arg(long)]
        theme: Option<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
