//! Command-line argument definitions for the Sextant CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the content source, the configuration
//! file, logging verbosity, and whether findings are rendered as annotated
//! source snippets.

use clap::Parser;

/// Default content source checked when no input is given.
pub const DEFAULT_INPUT: &str = "src/data/phases.ts";

/// Command-line arguments for the Mermaid diagram checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the content source containing diagram literals
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Render every finding with an annotated snippet of the source
    #[arg(short, long)]
    pub diagnostics: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sextant"]).unwrap();

        assert_eq!(args.input, DEFAULT_INPUT);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "warn");
        assert!(!args.diagnostics);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "sextant",
            "content/guide.ts",
            "--config",
            "sextant.toml",
            "--log-level",
            "debug",
            "--diagnostics",
        ])
        .unwrap();

        assert_eq!(args.input, "content/guide.ts");
        assert_eq!(args.config.as_deref(), Some("sextant.toml"));
        assert_eq!(args.log_level, "debug");
        assert!(args.diagnostics);
    }
}
