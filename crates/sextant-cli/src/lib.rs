//! CLI logic for the Sextant diagram checker.
//!
//! [`run`] loads the configuration, checks every diagram of the input file,
//! and prints the report. The binary maps its result to the exit code.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, DEFAULT_INPUT};
pub use config::ConfigError;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::info;
use miette::{GraphicalReportHandler, NamedSource};

use sextant::{RunResult, SextantError, Validator};

use error_adapter::finding_reportables;

/// Run the Sextant CLI application
///
/// Checks the input file and prints one line per block plus a summary to the
/// process's standard output and standard error. See [`run_with`].
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SextantError` for:
/// - Configuration loading errors
/// - Unreadable input
/// - Failures writing the report
///
/// Findings are not errors; they are carried by the returned [`RunResult`].
pub fn run(args: &Args) -> Result<RunResult, SextantError> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    run_with(args, &mut out, &mut err)
}

/// Run the CLI pipeline, writing the report to the given writers.
///
/// Pass lines go to `out` and failure lines to `err`. With `--diagnostics`,
/// every finding is also rendered to `err` as an annotated snippet of the
/// input. Nothing is written when configuration or input loading fails.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with(
    args: &Args,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<RunResult, SextantError> {
    info!(input_path = args.input; "Checking content source");

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input).map_err(|source| SextantError::Read {
        path: PathBuf::from(&args.input),
        source,
    })?;

    let validator = Validator::new(app_config);
    let result = validator.check(&source);

    let name = source_name(&args.input);
    writeln!(
        out,
        "Checking {} Mermaid diagrams in {name}\n",
        result.diagram_count()
    )?;
    result.write_report(out, err)?;

    if args.diagnostics && !result.is_clean() {
        let src = NamedSource::new(name, source);
        write_diagnostics(&result, &src, err)?;
    }

    info!(
        diagrams = result.diagram_count(),
        findings = result.finding_count();
        "Check complete"
    );

    Ok(result)
}

/// Render every finding of `result` as a miette report.
fn write_diagnostics(
    result: &RunResult,
    src: &NamedSource<String>,
    err: &mut impl Write,
) -> io::Result<()> {
    let reporter = GraphicalReportHandler::new();

    for reportable in finding_reportables(result, src) {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &reportable)
            .map_err(io::Error::other)?;
        writeln!(err, "{writer}")?;
    }

    Ok(())
}

/// File name of the input, as shown in the report header.
fn source_name(input: &str) -> String {
    Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name() {
        assert_eq!(source_name("src/data/phases.ts"), "phases.ts");
        assert_eq!(source_name("guide.ts"), "guide.ts");
        assert_eq!(source_name(".."), "..");
    }
}
