//! Turning a ktlint run into console output and an exit code.

use std::io::{self, Write};
use std::path::Path;

use crate::runner::ProcessResult;

/// Printed above ktlint's own report.
pub const ERRORS_HEADER: &str = "prebuilts/ktlint found errors in files you changed:";

/// Printed when ktlint could not be started.
pub const NOT_FOUND_MESSAGE: &str = "Error running ktlint!";

const HINT_RULE: &str = "**********************************************************************";

/// How a run ended, before it becomes a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No Kotlin files in the input; ktlint was not started.
    NoSources,
    Clean,
    Violations,
    LinterNotFound,
}

impl Outcome {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::NoSources | Self::Clean => 0,
            Self::Violations | Self::LinterNotFound => 1,
        }
    }
}

/// The block telling a developer how to auto-format the files that failed.
pub fn format_hint(self_command: &str, files: &[&Path]) -> String {
    let files = files
        .iter()
        .map(|f| f.display().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("\n{HINT_RULE}\nTo format run:\n{self_command} --format --file {files}\n{HINT_RULE}\n")
}

/// Print the outcome of a finished run to `out` and classify it.
///
/// Empty output is always clean, whatever ktlint's exit status was. The
/// hint is only shown when format verification is on.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_result(
    out: &mut impl Write,
    result: &ProcessResult,
    hint: Option<&str>,
) -> io::Result<Outcome> {
    if !result.has_violations() {
        return Ok(Outcome::Clean);
    }
    writeln!(out, "{ERRORS_HEADER}")?;
    writeln!(out, "{}", result.text())?;
    if let Some(hint) = hint {
        writeln!(out, "{hint}")?;
    }
    out.flush()?;
    Ok(Outcome::Violations)
}

/// Print the not-found message to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_not_found(out: &mut impl Write) -> io::Result<Outcome> {
    writeln!(out, "{NOT_FOUND_MESSAGE}")?;
    out.flush()?;
    Ok(Outcome::LinterNotFound)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn result(stdout: &str) -> ProcessResult {
        ProcessResult {
            stdout: stdout.as_bytes().to_vec(),
            exit_code: 0,
        }
    }

    fn render(result: &ProcessResult, hint: Option<&str>) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = write_result(&mut buf, result, hint).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::NoSources.exit_code(), 0);
        assert_eq!(Outcome::Clean.exit_code(), 0);
        assert_eq!(Outcome::Violations.exit_code(), 1);
        assert_eq!(Outcome::LinterNotFound.exit_code(), 1);
    }

    #[test]
    fn empty_output_is_clean_and_silent() {
        let mut failed = result("");
        failed.exit_code = 1;
        let (outcome, printed) = render(&failed, Some("hint"));
        assert_eq!(outcome, Outcome::Clean);
        assert!(printed.is_empty());
    }

    #[test]
    fn violations_print_header_and_raw_output() {
        let raw = "Foo.kt:3:1: Needless blank line(s) (no-consecutive-blank-lines)";
        let (outcome, printed) = render(&result(raw), None);
        assert_eq!(outcome, Outcome::Violations);
        assert_eq!(printed, format!("{ERRORS_HEADER}\n{raw}\n"));
    }

    #[test]
    fn violations_with_hint() {
        let hint = format_hint("/opt/ktcheck", &[Path::new("Foo.kt")]);
        let (outcome, printed) = render(&result("bad\n"), Some(&hint));
        assert_eq!(outcome, Outcome::Violations);
        assert!(printed.contains("bad\n"));
        assert!(printed.ends_with(&format!("{hint}\n")));
    }

    #[test]
    fn no_hint_when_not_requested() {
        let (_, printed) = render(&result("bad\n"), None);
        assert!(!printed.contains("To format run"));
    }

    #[test]
    fn hint_names_command_and_files() {
        let hint = format_hint(
            "/opt/ktcheck",
            &[Path::new("a/Foo.kt"), Path::new("b/Bar.kts")],
        );
        assert_eq!(
            hint,
            "\n**********************************************************************\n\
             To format run:\n\
             /opt/ktcheck --format --file a/Foo.kt b/Bar.kts\n\
             **********************************************************************\n"
        );
    }

    #[test]
    fn not_found_message() {
        let mut buf = Vec::new();
        let outcome = write_not_found(&mut buf).unwrap();
        assert_eq!(outcome, Outcome::LinterNotFound);
        assert_eq!(String::from_utf8(buf).unwrap(), "Error running ktlint!\n");
    }
}
