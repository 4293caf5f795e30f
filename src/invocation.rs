//! Turning a request into the exact ktlint command line.

use std::ffi::OsString;
use std::path::Path;

use crate::config::Settings;
use crate::rules::DisabledRules;

/// Flags given to the JVM before the jar selector.
pub const RUNTIME_FLAGS: &[&str] = &["--add-opens=java.base/java.lang=ALL-UNNAMED"];

/// Variable ktlint reads to find its own java runtime.
pub const JAVA_CMD_VAR: &str = "JAVA_CMD";

/// ktlint's in-place format flag.
pub const FORMAT_FLAG: &str = "-F";

/// Build the arguments handed to ktlint itself, always in this order: the
/// source files, one `--disabled_rules=` argument, the optional
/// `--editorconfig <path>` pair, then the optional format flag.
pub fn linter_args(
    files: &[&Path],
    rules: &DisabledRules,
    editorconfig: Option<&Path>,
    format: bool,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = files.iter().map(|f| f.as_os_str().to_owned()).collect();
    args.push(rules.to_arg().into());
    if let Some(path) = editorconfig {
        args.push("--editorconfig".into());
        args.push(path.as_os_str().to_owned());
    }
    if format {
        args.push(FORMAT_FLAG.into());
    }
    args
}

/// A fully described child process: what to run, with which arguments, and
/// which variables to add on top of the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub env: Vec<(OsString, OsString)>,
}

impl LaunchSpec {
    /// `<java> <runtime flags> -jar <jar> <linter_args...>` with `JAVA_CMD`
    /// pointing at the same runtime.
    pub fn ktlint(settings: &Settings, linter_args: Vec<OsString>) -> Self {
        let mut args: Vec<OsString> = RUNTIME_FLAGS.iter().map(OsString::from).collect();
        args.push("-jar".into());
        args.push(settings.jar.as_os_str().to_owned());
        args.extend(linter_args);

        Self {
            program: settings.java.clone().into(),
            args,
            env: vec![(JAVA_CMD_VAR.into(), settings.java.clone().into())],
        }
    }

    /// Space-joined rendering for log output.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
