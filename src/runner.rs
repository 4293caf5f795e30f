use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::invocation::LaunchSpec;

/// What a finished ktlint run left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub stdout: Vec<u8>,
    pub exit_code: i32,
}

impl ProcessResult {
    /// ktlint reports violations on stdout and prints nothing otherwise.
    pub fn has_violations(&self) -> bool {
        !self.stdout.is_empty()
    }

    /// Captured output decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Failure to get the child process running.
#[derive(Debug)]
pub enum LaunchError {
    /// The program could not be located on `PATH` or at the given path.
    NotFound { program: OsString },
    /// Any other spawn or wait failure.
    Io {
        program: OsString,
        source: std::io::Error,
    },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { program } => {
                write!(f, "executable not found: {}", program.to_string_lossy())
            }
            Self::Io { program, source } => {
                write!(f, "failed to run {}: {source}", program.to_string_lossy())
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Extract an exit code from a process status, mapping signals to 128+N on Unix.
fn exit_code_from_status(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status
            .code()
            .unwrap_or_else(|| status.signal().map_or(1, |s| 128 + s))
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(1)
    }
}

/// Locate `program` on `PATH`.
///
/// A failed lookup is not an error by itself: the name is handed to the OS
/// unchanged, and the spawn error decides between missing and unusable.
fn resolve(program: &OsString) -> PathBuf {
    which::which(program).unwrap_or_else(|_| PathBuf::from(program))
}

/// Run the process described by `spec` to completion.
///
/// Stdout is captured in full; stderr and stdin stay attached to the
/// terminal. Blocks until the child exits, with no timeout.
///
/// # Errors
///
/// Returns [`LaunchError::NotFound`] if the program does not exist and
/// [`LaunchError::Io`] for any other spawn or wait failure, including a
/// program that exists but is not executable.
pub fn execute(spec: &LaunchSpec) -> Result<ProcessResult, LaunchError> {
    let program = resolve(&spec.program);
    tracing::debug!("resolved {} to {}", spec.program.to_string_lossy(), program.display());

    let output = Command::new(&program)
        .args(&spec.args)
        .envs(spec.env.iter().map(|(k, v)| (k, v)))
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LaunchError::NotFound {
                    program: spec.program.clone(),
                }
            } else {
                LaunchError::Io {
                    program: spec.program.clone(),
                    source,
                }
            }
        })?;

    let result = ProcessResult {
        stdout: output.stdout,
        exit_code: exit_code_from_status(output.status),
    };
    tracing::debug!(
        "child exited with {} ({} bytes on stdout)",
        result.exit_code,
        result.stdout.len()
    );
    Ok(result)
}
