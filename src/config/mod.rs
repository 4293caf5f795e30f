//! Optional TOML configuration and the merged per-run settings.
//!
//! Resolution order for every setting: command-line flag, then environment
//! variable (handled by clap), then config file, then built-in default.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::paths;

/// Repo-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".ktcheck.toml";

/// User-level config file name inside [`paths::user_dir`].
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Default runtime used to launch the jar.
pub const DEFAULT_JAVA: &str = "java";

/// On-disk configuration, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub linter: LinterSection,
    pub rules: RulesSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinterSection {
    pub java: Option<String>,
    /// Relative paths are taken from the config file's directory.
    pub jar: Option<PathBuf>,
    /// An empty string turns off the `--editorconfig` override. Relative
    /// paths are taken from the config file's directory.
    pub editorconfig: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesSection {
    pub extra_disabled: Vec<String>,
}

/// Default search paths in priority order:
/// 1. `.ktcheck.toml` (repo-local, resolved from CWD)
/// 2. `{user_dir}/config.toml`
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(LOCAL_CONFIG_NAME));
    }
    if let Some(dir) = paths::user_dir() {
        candidates.push(dir.join(USER_CONFIG_NAME));
    }
    candidates
}

/// Try to load a config from `path`. Returns `Ok(Some(config))` on success,
/// `Ok(None)` if the file does not exist, or `Err` for other I/O / parse errors.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or contains invalid TOML.
pub fn try_load(path: &Path) -> anyhow::Result<Option<FileConfig>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("failed to read config file: {}", path.display())));
        }
    };
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    Ok(Some(config))
}

/// A config file together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub source: Option<PathBuf>,
    pub config: FileConfig,
}

/// Load the first config found.
///
/// An `explicit` path must exist; otherwise each of `search_paths` is tried
/// in turn and a missing file is skipped. Nothing found yields defaults.
///
/// # Errors
///
/// Returns an error if the explicit path is missing or any candidate file is
/// unreadable or malformed.
pub fn load(explicit: Option<&Path>, search_paths: &[PathBuf]) -> anyhow::Result<Loaded> {
    if let Some(path) = explicit {
        let config = try_load(path)?
            .ok_or_else(|| anyhow::anyhow!("config file not found: {}", path.display()))?;
        return Ok(Loaded {
            source: Some(path.to_path_buf()),
            config,
        });
    }

    for path in search_paths {
        if let Some(config) = try_load(path)? {
            return Ok(Loaded {
                source: Some(path.clone()),
                config,
            });
        }
    }

    Ok(Loaded::default())
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub java: Option<String>,
    pub jar: Option<PathBuf>,
    pub editorconfig: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub java: String,
    pub jar: PathBuf,
    pub editorconfig: Option<PathBuf>,
    pub extra_disabled: Vec<String>,
}

/// An empty editorconfig value means "let ktlint search the tree".
fn editorconfig_path(value: String) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Anchor a relative path from a config file at that file's directory.
fn relative_to(base: Option<&Path>, path: PathBuf) -> PathBuf {
    match base {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

impl Settings {
    /// Merge `overrides` over the loaded file, falling back to the bundled
    /// defaults.
    ///
    /// Override paths stay relative to the working directory; file paths
    /// are relative to the file that set them.
    pub fn resolve(overrides: Overrides, loaded: Loaded) -> Self {
        let Loaded { source, config } = loaded;
        let FileConfig { linter, rules } = config;
        let base = source.as_deref().and_then(Path::parent);

        let java = overrides
            .java
            .filter(|j| !j.is_empty())
            .or(linter.java)
            .unwrap_or_else(|| DEFAULT_JAVA.to_string());

        let jar = overrides
            .jar
            .or_else(|| linter.jar.map(|p| relative_to(base, p)))
            .unwrap_or_else(paths::default_jar);

        let editorconfig = match overrides.editorconfig {
            Some(value) => editorconfig_path(value),
            None => match linter.editorconfig {
                Some(value) => editorconfig_path(value).map(|p| relative_to(base, p)),
                None => Some(paths::default_editorconfig()),
            },
        };

        Self {
            java,
            jar,
            editorconfig,
            extra_disabled: rules.extra_disabled,
        }
    }
}
