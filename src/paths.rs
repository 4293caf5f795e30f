//! Centralised ktcheck directory resolution.
//!
//! Two directories matter:
//!   * the **install dir**, where the ktlint jar and the default
//!     `.editorconfig` ship next to the executable
//!     (`KTCHECK_INSTALL_DIR` overrides it);
//!   * the **user dir**, holding the optional user-level `config.toml`
//!     (`KTCHECK_HOME` overrides `dirs::config_dir()/ktcheck`).

use std::path::{Path, PathBuf};

/// File name of the bundled ktlint archive.
pub const JAR_NAME: &str = "ktlint-android-all.jar";

/// File name of the bundled style configuration.
pub const EDITORCONFIG_NAME: &str = ".editorconfig";

/// Return the path in env var `name` when set and non-empty, otherwise
/// fall through to `fallback`.
fn env_path_or(name: &str, fallback: Option<PathBuf>) -> Option<PathBuf> {
    if let Ok(value) = std::env::var(name)
        && !value.is_empty()
    {
        return Some(PathBuf::from(value));
    }
    fallback
}

/// Directory containing the running executable, normalised.
fn exe_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf)
}

/// Returns the directory the bundled jar and `.editorconfig` live in.
pub fn install_dir() -> PathBuf {
    env_path_or("KTCHECK_INSTALL_DIR", exe_dir()).unwrap_or_else(|| PathBuf::from("."))
}

/// Default location of the ktlint jar.
pub fn default_jar() -> PathBuf {
    install_dir().join(JAR_NAME)
}

/// Default `.editorconfig` forwarded to ktlint.
pub fn default_editorconfig() -> PathBuf {
    install_dir().join(EDITORCONFIG_NAME)
}

/// Returns the ktcheck user-level directory.
///
/// When `KTCHECK_HOME` is set (and non-empty), returns that path directly.
/// Otherwise returns `dirs::config_dir().map(|d| d.join("ktcheck"))`.
pub fn user_dir() -> Option<PathBuf> {
    env_path_or("KTCHECK_HOME", dirs::config_dir().map(|d| d.join("ktcheck")))
}

/// How the tool refers to itself in the "To format run" hint.
pub fn self_command() -> String {
    std::env::current_exe()
        .ok()
        .map_or_else(|| "ktcheck".to_string(), |p| p.display().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn set_var(key: &str, val: &str) {
        // SAFETY: test-only env mutation; #[serial] prevents races.
        unsafe { std::env::set_var(key, val) };
    }

    fn remove_var(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    #[serial]
    fn install_dir_uses_override() {
        set_var("KTCHECK_INSTALL_DIR", "/opt/ktlint");
        let jar = default_jar();
        let editorconfig = default_editorconfig();
        remove_var("KTCHECK_INSTALL_DIR");
        assert_eq!(jar, PathBuf::from("/opt/ktlint/ktlint-android-all.jar"));
        assert_eq!(editorconfig, PathBuf::from("/opt/ktlint/.editorconfig"));
    }

    #[test]
    #[serial]
    fn install_dir_ignores_empty_override() {
        set_var("KTCHECK_INSTALL_DIR", "");
        let dir = install_dir();
        remove_var("KTCHECK_INSTALL_DIR");
        assert_ne!(dir, PathBuf::from(""));
    }

    #[test]
    #[serial]
    fn install_dir_defaults_to_exe_dir() {
        remove_var("KTCHECK_INSTALL_DIR");
        let expected = exe_dir().unwrap();
        assert_eq!(install_dir(), expected);
    }

    #[test]
    #[serial]
    fn user_dir_uses_ktcheck_home_when_set() {
        set_var("KTCHECK_HOME", "/custom/ktcheck/home");
        let result = user_dir();
        remove_var("KTCHECK_HOME");
        assert_eq!(result, Some(PathBuf::from("/custom/ktcheck/home")));
    }

    #[test]
    #[serial]
    fn user_dir_falls_back_to_platform_dir() {
        remove_var("KTCHECK_HOME");
        assert_eq!(user_dir(), dirs::config_dir().map(|d| d.join("ktcheck")));
    }
}
