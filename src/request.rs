//! The per-run request built from parsed command-line arguments.

use std::path::{Path, PathBuf};

/// File name suffixes ktlint is run against.
pub const SOURCE_SUFFIXES: &[&str] = &[".kt", ".kts"];

/// Returns `true` if `path` names a Kotlin source or script file.
///
/// Matching is on the raw bytes of the path, so `build.gradle.kts` matches,
/// `Foo.KT` does not, and paths that are not valid UTF-8 still work.
pub fn is_kotlin_source(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    SOURCE_SUFFIXES
        .iter()
        .any(|suffix| bytes.ends_with(suffix.as_bytes()))
}

/// The entries of `files` that ktlint understands, in input order.
pub fn kotlin_sources(files: &[PathBuf]) -> Vec<&Path> {
    files
        .iter()
        .map(PathBuf::as_path)
        .filter(|f| is_kotlin_source(f))
        .collect()
}

/// Everything a single lint run needs to know, fixed once arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub files: Vec<PathBuf>,
    pub format: bool,
    pub verify_format: bool,
    /// `None` leaves style-config discovery to ktlint.
    pub editorconfig: Option<PathBuf>,
}

impl Default for InvocationRequest {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            format: false,
            verify_format: true,
            editorconfig: None,
        }
    }
}

impl InvocationRequest {
    /// The candidate files that ktlint understands, in input order.
    pub fn source_files(&self) -> Vec<&Path> {
        kotlin_sources(&self.files)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn request(files: &[&str]) -> InvocationRequest {
        InvocationRequest {
            files: files.iter().map(PathBuf::from).collect(),
            ..InvocationRequest::default()
        }
    }

    fn names<'a>(paths: &[&'a Path]) -> Vec<&'a str> {
        paths.iter().map(|p| p.to_str().unwrap()).collect()
    }

    #[test]
    fn keeps_kt_and_kts() {
        let req = request(&["Foo.kt", "build.gradle.kts"]);
        assert_eq!(names(&req.source_files()), vec!["Foo.kt", "build.gradle.kts"]);
    }

    #[test]
    fn drops_other_extensions() {
        let req = request(&["Foo.kt", "readme.md", "Bar.java"]);
        assert_eq!(names(&req.source_files()), vec!["Foo.kt"]);
    }

    #[test]
    fn preserves_input_order() {
        let req = request(&["z/Last.kt", "notes.txt", "a/First.kts", "Mid.kt"]);
        assert_eq!(
            names(&req.source_files()),
            vec!["z/Last.kt", "a/First.kts", "Mid.kt"]
        );
    }

    #[test]
    fn empty_when_nothing_matches() {
        let req = request(&["readme.md", "Makefile"]);
        assert!(req.source_files().is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(InvocationRequest::default().source_files().is_empty());
    }

    #[test]
    fn plain_list_filter_matches_request() {
        let files: Vec<PathBuf> = ["a.kt", "b.md", "c.kts"].iter().map(PathBuf::from).collect();
        let req = InvocationRequest {
            files: files.clone(),
            ..InvocationRequest::default()
        };
        assert_eq!(kotlin_sources(&files), req.source_files());
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(!is_kotlin_source(Path::new("Foo.KT")));
        assert!(!is_kotlin_source(Path::new("kt")));
        assert!(is_kotlin_source(Path::new(".kt")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_matched() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let kt = Path::new(OsStr::from_bytes(b"caf\xe9/Main.kt"));
        let md = Path::new(OsStr::from_bytes(b"caf\xe9/notes.md"));
        assert!(is_kotlin_source(kt));
        assert!(!is_kotlin_source(md));
    }

    #[test]
    fn default_verifies_format() {
        let req = InvocationRequest::default();
        assert!(req.verify_format);
        assert!(!req.format);
        assert!(req.editorconfig.is_none());
    }
}
