//! ktlint rules suppressed on every run.

/// Rules that are never enforced.
pub const BASE_DISABLED: &[&str] = &[
    "indent",
    "paren-spacing",
    "curly-spacing",
    "wrapping",
    // trailing-comma depends on wrapping
    "trailing-comma-on-call-site",
    "trailing-comma-on-declaration-site",
    // annotation rules depend on wrapping
    "spacing-between-declarations-with-annotations",
    "annotation",
];

/// Formatting rules left to a separate formatter (usually ktfmt) when format
/// verification is turned off.
pub const FORMAT_DISABLED: &[&str] = &[
    "final-newline",
    "no-consecutive-blank-lines",
    "import-ordering",
];

/// Ordered, duplicate-free list of rule ids passed to `--disabled_rules=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledRules(Vec<String>);

impl DisabledRules {
    /// Build the set for a run: the base list, then [`FORMAT_DISABLED`] when
    /// `verify_format` is off, then any `extra` ids from configuration.
    pub fn new(verify_format: bool, extra: &[String]) -> Self {
        let mut rules = Self(Vec::new());
        for id in BASE_DISABLED {
            rules.push(id);
        }
        if !verify_format {
            for id in FORMAT_DISABLED {
                rules.push(id);
            }
        }
        for id in extra {
            rules.push(id);
        }
        rules
    }

    fn push(&mut self, id: &str) {
        let id = id.trim();
        if id.is_empty() || self.contains(id) {
            return;
        }
        self.0.push(id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|r| r == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The single `--disabled_rules=a,b,c` argument.
    pub fn to_arg(&self) -> String {
        format!("--disabled_rules={}", self.0.join(","))
    }
}
