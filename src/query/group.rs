//! Delimited grouping of fragments.

/// Wraps fragments in an open/close delimiter pair: `<open> a b c <close>`.
///
/// Fragments are joined by single spaces and no operator is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surrounder {
    open: &'static str,
    close: &'static str,
}

impl Surrounder {
    /// Parentheses, as used by [`group`].
    pub const PARENTHESES: Surrounder = Surrounder::new("(", ")");

    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Surrounder { open, close }
    }

    pub fn open(&self) -> &'static str {
        self.open
    }

    pub fn close(&self) -> &'static str {
        self.close
    }

    pub fn surround<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        let inner = fragments
            .iter()
            .map(|fragment| fragment.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        format!("{} {} {}", self.open, inner, self.close)
    }
}

/// Group fragments in parentheses: `( a b c )`.
pub fn group<S: AsRef<str>>(fragments: &[S]) -> String {
    Surrounder::PARENTHESES.surround(fragments)
}
