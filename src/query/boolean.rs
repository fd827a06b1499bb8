//! Boolean combinators joining fragments with an operator keyword.

use std::fmt;

/// Boolean operator keywords of the query grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Or,
    And,
    Not,
}

impl Operator {
    /// The literal keyword written between fragments.
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Or => "OR",
            Operator::And => "AND",
            Operator::Not => "NOT",
        }
    }

    /// Join `fragments` left to right with ` <KEYWORD> ` between each pair.
    ///
    /// No parentheses are added. An empty slice yields an empty string and a
    /// single fragment is returned as is.
    pub fn join<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        let separator = format!(" {} ", self.keyword());
        fragments
            .iter()
            .map(|fragment| fragment.as_ref())
            .collect::<Vec<&str>>()
            .join(&separator)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// `a OR b OR ...`
pub fn or<S: AsRef<str>>(fragments: &[S]) -> String {
    Operator::Or.join(fragments)
}

/// `a AND b AND ...`
pub fn and<S: AsRef<str>>(fragments: &[S]) -> String {
    Operator::And.join(fragments)
}

/// `a NOT b NOT ...`
pub fn not<S: AsRef<str>>(fragments: &[S]) -> String {
    Operator::Not.join(fragments)
}
