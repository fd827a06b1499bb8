//! Escaping of characters reserved by the query grammar.
//!
//! Term text is escaped before it is quoted; field names and already-built
//! fragments are never escaped again.

use std::fmt;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{QueryBuilderError, Result};

/// Characters reserved by the Lucene classic query parser.
pub const LUCENE_RESERVED_CHARACTERS: &str = r#"+-&|!(){}[]^"~*?:\/"#;

lazy_static! {
    static ref DEFAULT_ESCAPER: LuceneEscaper = LuceneEscaper::default();
}

/// Maps raw text to text in which every reserved character is preceded by a backslash.
///
/// Implementations must be deterministic and must leave non-reserved
/// characters untouched.
pub trait Escaper: Send + Sync + fmt::Debug {
    fn escape(&self, raw: &str) -> String;
}

/// Configuration for [`LuceneEscaper`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeConfig {
    /// Every character in this string is escaped with a backslash.
    pub reserved_characters: String,
}

impl EscapeConfig {
    /// Load a configuration from a JSON document.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            QueryBuilderError::invalid_config(format!("Failed to parse escape config: {}", e))
        })
    }

    /// Replace the reserved character set.
    pub fn with_reserved_characters(mut self, reserved: impl Into<String>) -> Self {
        self.reserved_characters = reserved.into();
        self
    }
}

impl Default for EscapeConfig {
    fn default() -> Self {
        EscapeConfig {
            reserved_characters: LUCENE_RESERVED_CHARACTERS.to_string(),
        }
    }
}

/// Backslash-escapes a configurable set of reserved characters.
#[derive(Debug, Clone)]
pub struct LuceneEscaper {
    config: EscapeConfig,
    /// `None` when the reserved set is empty.
    pattern: Option<Regex>,
}

impl LuceneEscaper {
    pub fn new(config: EscapeConfig) -> Result<Self> {
        let pattern = build_pattern(&config.reserved_characters)?;
        Ok(LuceneEscaper { config, pattern })
    }

    pub fn config(&self) -> &EscapeConfig {
        &self.config
    }
}

impl Default for LuceneEscaper {
    fn default() -> Self {
        LuceneEscaper {
            config: EscapeConfig::default(),
            // A fixed, fully escaped class always compiles.
            pattern: build_pattern(LUCENE_RESERVED_CHARACTERS).ok().flatten(),
        }
    }
}

impl Escaper for LuceneEscaper {
    fn escape(&self, raw: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(raw, |caps: &Captures| format!("\\{}", &caps[0]))
                .into_owned(),
            None => raw.to_string(),
        }
    }
}

/// Compile a character class matching any of `reserved`.
fn build_pattern(reserved: &str) -> Result<Option<Regex>> {
    if reserved.is_empty() {
        return Ok(None);
    }

    let class: String = reserved
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    let pattern = Regex::new(&format!("[{}]", class)).map_err(|e| {
        QueryBuilderError::invalid_config(format!("Invalid reserved characters: {}", e))
    })?;
    Ok(Some(pattern))
}

/// Escape `raw` with the default Lucene reserved character set.
pub fn escape_special_characters(raw: &str) -> String {
    DEFAULT_ESCAPER.escape(raw)
}
