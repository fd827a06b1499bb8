//! Fuzzy primitive: `<term>~` or `<term>~<similarity>`.

use crate::error::Result;
use crate::validation::{Param, check_range, format_number};

const SIMILARITY: Param = Param::new("similarity", 1);

/// Mark a fragment as fuzzy.
///
/// Without a similarity the suffix is a bare `~`. A supplied similarity must
/// lie in `[0, 1]`; zero is a real value and renders as `~0`.
pub fn fuzzy(term: &str, similarity: Option<f64>) -> Result<String> {
    match similarity {
        None => Ok(format!("{}~", term)),
        Some(similarity) => {
            let similarity = check_range(0.0, 1.0, similarity, SIMILARITY)?;
            Ok(format!("{}~{}", term, format_number(similarity)))
        }
    }
}
