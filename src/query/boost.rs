//! Boost primitive: `<term>^<boost>`.

use crate::error::Result;
use crate::validation::{MAX_SAFE_INTEGER, Param, check_range, format_number};

const BOOST: Param = Param::new("boost", 1);

/// Boost a fragment's relevance. `boost` must be at least 1.
pub fn boost(term: &str, boost: impl Into<f64>) -> Result<String> {
    let boost = check_range(1.0, MAX_SAFE_INTEGER, boost.into(), BOOST)?;
    Ok(format!("{}^{}", term, format_number(boost)))
}
