//! Argument assertions shared by every query primitive.
//!
//! The routines here run before any formatting happens and either hand back
//! the validated value or raise a [`QueryBuilderError`]. They never log and
//! never mutate anything.

use crate::builder::TemplateFn;
use crate::data::Arg;
use crate::error::{QueryBuilderError, Result};

/// Largest integer magnitude an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Names an argument of a primitive and its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub index: usize,
}

impl Param {
    pub const fn new(name: &'static str, index: usize) -> Self {
        Param { name, index }
    }

    /// 1-based position as reported in error messages.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    fn type_error(&self, expected: &'static str, found: impl Into<String>) -> QueryBuilderError {
        QueryBuilderError::Type {
            argument: self.name.to_string(),
            position: self.position(),
            expected,
            found: found.into(),
        }
    }
}

fn found(value: Option<&Arg>) -> &'static str {
    value.map_or("nothing", Arg::type_name)
}

/// Assert that `value` is present and is text.
pub fn assert_string(value: Option<&Arg>, param: Param) -> Result<&str> {
    value
        .and_then(Arg::as_text)
        .ok_or_else(|| param.type_error("text", found(value)))
}

/// Assert that `value` is a number within `[min, max]`.
pub fn assert_range(min: f64, max: f64, value: Option<&Arg>, param: Param) -> Result<f64> {
    let number = value
        .and_then(Arg::as_number)
        .ok_or_else(|| param.type_error("a number", found(value)))?;
    check_range(min, max, number, param)
}

/// Check an already numeric value against `[min, max]` and the safe integer ceiling.
///
/// `NaN` is not a usable number and is rejected as a type error.
pub fn check_range(min: f64, max: f64, value: f64, param: Param) -> Result<f64> {
    if value.is_nan() {
        return Err(param.type_error("a number", "NaN"));
    }

    if value.abs() > MAX_SAFE_INTEGER {
        return Err(QueryBuilderError::UnsafeMagnitude {
            argument: param.name.to_string(),
            position: param.position(),
            value,
        });
    }

    if value < min || value > max {
        return Err(QueryBuilderError::Range {
            argument: param.name.to_string(),
            position: param.position(),
            min,
            max,
            value,
        });
    }

    Ok(value)
}

/// Assert that `value` is a callable query template.
pub fn assert_function(value: Option<&Arg>, param: Param) -> Result<TemplateFn> {
    value
        .and_then(Arg::as_function)
        .cloned()
        .ok_or_else(|| param.type_error("a function", found(value)))
}

/// Render a validated number as a query suffix.
///
/// Integral values print without a fractional part and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
