//! Proximity primitive: `"<first> <second>"~<distance>`.

use crate::error::Result;
use crate::validation::{MAX_SAFE_INTEGER, Param, check_range, format_number};

const DISTANCE: Param = Param::new("distance", 2);

/// Require `first` and `second` to occur within `distance` positions of each other.
///
/// The two tokens are quoted as one phrase without escaping. `distance` must
/// be non-negative and no larger than [`MAX_SAFE_INTEGER`]; infinity is rejected.
pub fn proximity(first: &str, second: &str, distance: impl Into<f64>) -> Result<String> {
    let distance = check_range(0.0, MAX_SAFE_INTEGER, distance.into(), DISTANCE)?;
    Ok(format!(
        "\"{} {}\"~{}",
        first,
        second,
        format_number(distance)
    ))
}
