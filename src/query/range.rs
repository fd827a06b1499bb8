//! Range primitive: `[ from TO to ]` with per-side inclusivity.

use crate::query::group::Surrounder;

/// Build a range over `from`..`to`.
///
/// Each side is exclusive (`{` / `}`) unless its flag is set, in which case
/// it is inclusive (`[` / `]`).
pub fn range(from: &str, to: &str, include_left: bool, include_right: bool) -> String {
    let open = if include_left { "[" } else { "{" };
    let close = if include_right { "]" } else { "}" };
    Surrounder::new(open, close).surround(&[from, "TO", to])
}
