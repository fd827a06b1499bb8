//! Typed query primitives.
//!
//! Each primitive is a pure function that returns a query fragment: a string
//! that can be used as a final query or passed to another primitive. Text and
//! fragment arguments are checked by the type system, so only primitives with
//! numeric bounds return a [`Result`](crate::error::Result).
//!
//! ```
//! use lucene_query_builder::query::*;
//!
//! let query = field(
//!     "eye-color",
//!     &group(&[or(&[terms("brown"), terms("hazel")])]),
//! );
//! assert_eq!(query, r#"eye-color: ( "brown" OR "hazel" )"#);
//! ```

pub mod boolean;
pub mod boost;
pub mod fuzzy;
pub mod group;
pub mod proximity;
pub mod range;
pub mod term;

pub use boolean::{Operator, and, not, or};
pub use boost::boost;
pub use fuzzy::fuzzy;
pub use group::{Surrounder, group};
pub use proximity::proximity;
pub use range::range;
pub use term::{field, phrase, required, term, terms, terms_with};
