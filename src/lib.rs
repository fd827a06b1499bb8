//! # Lucene Query Builder
//!
//! Composable, validated builders for Lucene query strings.
//!
//! ## Features
//!
//! - Terms and phrases with reserved-character escaping
//! - Field scoping, boolean combinators and grouping
//! - Ranges, fuzzy, proximity, boost and required-term modifiers
//! - Argument validation with precise, attributable errors
//! - Query templates parameterised over application data
//! - Name-based dispatch for dynamically typed input
//!
//! ```
//! use lucene_query_builder::query::*;
//!
//! let query = and(&[
//!     field("title", &terms("rust (book)")),
//!     field("year", &range("2015", "2020", true, true)),
//!     boost(&fuzzy("ownership", Some(0.8))?, 2)?,
//! ]);
//! assert_eq!(
//!     query,
//!     r#"title: "rust \(book\)" AND year: [ 2015 TO 2020 ] AND ownership~0.8^2"#
//! );
//! # Ok::<(), lucene_query_builder::QueryBuilderError>(())
//! ```
pub mod builder;
mod data;
pub mod error;
pub mod escape;
pub mod query;
pub mod registry;
pub mod validation;

// Re-exports for the public API
pub use builder::{TemplateFn, builder, builder_from_arg};
pub use data::Arg;
pub use error::{ErrorKind, QueryBuilderError, Result};
pub use escape::{EscapeConfig, Escaper, LuceneEscaper, escape_special_characters};
pub use registry::{Primitive, call};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
