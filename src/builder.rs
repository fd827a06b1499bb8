//! Query templates parameterised over host data.
//!
//! A template is a function from the application's data to a query
//! fragment. [`builder`] wraps such a function without changing its
//! behaviour; it is the entry point applications use to declare their
//! query shapes.
//!
//! ```
//! use lucene_query_builder::builder;
//! use lucene_query_builder::query::{and, field, terms};
//!
//! struct User {
//!     name: String,
//!     city: String,
//! }
//!
//! let find_user = builder(|user: &User| {
//!     and(&[field("name", &terms(&user.name)), field("city", &terms(&user.city))])
//! });
//!
//! let user = User { name: "ada".to_string(), city: "london".to_string() };
//! let query = find_user(&user);
//! assert_eq!(query, r#"name: "ada" AND city: "london""#);
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::data::Arg;
use crate::error::Result;
use crate::validation::{Param, assert_function};

/// A type-erased template over a JSON payload.
pub type TemplateFn = Arc<dyn Fn(&Value) -> Result<String> + Send + Sync>;

const TEMPLATE: Param = Param::new("template", 0);

/// Wrap `template` into a callable with the same signature.
///
/// The returned callable invokes `template` with the supplied data and
/// returns its result unchanged.
pub fn builder<D, R, F>(template: F) -> impl Fn(&D) -> R
where
    D: ?Sized,
    F: Fn(&D) -> R,
{
    move |data: &D| template(data)
}

/// Dynamic counterpart of [`builder`] for templates held in an [`Arg`].
///
/// Fails with a type error unless `value` is an [`Arg::Function`].
pub fn builder_from_arg(value: Option<&Arg>) -> Result<TemplateFn> {
    let template = assert_function(value, TEMPLATE)?;
    log::trace!("Wrapping dynamic query template");
    Ok(Arc::new(move |data: &Value| template(data)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;
    use crate::query::{field, or, proximity, terms};

    #[test]
    fn test_builder_returns_template_result_unchanged() {
        let template = |data: &Value| {
            let names: Vec<String> = data["names"]
                .as_array()
                .map(|names| {
                    names
                        .iter()
                        .filter_map(Value::as_str)
                        .map(terms)
                        .collect()
                })
                .unwrap_or_default();
            field("name", &or(&names))
        };
        let data = json!({"names": ["ada", "grace"]});

        let wrapped = builder(template);
        assert_eq!(wrapped(&data), template(&data));
        assert_eq!(wrapped(&data), r#"name: "ada" OR "grace""#);
    }

    #[test]
    fn test_builder_propagates_errors() {
        let wrapped = builder(|distance: &f64| proximity("a", "b", *distance));
        assert_eq!(wrapped(&3.0).unwrap(), r#""a b"~3"#);
        assert_eq!(wrapped(&-3.0).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_builder_over_unsized_data() {
        let wrapped = builder(|text: &str| terms(text));
        assert_eq!(wrapped("hi"), r#""hi""#);
    }

    #[test]
    fn test_builder_from_arg() {
        let arg = Arg::function(|data| Ok(terms(data["q"].as_str().unwrap_or_default())));
        let template = builder_from_arg(Some(&arg)).unwrap();
        assert_eq!(template(&json!({"q": "x"})).unwrap(), r#""x""#);
    }

    #[test]
    fn test_builder_from_arg_rejects_non_callable() {
        let Err(err) = builder_from_arg(Some(&Arg::from("not a function"))) else {
            panic!("expected a type error");
        };
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("template"));

        assert!(builder_from_arg(None).is_err());
    }
}
