//! Name-based dispatch over the exported primitives.
//!
//! Host applications that assemble queries from untyped input (a JSON
//! payload, a scripting bridge) call primitives by name with [`Arg`]
//! values. Every argument is validated before the typed primitive runs, so
//! a missing or mistyped argument fails with a type error instead of
//! producing malformed query text.
//!
//! Only fragment-producing primitives are dispatched here. `builder` returns
//! a callable rather than a fragment, so its dynamic form is
//! [`builder_from_arg`](crate::builder::builder_from_arg); calling it by name
//! fails with [`QueryBuilderError::UnknownPrimitive`].
//!
//! ```
//! use lucene_query_builder::Arg;
//! use lucene_query_builder::registry::call;
//!
//! let args = [Arg::from("hello"), Arg::from("world"), Arg::from(10)];
//! assert_eq!(call("proximity", &args).unwrap(), r#""hello world"~10"#);
//!
//! let err = call("proximity", &[Arg::from("lucene")]).unwrap_err();
//! assert!(err.is_type_error());
//! ```

use std::fmt;

use crate::data::Arg;
use crate::error::{QueryBuilderError, Result};
use crate::query;
use crate::validation::{MAX_SAFE_INTEGER, Param, assert_range, assert_string};

/// The primitives exported by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Terms,
    Field,
    Or,
    And,
    Not,
    Group,
    Range,
    Fuzzy,
    Proximity,
    Boost,
    Required,
}

impl Primitive {
    pub const ALL: [Primitive; 11] = [
        Primitive::Terms,
        Primitive::Field,
        Primitive::Or,
        Primitive::And,
        Primitive::Not,
        Primitive::Group,
        Primitive::Range,
        Primitive::Fuzzy,
        Primitive::Proximity,
        Primitive::Boost,
        Primitive::Required,
    ];

    /// Canonical exported name.
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Terms => "terms",
            Primitive::Field => "field",
            Primitive::Or => "or",
            Primitive::And => "and",
            Primitive::Not => "not",
            Primitive::Group => "group",
            Primitive::Range => "range",
            Primitive::Fuzzy => "fuzzy",
            Primitive::Proximity => "proximity",
            Primitive::Boost => "boost",
            Primitive::Required => "required",
        }
    }

    /// Alternative names resolving to the same primitive.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Primitive::Terms => &["term", "phrase"],
            _ => &[],
        }
    }

    /// Minimum and maximum number of arguments; `None` means variadic.
    pub fn arity(&self) -> (usize, Option<usize>) {
        match self {
            Primitive::Terms | Primitive::Required => (1, Some(1)),
            Primitive::Field | Primitive::Boost => (2, Some(2)),
            Primitive::Or | Primitive::And | Primitive::Not | Primitive::Group => (0, None),
            Primitive::Range => (2, Some(4)),
            Primitive::Fuzzy => (1, Some(2)),
            Primitive::Proximity => (3, Some(3)),
        }
    }

    /// Resolve a canonical name or alias.
    pub fn from_name(name: &str) -> Option<Primitive> {
        Primitive::ALL
            .into_iter()
            .find(|p| p.name() == name || p.aliases().iter().any(|alias| *alias == name))
    }

    /// Validate `args` and build the fragment.
    pub fn call(&self, args: &[Arg]) -> Result<String> {
        if let (_, Some(max)) = self.arity()
            && args.len() > max
        {
            log::debug!(
                "Ignoring {} surplus argument(s) passed to {}",
                args.len() - max,
                self.name()
            );
        }

        match self {
            Primitive::Terms => {
                let text = assert_string(args.first(), Param::new("text", 0))?;
                Ok(query::terms(text))
            }
            Primitive::Field => {
                let name = assert_string(args.first(), Param::new("name", 0))?;
                let fragment = assert_string(args.get(1), Param::new("fragment", 1))?;
                Ok(query::field(name, fragment))
            }
            Primitive::Or => Ok(query::or(&fragments(args)?)),
            Primitive::And => Ok(query::and(&fragments(args)?)),
            Primitive::Not => Ok(query::not(&fragments(args)?)),
            Primitive::Group => Ok(query::group(&fragments(args)?)),
            Primitive::Range => {
                let from = assert_string(args.first(), Param::new("from", 0))?;
                let to = assert_string(args.get(1), Param::new("to", 1))?;
                let include_left = args.get(2).is_some_and(Arg::is_truthy);
                let include_right = args.get(3).is_some_and(Arg::is_truthy);
                Ok(query::range(from, to, include_left, include_right))
            }
            Primitive::Fuzzy => {
                let term = assert_string(args.first(), Param::new("term", 0))?;
                let similarity = match args.get(1) {
                    None => None,
                    Some(arg) if arg.is_null() => None,
                    value => Some(assert_range(
                        0.0,
                        1.0,
                        value,
                        Param::new("similarity", 1),
                    )?),
                };
                query::fuzzy(term, similarity)
            }
            Primitive::Proximity => {
                let first = assert_string(args.first(), Param::new("first", 0))?;
                let second = assert_string(args.get(1), Param::new("second", 1))?;
                let distance = assert_range(
                    0.0,
                    MAX_SAFE_INTEGER,
                    args.get(2),
                    Param::new("distance", 2),
                )?;
                query::proximity(first, second, distance)
            }
            Primitive::Boost => {
                let term = assert_string(args.first(), Param::new("term", 0))?;
                let boost = assert_range(
                    1.0,
                    MAX_SAFE_INTEGER,
                    args.get(1),
                    Param::new("boost", 1),
                )?;
                query::boost(term, boost)
            }
            Primitive::Required => {
                let term = assert_string(args.first(), Param::new("term", 0))?;
                Ok(query::required(term))
            }
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn fragments(args: &[Arg]) -> Result<Vec<&str>> {
    args.iter()
        .enumerate()
        .map(|(index, arg)| assert_string(Some(arg), Param::new("fragments", index)))
        .collect()
}

/// Call the primitive exported as `name` with dynamically typed arguments.
pub fn call(name: &str, args: &[Arg]) -> Result<String> {
    let primitive = Primitive::from_name(name).ok_or_else(|| {
        log::debug!("Rejected call to unknown primitive {:?}", name);
        QueryBuilderError::unknown_primitive(name)
    })?;

    log::trace!("Dispatching {} with {} argument(s)", primitive, args.len());
    primitive.call(args).inspect_err(|e| {
        log::debug!("{} rejected its arguments: {}", primitive, e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn text(s: &str) -> Arg {
        Arg::from(s)
    }

    #[test]
    fn test_from_name_resolves_aliases() {
        assert_eq!(Primitive::from_name("terms"), Some(Primitive::Terms));
        assert_eq!(Primitive::from_name("term"), Some(Primitive::Terms));
        assert_eq!(Primitive::from_name("phrase"), Some(Primitive::Terms));
        assert_eq!(Primitive::from_name("boost"), Some(Primitive::Boost));
        assert_eq!(Primitive::from_name("wildcard"), None);
    }

    #[test]
    fn test_every_primitive_resolves_by_its_own_name() {
        for primitive in Primitive::ALL {
            assert_eq!(Primitive::from_name(primitive.name()), Some(primitive));
        }
    }

    #[test]
    fn test_builder_is_not_dispatched_by_name() {
        assert_eq!(Primitive::from_name("builder"), None);

        let template = Arg::function(|_| Ok("q".to_string()));
        let err = call("builder", &[template.clone()]).unwrap_err();
        assert_eq!(err, QueryBuilderError::UnknownPrimitive("builder".to_string()));

        let Ok(wrapped) = crate::builder::builder_from_arg(Some(&template)) else {
            panic!("expected a template");
        };
        assert_eq!(wrapped(&serde_json::Value::Null).unwrap(), "q");
    }

    #[test]
    fn test_unknown_primitive() {
        let err = call("wildcard", &[text("a*")]).unwrap_err();
        assert_eq!(err, QueryBuilderError::UnknownPrimitive("wildcard".to_string()));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_terms_requires_text() {
        assert_eq!(call("term", &[text("a(b)")]).unwrap(), r#""a\(b\)""#);
        assert!(call("terms", &[Arg::Number(1.0)]).unwrap_err().is_type_error());
        assert!(call("terms", &[]).unwrap_err().is_type_error());
    }

    #[test]
    fn test_combinators_validate_each_fragment() {
        let args = [text("a"), text("b"), text("c")];
        assert_eq!(call("or", &args).unwrap(), "a OR b OR c");
        assert_eq!(call("group", &args).unwrap(), "( a b c )");
        assert_eq!(call("and", &[]).unwrap(), "");

        let err = call("and", &[text("a"), Arg::Bool(true)]).unwrap_err();
        assert!(err.is_type_error());
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_range_flags_use_truthiness() {
        assert_eq!(call("range", &[text("a"), text("b")]).unwrap(), "{ a TO b }");
        assert_eq!(
            call("range", &[text("a"), text("b"), Arg::Number(1.0)]).unwrap(),
            "[ a TO b }"
        );
        assert_eq!(
            call("range", &[text("a"), text("b"), Arg::Null, text("yes")]).unwrap(),
            "{ a TO b ]"
        );
    }

    #[test]
    fn test_range_names_each_bound() {
        let err = call("range", &[text("a"), Arg::Number(2.0)]).unwrap_err();
        assert!(err.to_string().contains("`to`"));

        let err = call("range", &[Arg::Null, text("b")]).unwrap_err();
        assert!(err.to_string().contains("`from`"));
    }

    #[test]
    fn test_fuzzy_treats_null_as_absent() {
        assert_eq!(call("fuzzy", &[text("hello")]).unwrap(), "hello~");
        assert_eq!(call("fuzzy", &[text("hello"), Arg::Null]).unwrap(), "hello~");
        assert_eq!(call("fuzzy", &[text("hello"), Arg::Number(0.0)]).unwrap(), "hello~0");

        let err = call("fuzzy", &[text("hello"), Arg::Number(200.0)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = call("fuzzy", &[text("hello"), text("0.5")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_proximity_missing_arguments() {
        let err = call("proximity", &[text("lucene")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("`second`"));

        let err = call("proximity", &[text("lucene"), text("hello")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("`distance`"));
    }

    #[test]
    fn test_proximity_range() {
        let err = call(
            "proximity",
            &[text("lucene"), text("hello"), Arg::Number(f64::INFINITY)],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = call("proximity", &[text("lucene"), text("hello"), Arg::Number(-2.0)])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_surplus_arguments_are_ignored() {
        assert_eq!(call("required", &[text("a"), text("b")]).unwrap(), "+a");
        assert_eq!(
            call("boost", &[text("a"), Arg::Number(2.0), Arg::Null]).unwrap(),
            "a^2"
        );
    }

    #[test]
    fn test_field_and_boost_types() {
        assert_eq!(call("field", &[text("f"), text("x")]).unwrap(), "f: x");
        assert!(call("field", &[text("f")]).unwrap_err().is_type_error());
        assert!(call("boost", &[text("a"), text("2")]).unwrap_err().is_type_error());
        assert_eq!(
            call("boost", &[text("a"), Arg::Number(0.0)]).unwrap_err().kind(),
            ErrorKind::Range
        );
    }
}
