//! RFC 6570 URI Template expansion, levels 1 through 4.
//!
//! ```
//! use std_uri_template::{expand, Substitutions, Value};
//!
//! let mut vars = Substitutions::new();
//! vars.insert("x".to_string(), Value::from("1024"));
//! vars.insert("y".to_string(), Value::from("768"));
//!
//! assert_eq!(expand("/map{?x,y}", &vars).unwrap(), "/map?x=1024&y=768");
//! ```

pub mod diagnostics;
pub mod error;
pub mod template;
pub mod value;

pub use diagnostics::{CollectingSink, DiagnosticSink, NoopSink, TracingSink};
pub use error::{ExpandError, Result};
pub use template::Expander;
pub use value::{substitutions_from_json, Substitutions, Value, Variables};

/// Expand `template` against `vars` with the default (silent) expander.
pub fn expand<V: Variables + ?Sized>(template: &str, vars: &V) -> Result<String> {
    Expander::new().expand(template, vars)
}

/// Expand `template` with substitutions given as a JSON object.
///
/// Strings are scalars, arrays of strings are lists and objects of strings are
/// associative values in member order. Any other JSON type is rejected.
pub fn expand_json(template: &str, vars: serde_json::Value) -> Result<String> {
    let vars = substitutions_from_json(vars)?;
    expand(template, &vars)
}
