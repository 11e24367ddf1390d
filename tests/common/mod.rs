// Common test utilities shared across test files

use std_uri_template::{Substitutions, Value};

/// Build a substitution mapping from name/value pairs
#[allow(dead_code)]
pub fn vars<I, V>(pairs: I) -> Substitutions
where
    I: IntoIterator<Item = (&'static str, V)>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.into()))
        .collect()
}

/// Install a tracing subscriber once, honouring RUST_LOG
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
