// Error handling for std-uri-template

use thiserror::Error;

/// Errors that can occur while expanding a template.
///
/// Every variant is a caller-input error: the template or the substitution
/// data has to be fixed, nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The template ended while an expression was still open.
    #[error("Unterminated expression: '{{' at position {position} is never closed")]
    UnterminatedExpression { position: usize },

    /// A `}` was found outside of any expression.
    #[error("Unmatched closing brace at position {position}")]
    UnmatchedClosingBrace { position: usize },

    /// A variable specifier carries an invalid modifier.
    #[error("Invalid modifier in '{specifier}': {reason}")]
    InvalidModifier { specifier: String, reason: String },

    /// A substitution value is not a string, a list of strings or a map of strings.
    #[error(
        "Unsupported value type{}: found {found}, expected a string, a list of strings or an object of strings",
        .name.as_ref().map(|n| format!(" for '{}'", n)).unwrap_or_default()
    )]
    UnsupportedValueType {
        name: Option<String>,
        found: &'static str,
    },
}

impl ExpandError {
    pub(crate) fn invalid_modifier(specifier: &str, reason: impl Into<String>) -> Self {
        ExpandError::InvalidModifier {
            specifier: specifier.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpandError>;
