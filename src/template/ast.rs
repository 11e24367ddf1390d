// Syntax types for URI templates

use crate::error::{ExpandError, Result};

/// One piece of a scanned template, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Raw variable specifiers found between one `{` ... `}` pair, split on commas.
    Expression(Vec<String>),
}

/// A single variable reference with its modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSpec {
    pub name: String,
    /// Prefix modifier (`:N`); `None` means unbounded.
    pub max_length: Option<usize>,
    /// Explode modifier (`*`).
    pub explode: bool,
}

impl VariableSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_length: None,
            explode: false,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    /// Parse a raw specifier whose operator character (if any) was already removed.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.contains(':') && raw.contains('*') {
            return Err(ExpandError::invalid_modifier(
                raw,
                "prefix length and explode cannot be combined",
            ));
        }

        let (working, max_length) = match raw.split_once(':') {
            Some((name, suffix)) => {
                let length = suffix.parse::<usize>().map_err(|_| {
                    ExpandError::invalid_modifier(
                        raw,
                        format!("'{}' is not a valid prefix length", suffix),
                    )
                })?;
                (name, Some(length))
            }
            None => (raw, None),
        };

        let (name, explode) = match working.find('*') {
            Some(idx) => (&working[..idx], true),
            None => (working, false),
        };

        Ok(Self {
            name: name.to_string(),
            max_length,
            explode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_name() {
        let spec = VariableSpec::parse("var").unwrap();
        assert_eq!(spec, VariableSpec::new("var"));
    }

    #[test]
    fn test_parse_prefix_length() {
        let spec = VariableSpec::parse("var:3").unwrap();
        assert_eq!(spec, VariableSpec::new("var").with_max_length(3));

        let spec = VariableSpec::parse("var:0").unwrap();
        assert_eq!(spec.max_length, Some(0));
    }

    #[test]
    fn test_parse_explode() {
        let spec = VariableSpec::parse("list*").unwrap();
        assert_eq!(spec, VariableSpec::new("list").with_explode(true));
    }

    #[test]
    fn test_parse_empty() {
        let spec = VariableSpec::parse("").unwrap();
        assert_eq!(spec.name, "");
        assert!(!spec.explode);
        assert!(spec.max_length.is_none());
    }

    #[test]
    fn test_parse_prefix_and_explode_fails() {
        for raw in ["var:3*", "var*:3"] {
            let err = VariableSpec::parse(raw).unwrap_err();
            assert!(matches!(err, ExpandError::InvalidModifier { .. }));
            assert!(err.to_string().contains("cannot be combined"));
        }
    }

    #[test]
    fn test_parse_bad_prefix_length_fails() {
        for raw in ["var:", "var:abc", "var:-1", "var:1.5"] {
            let err = VariableSpec::parse(raw).unwrap_err();
            assert!(
                matches!(err, ExpandError::InvalidModifier { .. }),
                "expected InvalidModifier for {raw}"
            );
        }
    }
}
