// Rendering of substitution values under an operator

use super::ast::VariableSpec;
use super::operator::Operator;
use crate::value::Value;

/// RFC 6570 reserved set, kept unencoded by `+` and `#`.
const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// Renders one variable's value using the group operator and its own spec.
pub struct Renderer<'a> {
    operator: Operator,
    spec: &'a VariableSpec,
}

impl<'a> Renderer<'a> {
    pub fn new(operator: Operator, spec: &'a VariableSpec) -> Self {
        Self { operator, spec }
    }

    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Scalar(text) => self.named(text),
            Value::List(items) if self.spec.explode => join(
                items.iter().map(|item| self.named(item)),
                self.operator.separator(),
            ),
            Value::List(items) => join(items.iter().map(|item| self.bare(item)), ','),
            Value::Associative(pairs) if self.spec.explode => join(
                pairs
                    .iter()
                    .map(|(key, val)| format!("{}={}", self.bare(key), self.bare(val))),
                self.operator.separator(),
            ),
            Value::Associative(pairs) => join(
                pairs
                    .iter()
                    .flat_map(|(key, val)| [self.bare(key), self.bare(val)]),
                ',',
            ),
        }
    }

    /// Truncated and encoded text, without any `name=` pairing.
    fn bare(&self, text: &str) -> String {
        encode(truncate(text, self.spec.max_length), self.operator.allows_reserved())
    }

    /// Full scalar rule, including `name=` pairing for named operators.
    fn named(&self, text: &str) -> String {
        let encoded = self.bare(text);
        if !self.operator.is_named() {
            return encoded;
        }
        if encoded.is_empty() && self.operator.omits_empty_value() {
            return self.spec.name.clone();
        }
        format!("{}={}", self.spec.name, encoded)
    }
}

fn join(parts: impl Iterator<Item = String>, separator: char) -> String {
    let mut result = String::new();
    for (i, part) in parts.enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.push_str(&part);
    }
    result
}

/// Keep at most `max_length` characters.
pub fn truncate(text: &str, max_length: Option<usize>) -> &str {
    match max_length {
        Some(max) => match text.char_indices().nth(max) {
            Some((idx, _)) => &text[..idx],
            None => text,
        },
        None => text,
    }
}

/// Percent-encode everything outside the unreserved set, and outside the
/// reserved set as well when `allow_reserved` is set.
pub fn encode(text: &str, allow_reserved: bool) -> String {
    if !allow_reserved {
        return urlencoding::encode(text).into_owned();
    }

    let mut result = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        if RESERVED.contains(ch) {
            result.push(ch);
        } else {
            result.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }
    result
}
