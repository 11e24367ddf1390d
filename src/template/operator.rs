// Expression operators and their expansion rules

use super::ast::VariableSpec;
use crate::error::Result;

/// The operator selected by the first character of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    None,
    Plus,
    Hash,
    Dot,
    Slash,
    Semicolon,
    QuestionMark,
    Ampersand,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Plus),
            '#' => Some(Operator::Hash),
            '.' => Some(Operator::Dot),
            '/' => Some(Operator::Slash),
            ';' => Some(Operator::Semicolon),
            '?' => Some(Operator::QuestionMark),
            '&' => Some(Operator::Ampersand),
            _ => None,
        }
    }

    /// Split a raw specifier into its operator and the parsed variable spec.
    ///
    /// Only the first character is inspected. When it is not an operator the
    /// whole text is the specifier.
    pub fn resolve(raw: &str) -> Result<(Operator, VariableSpec)> {
        let mut chars = raw.chars();
        match chars.next().and_then(Operator::from_char) {
            Some(op) => Ok((op, VariableSpec::parse(chars.as_str())?)),
            None => Ok((Operator::None, VariableSpec::parse(raw)?)),
        }
    }

    /// Emitted once before the first rendered variable of a group.
    pub fn prefix(&self) -> &'static str {
        match self {
            Operator::None | Operator::Plus => "",
            Operator::Hash => "#",
            Operator::Dot => ".",
            Operator::Slash => "/",
            Operator::Semicolon => ";",
            Operator::QuestionMark => "?",
            Operator::Ampersand => "&",
        }
    }

    /// Placed between rendered variables and between exploded elements.
    pub fn separator(&self) -> char {
        match self {
            Operator::None | Operator::Plus | Operator::Hash => ',',
            Operator::Dot => '.',
            Operator::Slash => '/',
            Operator::Semicolon => ';',
            Operator::QuestionMark | Operator::Ampersand => '&',
        }
    }

    /// Reserved characters are left as-is instead of percent-encoded.
    pub fn allows_reserved(&self) -> bool {
        matches!(self, Operator::Plus | Operator::Hash)
    }

    /// Values are rendered as `name=value`.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            Operator::Semicolon | Operator::QuestionMark | Operator::Ampersand
        )
    }

    /// An empty value renders as the bare name, without `=`.
    pub fn omits_empty_value(&self) -> bool {
        matches!(self, Operator::Semicolon)
    }
}
