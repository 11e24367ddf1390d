// Template scanner: splits a template into literal text and expressions

use crate::error::{ExpandError, Result};

use super::ast::Segment;

pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

/// Expression being captured, with the position of its opening brace.
struct OpenExpression {
    start: usize,
    specifiers: Vec<String>,
    current: String,
}

impl<'a> Scanner<'a> {
    pub fn scan(template: &'a str) -> Result<Vec<Segment>> {
        let mut scanner = Self {
            input: template,
            pos: 0,
        };
        scanner.scan_template()
    }

    fn scan_template(&mut self) -> Result<Vec<Segment>> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let mut open: Option<OpenExpression> = None;

        while let Some(ch) = self.peek_char() {
            let position = self.pos;
            self.pos += ch.len_utf8();

            match ch {
                '{' => {
                    // Flush literal buffer before the expression
                    if !literal_buf.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal_buf)));
                    }
                    // A nested '{' restarts capture
                    open = Some(OpenExpression {
                        start: position,
                        specifiers: Vec::new(),
                        current: String::new(),
                    });
                }
                '}' => match open.take() {
                    Some(mut expr) => {
                        expr.specifiers.push(expr.current);
                        segments.push(Segment::Expression(expr.specifiers));
                    }
                    None => return Err(ExpandError::UnmatchedClosingBrace { position }),
                },
                _ => match open.as_mut() {
                    Some(expr) if ch == ',' => {
                        expr.specifiers.push(std::mem::take(&mut expr.current));
                    }
                    Some(expr) => expr.current.push(ch),
                    None => literal_buf.push(ch),
                },
            }
        }

        if let Some(expr) = open {
            return Err(ExpandError::UnterminatedExpression {
                position: expr.start,
            });
        }

        if !literal_buf.is_empty() {
            segments.push(Segment::Literal(literal_buf));
        }

        Ok(segments)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}
