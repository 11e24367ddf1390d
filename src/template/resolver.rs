// Template expansion driver

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::Result;
use crate::value::Variables;

use super::ast::Segment;
use super::operator::Operator;
use super::renderer::Renderer;
use super::scanner::Scanner;

/// Expands templates against substitution mappings.
///
/// Holds no state between calls other than the diagnostic sink, so one
/// expander can be shared across threads.
pub struct Expander {
    sink: Box<dyn DiagnosticSink>,
}

impl Expander {
    pub fn new() -> Self {
        Self {
            sink: Box::new(NoopSink),
        }
    }

    pub fn with_sink(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Expand `template` with the values in `vars`.
    ///
    /// Variables missing from `vars` are elided. Any error aborts the whole
    /// expansion and no output is returned.
    pub fn expand<V: Variables + ?Sized>(&self, template: &str, vars: &V) -> Result<String> {
        self.sink.trace(format_args!("expanding template: {}", template));

        let segments = Scanner::scan(template)?;
        let mut result = String::with_capacity(template.len());

        for segment in &segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Expression(specifiers) => {
                    result.push_str(&self.expand_group(specifiers, vars)?);
                }
            }
        }

        Ok(result)
    }

    /// Expand one `{...}` group of raw specifiers.
    pub fn expand_group<V: Variables + ?Sized>(
        &self,
        specifiers: &[String],
        vars: &V,
    ) -> Result<String> {
        let mut result = String::new();
        let Some(first) = specifiers.first() else {
            return Ok(result);
        };

        // The first specifier picks the operator for the whole group
        let (operator, _) = Operator::resolve(first)?;
        let mut emitted = false;

        for raw in specifiers {
            let (_, spec) = Operator::resolve(raw)?;
            self.sink
                .trace(format_args!("{:?} -> specifier: {}", operator, raw));

            let Some(value) = vars.lookup(&spec.name) else {
                continue;
            };
            self.sink
                .trace(format_args!("value for {} is {}: {:?}", spec.name, value.kind(), value));

            if emitted {
                result.push(operator.separator());
            } else {
                result.push_str(operator.prefix());
                emitted = true;
            }
            result.push_str(&Renderer::new(operator, &spec).render(value));
        }

        Ok(result)
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new()
    }
}
