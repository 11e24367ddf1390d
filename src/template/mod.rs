// Template module for RFC 6570 URI template expansion
//
// Scanning splits a template into literals and expressions, operators pick
// prefix/separator/encoding rules, and the renderer turns each value into text.

mod ast;
mod operator;
mod renderer;
mod resolver;
mod scanner;

pub use ast::{Segment, VariableSpec};
pub use operator::Operator;
pub use renderer::{encode, truncate, Renderer};
pub use resolver::Expander;
pub use scanner::Scanner;
