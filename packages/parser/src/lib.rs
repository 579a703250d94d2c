//! Boundary between Fluent resource text and the inference engine.
//!
//! Parsing itself is done by `fluent-syntax`; this crate only decides how
//! strict to be about recovered errors and how to report them.

pub mod error;
pub mod parser;

pub use error::{format_errors, ParseError, ParseErrors, ParseResult};
pub use fluent_syntax::ast;
pub use parser::{message_count, parse, parse_lenient};
