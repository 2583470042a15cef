//! Argument table for process-invocation tokens.
//!
//! Raw tokens flow through a small, fixed pipeline:
//!
//! ```text
//! Raw tokens → Tokenize → Build table → Resolve negations → ArgTable → Accessors
//! ```
//!
//! Parsing never fails. Malformed input degrades to empty strings, zero or
//! the caller's default, and the first token that is not an option stops
//! parsing altogether.

mod shared;
mod table;
mod token;

pub use shared::SharedArgs;
pub use table::{parse_int, ArgTable};
pub use token::{normalize_name, tokenize, ParseOptions, Token};
