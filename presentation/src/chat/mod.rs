//! Interactive chat module
//!
//! Provides a readline-based interactive loop over the resolution engine.

mod input;
mod repl;

pub use input::{ReplCommand, ReplInput, parse_input};
pub use repl::ChatRepl;
