//! Tokenizer, operation table, and command parser for **ICN**, a tiny
//! whitespace-separated language for describing vector icons.
//!
//! This crate only turns text into commands. Interpreting them (pen state,
//! geometry, drawing) lives in `icn-engine`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Command`, `CommandList`, `Arg` |
//! | [`color`] | `parse_hex_color` |
//! | [`error`] | `Diagnostic` |
//! | [`lexer`] | `Lexer`, `Token`, `tokenize` |
//! | [`op`] | `Operation`, `ArgKind`, the keyword table |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use icn_lang::{Command, parse_str};
//!
//! let list = parse_str("w 2 c #ff0000 line 0 0 5 5");
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.commands()[0], Command::SetWidth { width: 2.0 });
//! assert!(list.diagnostics().is_empty());
//! ```
//!
//! Malformed input never fails the parse; it shows up as diagnostics:
//!
//! ```rust
//! let list = icn_lang::parse_str("bogus dot 1 1");
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.diagnostics().len(), 1);
//! ```

pub mod ast;
pub mod color;
pub mod error;
pub mod lexer;
pub mod op;
pub mod parser;

pub use ast::{Arg, Command, CommandList};
pub use color::parse_hex_color;
pub use error::Diagnostic;
pub use lexer::tokenize;
pub use op::{ArgKind, Operation};
pub use parser::parse_str;
