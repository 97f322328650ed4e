//! # Minicalc - A Small Expression Interpreter
//!
//! Minicalc reads source text, breaks it into tokens, parses arithmetic
//! expressions and assignment statements with conventional precedence, and
//! evaluates them against an in-memory symbol table. All arithmetic is
//! double-precision floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use minicalc::{evaluate, Event};
//!
//! # fn main() -> minicalc::Result<()> {
//! let events = evaluate("x = 5; x + 1;")?;
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::Assigned { name: "x".to_string(), value: 5.0 },
//!         Event::Evaluated { value: 6.0 },
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving the pipeline by hand
//!
//! ```rust
//! use minicalc::{Event, Lexer, Parser};
//!
//! # fn main() -> minicalc::Result<()> {
//! let mut parser = Parser::new(Lexer::new("2 + 3 * 4"));
//! let mut events = Vec::new();
//! parser.run(&mut events)?;
//!
//! assert_eq!(events, vec![Event::Evaluated { value: 14.0 }]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Numbers**: integer literals only (`42`), evaluated as `f64`
//! - **Operators**: `+ - * /` with `*`/`/` binding tighter, all left-associative
//! - **Grouping**: `( ... )`
//! - **Assignment**: `name = expression;` (the `;` is required)
//! - **Expression statements**: `expression` with an optional trailing `;`
//! - **Reserved words**: `if` and `else` are lexed as keywords but no
//!   statement accepts them
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Lexer → Token (one lookahead) → Parser/Evaluator → Event
//!                                                      ↕
//!                                                 SymbolTable
//! ```
//!
//! - [`Lexer`] - Produces tokens on demand
//! - [`Parser`] - Recursive descent parser that evaluates as it parses
//! - [`SymbolTable`] - Variable storage
//! - [`Event`] - Outcome of each statement
//! - [`Interpreter`] - Session that keeps variables across sources
//!
//! ## Error Handling
//!
//! The first error aborts the run. Statements executed before it keep their
//! effects.
//!
//! ```rust
//! use minicalc::{Error, Interpreter};
//!
//! let mut interpreter = Interpreter::new();
//! let err = interpreter.evaluate("a = 1; a / 0").unwrap_err();
//!
//! assert_eq!(err, Error::DivisionByZero);
//! assert_eq!(interpreter.symbols().lookup("a"), Some(1.0));
//! ```

/// Version of the Minicalc interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use interpreter::Interpreter;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Event, EventSink, Parser};
pub use runtime::SymbolTable;

/// Runs `source` in a fresh session and collects its events
pub fn evaluate(source: &str) -> Result<Vec<Event>> {
    Interpreter::new().evaluate(source)
}
