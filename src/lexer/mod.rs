//! Lexical analysis for Minicalc
//!
//! Converts source text into a lazy stream of tokens.

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind};
