use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token (empty for `Eof` and `Invalid`)
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Creates the end-of-input marker at the given position
    pub fn eof(line: usize, column: usize) -> Self {
        Token::new(TokenKind::Eof, String::new(), line, column)
    }

    /// Returns true if this is the end-of-input marker
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// All possible token types in Minicalc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal digits (evaluated as a double)
    Number,

    // Identifiers
    /// Variable name
    Identifier,

    // Keywords
    /// IF keyword (reserved, no statement form)
    If,
    /// ELSE keyword (reserved, no statement form)
    Else,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,
    /// Assignment operator (=)
    Assign,

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Semicolon statement terminator
    Semicolon,

    // Special
    /// Unrecognized character
    Invalid,
    /// End of input marker
    Eof,
}

impl TokenKind {
    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::If | TokenKind::Else)
    }

    /// Single-character operator or delimiter for `c`, if any
    pub fn symbol(c: char) -> Option<TokenKind> {
        match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '=' => Some(TokenKind::Assign),
            ';' => Some(TokenKind::Semicolon),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Invalid => write!(f, "invalid character"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::If.is_keyword());
        assert!(TokenKind::Else.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Number.is_keyword());
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(TokenKind::symbol('+'), Some(TokenKind::Plus));
        assert_eq!(TokenKind::symbol(';'), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::symbol('='), Some(TokenKind::Assign));
        assert_eq!(TokenKind::symbol('$'), None);
        assert_eq!(TokenKind::symbol('%'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
        assert_eq!(TokenKind::RightParen.to_string(), "')'");
    }
}
