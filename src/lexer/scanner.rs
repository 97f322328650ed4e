use std::collections::HashMap;

use super::token::{Token, TokenKind};

/// Pull-based lexer over borrowed source text
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. The lexer never
/// fails: an unrecognized character becomes an [`TokenKind::Invalid`] token and
/// the parser decides what to do with it. Once the input is exhausted every
/// call returns [`TokenKind::Eof`] without moving the cursor.
pub struct Lexer<'a> {
    /// Source code (read-only)
    source: &'a str,
    /// Byte offset of the cursor
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Reserved words, built once per lexer
    keywords: HashMap<&'static str, TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`
    pub fn new(source: &'a str) -> Self {
        let keywords = HashMap::from([("if", TokenKind::If), ("else", TokenKind::Else)]);

        Lexer {
            source,
            current: 0,
            line: 1,
            column: 1,
            keywords,
        }
    }

    /// Returns the next token, advancing the cursor past it
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let start = self.current;

        let c = match self.advance() {
            Some(c) => c,
            None => return Token::eof(line, column),
        };

        let token = if c.is_alphabetic() || c == '_' {
            self.scan_identifier_or_keyword(start, line, column)
        } else if c.is_ascii_digit() {
            self.scan_number(start, line, column)
        } else if let Some(kind) = TokenKind::symbol(c) {
            Token::new(kind, &self.source[start..self.current], line, column)
        } else {
            tracing::trace!(character = %c, line, column, "unrecognized character");
            Token::new(TokenKind::Invalid, String::new(), line, column)
        };

        tracing::trace!(kind = ?token.kind, lexeme = %token.lexeme, "token");
        token
    }

    /// Collects every remaining token, including the trailing `Eof`
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.current
    }

    fn scan_identifier_or_keyword(&mut self, start: usize, line: usize, column: usize) -> Token {
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.source[start..self.current];
        let kind = self
            .keywords
            .get(text)
            .copied()
            .unwrap_or(TokenKind::Identifier);

        Token::new(kind, text, line, column)
    }

    fn scan_number(&mut self, start: usize, line: usize, column: usize) -> Token {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        Token::new(
            TokenKind::Number,
            &self.source[start..self.current],
            line,
            column,
        )
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
