use std::mem;

use super::events::{Event, EventSink};
use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::runtime::SymbolTable;

/// Maximum nesting of parenthesized groups
pub const MAX_NESTING: usize = 256;

/// Recursive descent parser that evaluates as it parses
///
/// Grammar, lowest to highest precedence:
///
/// ```text
/// program       := statement* EOF
/// statement     := assignment | exprStatement
/// assignment    := IDENT '=' expression ';'
/// exprStatement := expression ';'?
/// expression    := term (('+' | '-') term)*
/// term          := factor (('*' | '/') factor)*
/// factor        := NUMBER | IDENT | '(' expression ')'
/// ```
///
/// The parser holds exactly one lookahead token and never backtracks. Each
/// statement takes effect before the next one is read, so a failure leaves
/// earlier assignments in place.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Token,
    symbols: SymbolTable,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser with an empty symbol table
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_symbols(lexer, SymbolTable::new())
    }

    /// Creates a parser that starts from existing bindings
    pub fn with_symbols(mut lexer: Lexer<'a>, symbols: SymbolTable) -> Self {
        let lookahead = lexer.next_token();
        Parser {
            lexer,
            lookahead,
            symbols,
            depth: 0,
        }
    }

    /// Executes every statement, reporting each to `sink` as it completes
    pub fn run<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        while let Some(event) = self.statement()? {
            sink.emit(event);
        }
        Ok(())
    }

    /// Executes a single statement; `None` once the input is exhausted
    pub fn statement(&mut self) -> Result<Option<Event>> {
        match self.lookahead.kind {
            TokenKind::Eof => Ok(None),
            TokenKind::Identifier => {
                let target = self.eat(TokenKind::Identifier)?;
                if self.lookahead.kind == TokenKind::Assign {
                    self.assignment(target).map(Some)
                } else {
                    // Not an assignment: the identifier is the first factor
                    let left = self.symbols.get(&target.lexeme)?;
                    let left = self.term_tail(left)?;
                    let value = self.expression_tail(left)?;
                    self.expression_statement(value).map(Some)
                }
            }
            _ => {
                let value = self.expression()?;
                self.expression_statement(value).map(Some)
            }
        }
    }

    /// Variables bound so far
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consumes the parser, returning its variables
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Current lookahead token
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// `'=' expression ';'` after the target identifier has been consumed
    fn assignment(&mut self, target: Token) -> Result<Event> {
        self.eat(TokenKind::Assign)?;
        let value = self.expression()?;
        self.eat(TokenKind::Semicolon)?;

        tracing::debug!(name = %target.lexeme, value, "assigned");
        self.symbols.assign(target.lexeme.clone(), value);

        Ok(Event::Assigned {
            name: target.lexeme,
            value,
        })
    }

    fn expression_statement(&mut self, value: f64) -> Result<Event> {
        if self.lookahead.kind == TokenKind::Semicolon {
            self.eat(TokenKind::Semicolon)?;
        }

        // Reject trailing garbage before the result is reported
        match self.lookahead.kind {
            TokenKind::Eof | TokenKind::Number | TokenKind::Identifier | TokenKind::LeftParen => {}
            _ => return Err(self.unexpected("';' or end of input")),
        }

        tracing::debug!(value, "evaluated");
        Ok(Event::Evaluated { value })
    }

    fn expression(&mut self) -> Result<f64> {
        let left = self.term()?;
        self.expression_tail(left)
    }

    fn expression_tail(&mut self, mut result: f64) -> Result<f64> {
        loop {
            match self.lookahead.kind {
                TokenKind::Plus => {
                    self.eat(TokenKind::Plus)?;
                    result += self.term()?;
                }
                TokenKind::Minus => {
                    self.eat(TokenKind::Minus)?;
                    result -= self.term()?;
                }
                _ => return Ok(result),
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let left = self.factor()?;
        self.term_tail(left)
    }

    fn term_tail(&mut self, mut result: f64) -> Result<f64> {
        loop {
            match self.lookahead.kind {
                TokenKind::Star => {
                    self.eat(TokenKind::Star)?;
                    result *= self.factor()?;
                }
                TokenKind::Slash => {
                    self.eat(TokenKind::Slash)?;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(Error::DivisionByZero);
                    }
                    result /= divisor;
                }
                _ => return Ok(result),
            }
        }
    }

    fn factor(&mut self) -> Result<f64> {
        match self.lookahead.kind {
            TokenKind::Number => {
                let token = self.eat(TokenKind::Number)?;
                token.lexeme.parse::<f64>().map_err(|_| Error::InvalidNumber {
                    text: token.lexeme.clone(),
                })
            }
            TokenKind::Identifier => {
                let token = self.eat(TokenKind::Identifier)?;
                self.symbols.get(&token.lexeme)
            }
            TokenKind::LeftParen => {
                let open = self.eat(TokenKind::LeftParen)?;
                if self.depth >= MAX_NESTING {
                    return Err(Error::syntax(
                        open.line,
                        open.column,
                        format!("expression nested deeper than {} levels", MAX_NESTING),
                    ));
                }

                self.depth += 1;
                let value = self.expression();
                self.depth -= 1;

                let value = value?;
                self.eat(TokenKind::RightParen)?;
                Ok(value)
            }
            _ => Err(self.unexpected("number, identifier or '('")),
        }
    }

    /// Consumes the lookahead if it has the expected kind
    fn eat(&mut self, expected: TokenKind) -> Result<Token> {
        if self.lookahead.kind != expected {
            return Err(self.unexpected(expected.to_string()));
        }

        let next = self.lexer.next_token();
        Ok(mem::replace(&mut self.lookahead, next))
    }

    fn unexpected(&self, expected: impl Into<String>) -> Error {
        let token = &self.lookahead;
        if token.kind == TokenKind::Invalid {
            return Error::LexicalError {
                line: token.line,
                column: token.column,
            };
        }

        let found = match token.kind {
            TokenKind::Number | TokenKind::Identifier => {
                format!("{} '{}'", token.kind, token.lexeme)
            }
            kind => kind.to_string(),
        };

        Error::UnexpectedToken {
            expected: expected.into(),
            found,
            line: token.line,
            column: token.column,
        }
    }
}
