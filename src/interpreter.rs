//! Session facade that keeps variables alive across several sources

use crate::error::Result;
use crate::lexer::Lexer;
use crate::parser::{Event, EventSink, Parser};
use crate::runtime::SymbolTable;

/// Interpreter session
///
/// Each call to [`Interpreter::execute`] runs one source text against the
/// same symbol table, so assignments from earlier sources stay visible.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    symbols: SymbolTable,
}

impl Interpreter {
    /// Creates a session with no variables
    pub fn new() -> Self {
        Interpreter {
            symbols: SymbolTable::new(),
        }
    }

    /// Creates a session with predefined variables
    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Interpreter { symbols }
    }

    /// Runs `source`, reporting each statement to `sink`
    ///
    /// Assignments made before an error are kept.
    pub fn execute<S: EventSink + ?Sized>(&mut self, source: &str, sink: &mut S) -> Result<()> {
        let symbols = std::mem::take(&mut self.symbols);
        let mut parser = Parser::with_symbols(Lexer::new(source), symbols);

        let result = parser.run(sink);
        self.symbols = parser.into_symbols();

        if let Err(err) = &result {
            tracing::debug!(error = %err, "execution aborted");
        }
        result
    }

    /// Runs `source` and collects its events
    pub fn evaluate(&mut self, source: &str) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        self.execute(source, &mut events)?;
        Ok(events)
    }

    /// Variables bound so far
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}
