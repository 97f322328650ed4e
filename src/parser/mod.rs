//! Minicalc Parser Module
//!
//! Recursive descent over the token stream, evaluating each construct as it
//! is recognized. There is no intermediate syntax tree.

mod evaluator;
mod events;

pub use evaluator::{Parser, MAX_NESTING};
pub use events::{Event, EventSink};
