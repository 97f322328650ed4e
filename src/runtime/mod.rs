//! Runtime state for Minicalc programs

mod symbols;

pub use symbols::SymbolTable;
