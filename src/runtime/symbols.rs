use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// Variable storage for a single interpreter session
///
/// Names are case-sensitive. Entries are created on first assignment and
/// overwritten afterwards; they are never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    variables: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty symbol table
    pub fn new() -> Self {
        SymbolTable {
            variables: HashMap::new(),
        }
    }

    /// Creates a symbol table with predefined bindings
    pub fn with_bindings<I, S>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        SymbolTable {
            variables: bindings
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Creates or overwrites a binding, returning the previous value
    pub fn assign(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variables.insert(name.into(), value)
    }

    /// Gets the value of a variable by name
    pub fn get(&self, name: &str) -> Result<f64> {
        self.lookup(name).ok_or_else(|| Error::UndefinedVariable {
            name: name.to_string(),
        })
    }

    /// Gets the value of a variable, if bound
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Checks if a variable is bound
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if nothing has been assigned
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over bindings in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns a name-ordered copy of all bindings
    pub fn snapshot(&self) -> BTreeMap<String, f64> {
        self.variables
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect()
    }
}
