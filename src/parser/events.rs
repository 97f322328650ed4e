use serde::{Deserialize, Serialize};

/// Observable outcome of one executed statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// `name = value;` stored a value
    Assigned {
        /// Variable that was written
        name: String,
        /// Value written
        value: f64,
    },
    /// A bare expression produced a value
    Evaluated {
        /// Result of the expression
        value: f64,
    },
}

impl Event {
    /// Numeric value carried by the event
    pub fn value(&self) -> f64 {
        match self {
            Event::Assigned { value, .. } | Event::Evaluated { value } => *value,
        }
    }
}

/// Receiver for statement events, in program order
pub trait EventSink {
    /// Called once per executed statement
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}
