//! Application state shared across request handlers.

use calc_core::Calculator;

pub(crate) struct AppState {
    /// The calculator and its history. One instance per server.
    pub(crate) calculator: Calculator,
}

impl AppState {
    pub(crate) fn new(history_capacity: usize) -> Self {
        Self {
            calculator: Calculator::with_capacity(history_capacity),
        }
    }
}
