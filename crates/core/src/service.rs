//! The calculator service: arithmetic plus a mutex-guarded history.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::CalcError;
use crate::history::{
    HistoryBuffer, HistoryItem, DEFAULT_HISTORY_LIMIT, HISTORY_CAPACITY, MAX_HISTORY_LIMIT,
};
use crate::operation::{CalcRequest, Operation};
use crate::{HEALTH_OK, HISTORY_CLEARED};

/// Performs calculations and owns the history of completed ones.
///
/// Every read and write of the history goes through one mutex, so a
/// `calculate` call's append-and-evict is a single step as seen by any
/// concurrent `list_history` or `clear_history`. Share it behind an `Arc`.
#[derive(Debug)]
pub struct Calculator {
    history: Mutex<HistoryBuffer>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator with an empty history of [`HISTORY_CAPACITY`] records.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Calculator {
            history: Mutex::new(HistoryBuffer::with_capacity(capacity)),
        }
    }

    /// Fixed liveness indicator.
    pub fn health(&self) -> &'static str {
        HEALTH_OK
    }

    /// Compute `a op b`, record it, and return the new record.
    ///
    /// Fails without touching the history when the operation is rejected.
    pub fn calculate(&self, a: f64, b: f64, op: Operation) -> Result<HistoryItem, CalcError> {
        let result = op.apply(a, b).inspect_err(|e| {
            debug!(a, b, op = %op, error = %e, "calculation rejected");
        })?;
        let item = HistoryItem::new(a, b, op, result);

        let mut history = self.lock();
        let evicted = history.push(item.clone());
        debug!(
            id = %item.id,
            a,
            b,
            op = %op,
            result,
            len = history.len(),
            evicted,
            "calculation recorded"
        );
        Ok(item)
    }

    pub fn calculate_request(&self, request: &CalcRequest) -> Result<HistoryItem, CalcError> {
        self.calculate(request.a, request.b, request.op)
    }

    /// The most recent `limit` records, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`] and must lie in
    /// `1..=MAX_HISTORY_LIMIT`.
    pub fn list_history(&self, limit: Option<i64>) -> Result<Vec<HistoryItem>, CalcError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            debug!(limit, "history limit rejected");
            return Err(CalcError::LimitOutOfRange(limit));
        }
        let limit = usize::try_from(limit).map_err(|_| CalcError::LimitOutOfRange(limit))?;
        Ok(self.lock().latest(limit))
    }

    /// Drop every record. Always succeeds.
    pub fn clear_history(&self) -> &'static str {
        let mut history = self.lock();
        let dropped = history.len();
        history.clear();
        debug!(dropped, "history cleared");
        HISTORY_CLEARED
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    // The buffer re-establishes its bound on every push, so contents left
    // behind by a panicking holder are still valid.
    fn lock(&self) -> MutexGuard<'_, HistoryBuffer> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
