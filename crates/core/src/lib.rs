//! calc-core: arithmetic calculator with a bounded in-memory history.
//!
//! The crate is framework-agnostic. It knows nothing about HTTP; callers
//! drive a [`Calculator`] directly and translate [`CalcError`] into whatever
//! transport they speak.
//!
//! # Public API
//!
//! - [`Calculator`] -- the service: calculate, list history, clear history
//! - [`Operation`] -- the closed set of operators (`+`, `-`, `*`, `/`)
//! - [`CalcRequest`] -- operands plus operator, as received from a caller
//! - [`HistoryItem`] -- immutable record of one completed calculation
//! - [`HistoryBuffer`] -- FIFO-evicting, capacity-bounded sequence of items
//! - [`CalcError`] -- validation failures, all of kind [`ErrorKind::InvalidArgument`]

/// Status reported by the health check while the process is serving.
pub const HEALTH_OK: &str = "ok";
/// Acknowledgement returned after the history has been cleared.
pub const HISTORY_CLEARED: &str = "cleared";

pub mod error;
pub mod history;
pub mod operation;
pub mod service;

pub use error::{CalcError, ErrorKind};
pub use history::{
    HistoryBuffer, HistoryItem, DEFAULT_HISTORY_LIMIT, HISTORY_CAPACITY, MAX_HISTORY_LIMIT,
};
pub use operation::{CalcRequest, Operation};
pub use service::Calculator;
