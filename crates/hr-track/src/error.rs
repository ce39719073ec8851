//! Track-subsystem error type.

use thiserror::Error;

use hr_core::CellId;

/// Errors produced by `hr-track`.
///
/// `NoRoute` is an expected, recoverable-by-retry outcome of route search
/// (including depth-budget exhaustion), not a failure.  The structural
/// variants are reported to edit callers and always leave the network
/// unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    #[error("cell {0} not found")]
    CellNotFound(CellId),

    #[error("no track between {a} and {b}")]
    TrackNotFound { a: CellId, b: CellId },

    #[error("no route from {from} to {to}")]
    NoRoute { from: CellId, to: CellId },
}

pub type TrackResult<T> = Result<T, TrackError>;
