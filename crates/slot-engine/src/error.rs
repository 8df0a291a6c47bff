//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A collaborator lookup (staff roster, rules, bookings, hours) failed.
    #[error("Schedule source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
