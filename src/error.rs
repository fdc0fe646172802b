// src/error.rs

//! Error type reported by the partitioner and the parallel map engine.

use thiserror::Error;

/// Precondition violations detected before any worker is dispatched.
///
/// When one of these is returned the buffer has not been touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid worker count {count}: at least one worker is required")]
    InvalidWorkerCount { count: usize },
    #[error("invalid partition count {count} for a buffer of length {len}: expected 1..={len}")]
    InvalidPartitionCount { count: usize, len: usize },
    #[error("invalid row pitch {pitch} for a buffer of length {len}: pitch must be non-zero and divide the length")]
    InvalidPitch { pitch: usize, len: usize },
    #[error("invalid worker thread name {name:?}: names may not contain NUL bytes")]
    InvalidThreadName { name: String },
}
