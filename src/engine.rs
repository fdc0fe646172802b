// src/engine.rs

//! # Parallel Map Engine
//!
//! Applies a [`Transform`] to every pixel of a caller-owned buffer, in place,
//! using one scoped worker thread per partition.
//!
//! ```text
//! buffer: [ p0 p1 p2 p3 | p4 p5 p6 p7 | p8 p9 ]
//!           \_ worker 0 _/ \_ worker 1 _/ \_ 2 _/
//!                    │            │          │
//!                    └──── thread::scope ────┘   (join-all barrier)
//! ```
//!
//! **Contract:**
//! - **Precondition**: worker count `>= 1` (and, for the row variant, a pitch
//!   that divides the buffer length)
//! - **Action**: `buffer[i] = f(buffer[i])` for every index, each worker
//!   writing only its own partition through a disjoint `&mut` sub-slice
//! - **Postcondition**: all writes are visible once the call returns
//!
//! Partition boundaries are computed once, up front, on the calling thread.
//! Workers never coordinate with each other; the scope join is the only
//! synchronization point. Validation failures are reported before any worker
//! starts, so a rejected call leaves the buffer untouched.

use crate::config::EngineConfig;
use crate::error::MapError;
use crate::partition::{divide_len, divide_rows, split_mut, Partition};
use crate::transform::Transform;
use log::{debug, trace, warn};
use std::num::NonZeroUsize;
use std::thread;

/// Default prefix for worker thread names.
pub const DEFAULT_THREAD_NAME: &str = "pixfn-worker";

/// Number of workers the hardware can run concurrently (at least 1).
pub fn available_workers() -> usize {
    match thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(err) => {
            debug!("available_parallelism unavailable ({}), using 1 worker", err);
            1
        }
    }
}

/// Applies `f` to every element of `buffer` using up to `workers` threads.
///
/// The effective worker count is `min(workers, buffer.len())`. An empty
/// buffer is a no-op.
///
/// # Errors
/// [`MapError::InvalidWorkerCount`] if `workers == 0`.
pub fn map<F: Transform>(workers: usize, f: F, buffer: &mut [u32]) -> Result<(), MapError> {
    ParallelMap::new(workers)?.apply(f, buffer)
}

/// Row-aligned variant of [`map`]: partitions fall on multiples of `pitch`.
///
/// # Errors
/// - [`MapError::InvalidWorkerCount`] if `workers == 0`.
/// - [`MapError::InvalidPitch`] if `pitch` is zero or does not divide the
///   buffer length.
pub fn map_rows<F: Transform>(
    workers: usize,
    pitch: usize,
    f: F,
    buffer: &mut [u32],
) -> Result<(), MapError> {
    ParallelMap::new(workers)?.with_row_pitch(pitch).apply(f, buffer)
}

/// A configured map engine.
///
/// Holds only dispatch parameters; threads are spawned per [`apply`] call and
/// joined before it returns.
///
/// [`apply`]: ParallelMap::apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelMap {
    workers: NonZeroUsize,
    row_pitch: Option<usize>,
    stack_size: Option<usize>,
    thread_name: String,
}

impl Default for ParallelMap {
    /// One worker per available hardware thread, linear partitioning.
    fn default() -> Self {
        Self::with_workers(NonZeroUsize::new(available_workers()).unwrap_or(NonZeroUsize::MIN))
    }
}

impl ParallelMap {
    /// Creates an engine dispatching up to `workers` threads per call.
    ///
    /// # Errors
    /// [`MapError::InvalidWorkerCount`] if `workers == 0`.
    pub fn new(workers: usize) -> Result<Self, MapError> {
        let workers =
            NonZeroUsize::new(workers).ok_or(MapError::InvalidWorkerCount { count: workers })?;
        Ok(Self::with_workers(workers))
    }

    fn with_workers(workers: NonZeroUsize) -> Self {
        Self {
            workers,
            row_pitch: None,
            stack_size: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }

    /// Builds an engine from configuration. A missing worker count resolves
    /// to [`available_workers`].
    ///
    /// # Errors
    /// - [`MapError::InvalidWorkerCount`] if the configured count is zero.
    /// - [`MapError::InvalidThreadName`] if the thread name contains a NUL byte.
    pub fn from_config(config: &EngineConfig) -> Result<Self, MapError> {
        if config.thread_name.contains('\0') {
            return Err(MapError::InvalidThreadName {
                name: config.thread_name.clone(),
            });
        }
        let workers = config.workers.unwrap_or_else(available_workers);
        let mut engine = Self::new(workers)?;
        engine.row_pitch = config.row_pitch;
        engine.stack_size = config.stack_size;
        engine.thread_name = config.thread_name.clone();
        Ok(engine)
    }

    /// Partitions along rows of `pitch` elements instead of raw offsets.
    pub fn with_row_pitch(mut self, pitch: usize) -> Self {
        self.row_pitch = Some(pitch);
        self
    }

    /// Stack size for each worker thread, in bytes.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn row_pitch(&self) -> Option<usize> {
        self.row_pitch
    }

    /// Computes the partitions a call to [`apply`](Self::apply) would use for
    /// a buffer of `len` elements.
    pub fn plan(&self, len: usize) -> Result<Vec<Partition>, MapError> {
        match self.row_pitch {
            Some(pitch) => divide_rows(len, pitch, self.workers()),
            None if len == 0 => Ok(Vec::new()),
            None => divide_len(len, self.workers().min(len)),
        }
    }

    /// Mutates `buffer` in place so that `buffer[i] == f(original[i])`.
    pub fn apply<F: Transform>(&self, f: F, buffer: &mut [u32]) -> Result<(), MapError> {
        let partitions = self.plan(buffer.len())?;
        if partitions.is_empty() {
            return Ok(());
        }

        debug!(
            "mapping {} pixels across {} partitions (requested {} workers, pitch {:?})",
            buffer.len(),
            partitions.len(),
            self.workers(),
            self.row_pitch
        );

        if partitions.len() == 1 {
            apply_in_place(&f, buffer);
            return Ok(());
        }

        self.dispatch(&f, buffer, &partitions);
        Ok(())
    }

    /// Runs one scoped worker per partition and joins them all.
    ///
    /// A partition whose thread cannot be spawned is processed on the calling
    /// thread after the others have joined.
    fn dispatch<F: Transform>(&self, f: &F, buffer: &mut [u32], partitions: &[Partition]) {
        let mut chunks = split_mut(buffer, partitions);
        let mut stranded = Vec::new();

        thread::scope(|s| {
            for (i, chunk) in chunks.iter_mut().enumerate() {
                let mut builder = thread::Builder::new().name(format!("{}-{}", self.thread_name, i));
                if let Some(bytes) = self.stack_size {
                    builder = builder.stack_size(bytes);
                }

                let job = move || {
                    trace!("worker {} processing {} pixels", i, chunk.len());
                    apply_in_place(f, chunk);
                };
                if let Err(err) = builder.spawn_scoped(s, job) {
                    warn!("failed to spawn worker {}: {}; running it inline", i, err);
                    stranded.push(i);
                }
            }
        });

        for i in stranded {
            apply_in_place(f, &mut chunks[i]);
        }
    }
}

#[inline]
fn apply_in_place<F: Transform>(f: &F, pixels: &mut [u32]) {
    for px in pixels.iter_mut() {
        *px = f(*px);
    }
}
