// src/partition.rs

//! Splitting a buffer into disjoint, contiguous, ordered index ranges.
//!
//! ## Layout
//!
//! For a buffer of length `L` and `n` partitions:
//!
//! ```text
//! base      = L / n
//! remainder = L % n
//!
//! [0, base) [base, 2*base) ... [(n-1)*base, n*base) [L - remainder, L)
//! \______________ n partitions of base ___________/ \__ only if > 0 _/
//! ```
//!
//! Every partition set returned here covers `[0, L)` exactly once, with no
//! gaps and no overlap. The engine relies on that to hand each worker its own
//! `&mut` sub-slice without any locking.

use crate::error::MapError;
use log::trace;
use std::ops::Range;

/// A half-open index range `[start, stop)` over a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    pub start: usize,
    pub stop: usize,
}

impl Partition {
    #[inline]
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop, "partition start {start} after stop {stop}");
        Self { start, stop }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

impl From<Partition> for Range<usize> {
    fn from(p: Partition) -> Range<usize> {
        p.range()
    }
}

/// Divides `buffer` into `n` equal partitions plus a trailing remainder.
///
/// See [`divide_len`].
pub fn divide<T>(buffer: &[T], n: usize) -> Result<Vec<Partition>, MapError> {
    divide_len(buffer.len(), n)
}

/// Divides the index space `[0, len)` into `n` partitions of `len / n`
/// elements, followed by one partition holding the `len % n` leftover
/// elements when there are any.
///
/// # Errors
/// Returns [`MapError::InvalidPartitionCount`] if `n == 0`, or if `n > len`
/// for a non-empty buffer (which would produce zero-length partitions).
pub fn divide_len(len: usize, n: usize) -> Result<Vec<Partition>, MapError> {
    if n == 0 || (len > 0 && n > len) {
        return Err(MapError::InvalidPartitionCount { count: n, len });
    }
    if len == 0 {
        return Ok(Vec::new());
    }

    let base = len / n;
    let remainder = len % n;

    let mut partitions = Vec::with_capacity(n + usize::from(remainder > 0));
    partitions.extend((0..n).map(|i| Partition::new(i * base, (i + 1) * base)));
    if remainder > 0 {
        partitions.push(Partition::new(len - remainder, len));
    }

    trace!(
        "divided {} elements into {} partitions (base {}, remainder {})",
        len,
        partitions.len(),
        base,
        remainder
    );
    Ok(partitions)
}

/// Row-aligned variant of [`divide_len`].
///
/// Treats `[0, len)` as `len / pitch` rows of `pitch` elements and divides the
/// rows, so every partition starts and stops on a row boundary. The partition
/// count is clamped to the number of rows.
///
/// # Errors
/// - [`MapError::InvalidPitch`] if `pitch == 0` or `pitch` does not divide `len`.
/// - [`MapError::InvalidPartitionCount`] if `n == 0`.
pub fn divide_rows(len: usize, pitch: usize, n: usize) -> Result<Vec<Partition>, MapError> {
    if pitch == 0 || len % pitch != 0 {
        return Err(MapError::InvalidPitch { pitch, len });
    }
    if n == 0 {
        return Err(MapError::InvalidPartitionCount { count: n, len });
    }

    let rows = len / pitch;
    if rows == 0 {
        return Ok(Vec::new());
    }
    let row_partitions = divide_len(rows, n.min(rows))?;
    Ok(row_partitions
        .into_iter()
        .map(|p| Partition::new(p.start * pitch, p.stop * pitch))
        .collect())
}

/// Splits `buffer` into one mutable sub-slice per partition.
///
/// `partitions` must be ordered, contiguous and start at zero, as produced by
/// [`divide_len`] or [`divide_rows`] for `buffer.len()`.
///
/// # Panics
/// Panics if the partitions are not contiguous or run past the end of
/// `buffer`.
pub(crate) fn split_mut<'a, T>(buffer: &'a mut [T], partitions: &[Partition]) -> Vec<&'a mut [T]> {
    let mut chunks = Vec::with_capacity(partitions.len());
    let mut remaining = buffer;
    let mut offset = 0;

    for p in partitions {
        assert_eq!(p.start, offset, "partitions must be contiguous");
        let (chunk, rest) = remaining.split_at_mut(p.len());
        chunks.push(chunk);
        remaining = rest;
        offset = p.stop;
    }

    chunks
}
