//! A size-bucketed free list of reusable arrays. Each thread owns its own
//! pool value, so there is no locking and no cross-thread handoff of pooled
//! buffers: an array must be returned on the thread it was rented from.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Misuse of the array pool. Argument/state errors, distinct from the
/// OS-status failures of the transfer and handle operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("zero-length arrays cannot be pooled")]
    EmptyArray,
    #[error("nothing has been rented from this pool")]
    NotInitialized,
    #[error("no bucket of length {0}: the array was not rented from this pool")]
    UnknownBucket(usize),
}

/// Per-length buckets of previously allocated arrays of one element type.
/// Buckets are created lazily on first use.
#[derive(Debug)]
pub struct ArrayPool<T> {
    buckets: HashMap<usize, Vec<Vec<T>>>,
}

impl<T> Default for ArrayPool<T> {
    fn default() -> ArrayPool<T> {
        ArrayPool::new()
    }
}

impl<T> ArrayPool<T> {
    pub fn new() -> ArrayPool<T> {
        ArrayPool { buckets: HashMap::new() }
    }
}

impl<T: Clone + Default> ArrayPool<T> {
    /// Inserts an externally allocated array into the bucket for its length,
    /// optionally zeroing it first.
    pub fn fill(&mut self, mut array: Vec<T>, clear: bool) -> Result<(), PoolError> {
        if array.is_empty() {
            return Err(PoolError::EmptyArray);
        }
        if clear {
            array.fill(T::default());
        }
        self.buckets.entry(array.len()).or_default().push(array);
        Ok({})
    }

    /// Inserts a sequence of arrays, stopping at the first empty one.
    pub fn fill_sequence(
        &mut self,
        sequence: impl IntoIterator<Item = Vec<T>>,
        clear: bool,
    ) -> Result<(), PoolError> {
        for array in sequence {
            self.fill(array, clear)?;
        }
        Ok({})
    }

    /// Pops an array of the requested length, allocating a fresh zeroed one
    /// when the bucket is empty. Never fails; a request for length zero
    /// bypasses the buckets and hands out a new empty array each time.
    pub fn rent(&mut self, size: usize) -> Vec<T> {
        if size == 0 {
            return Vec::new();
        }
        let bucket = self.buckets.entry(size).or_default();
        bucket.pop().unwrap_or_else(|| vec![T::default(); size])
    }

    /// Pushes a rented array back into its bucket, optionally zeroing it
    /// first. The pool tracks no per-array provenance: any array whose length
    /// matches an existing bucket is accepted.
    pub fn return_array(&mut self, mut array: Vec<T>, clear: bool) -> Result<(), PoolError> {
        if array.is_empty() {
            return Err(PoolError::EmptyArray);
        }
        if self.buckets.is_empty() {
            return Err(PoolError::NotInitialized);
        }
        if clear {
            array.fill(T::default());
        }
        match self.buckets.get_mut(&array.len()) {
            Some(bucket) => {
                bucket.push(array);
                Ok({})
            }
            None => Err(PoolError::UnknownBucket(array.len())),
        }
    }
}

thread_local! {
    static BYTE_POOL: RefCell<ArrayPool<u8>> = RefCell::new(ArrayPool::new());
}

/// Runs `op` against the calling thread's scratch byte pool, the usual source
/// of staging buffers for repeated transfers.
pub fn with_byte_pool<R>(op: impl FnOnce(&mut ArrayPool<u8>) -> R) -> R {
    BYTE_POOL.with(|pool| op(&mut pool.borrow_mut()))
}
