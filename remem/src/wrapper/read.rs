use std::mem::{size_of, size_of_val};

use remem_native::{NativeApi, ProcessHandle};

use super::NativeWrapper;
use crate::transfer::{run_transfer, TransferResult};

/// Read family: every shape derives a `(local address, byte length)` pair and
/// feeds the one transfer engine; none introduces failure modes of its own.
impl<N: NativeApi> NativeWrapper<N> {
    /// Copies `len` bytes from `base_address` in the target into the local
    /// buffer at `buffer`, recovering from partial copies.
    ///
    /// # Safety
    /// `buffer` must be valid for writes of `len` bytes for the duration of
    /// the call.
    pub unsafe fn read_process_memory_raw(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: *mut u8,
        len: usize,
    ) -> TransferResult {
        let api = self.backend();
        run_transfer(base_address, buffer as usize, len, |remote, local, remaining| unsafe {
            api.read_memory(handle, remote, local as *mut u8, remaining)
        })
    }

    /// Reads a single `T` from `base_address` in the target. The value is
    /// written in place; no intermediate copy is made.
    pub fn read_process_memory<T: Copy>(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: &mut T,
    ) -> TransferResult {
        unsafe {
            self.read_process_memory_raw(
                handle,
                base_address,
                buffer as *mut T as *mut u8,
                size_of::<T>(),
            )
        }
    }

    /// Fills a local slice from `base_address` in the target. A sub-range of
    /// an array is expressed by passing the sub-slice itself.
    pub fn read_process_memory_slice<T: Copy>(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: &mut [T],
    ) -> TransferResult {
        unsafe {
            self.read_process_memory_raw(
                handle,
                base_address,
                buffer.as_mut_ptr() as *mut u8,
                size_of_val(buffer),
            )
        }
    }

    /// Reads into a byte sub-range of `buffer`, for touching a single field or
    /// resuming a transfer that previously failed partway. `len` defaults to
    /// the bytes remaining after `offset`.
    ///
    /// # Panics
    /// Panics when `offset`/`len` fall outside the value.
    pub fn read_process_memory_partial<T: Copy>(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: &mut T,
        offset: usize,
        len: Option<usize>,
    ) -> TransferResult {
        let total = size_of::<T>();
        assert!(offset < total, "offset {offset} is outside a value of {total} bytes");
        let len = len.unwrap_or(total - offset);
        // `total - offset` cannot underflow after the first assertion, and the
        // subtraction form cannot wrap the way `offset + len` would.
        assert!(
            len <= total - offset,
            "range of {len} bytes at offset {offset} is outside a value of {total} bytes"
        );
        unsafe {
            self.read_process_memory_raw(
                handle,
                base_address,
                (buffer as *mut T as *mut u8).add(offset),
                len,
            )
        }
    }
}
