use std::mem::{size_of, size_of_val};

use remem_native::{NativeApi, ProcessHandle};

use super::NativeWrapper;
use crate::transfer::{run_transfer, TransferResult};

/// Write family: mirrors the read shapes with the transfer direction reversed.
impl<N: NativeApi> NativeWrapper<N> {
    /// Copies `len` bytes from the local buffer at `buffer` into
    /// `base_address` in the target, recovering from partial copies.
    ///
    /// # Safety
    /// `buffer` must be valid for reads of `len` bytes for the duration of
    /// the call.
    pub unsafe fn write_process_memory_raw(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: *const u8,
        len: usize,
    ) -> TransferResult {
        let api = self.backend();
        run_transfer(base_address, buffer as usize, len, |remote, local, remaining| unsafe {
            api.write_memory(handle, remote, local as *const u8, remaining)
        })
    }

    /// Writes a single `T` to `base_address` in the target. The value's
    /// in-memory bytes are used directly; no intermediate copy is made.
    pub fn write_process_memory<T: Copy>(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: &T,
    ) -> TransferResult {
        unsafe {
            self.write_process_memory_raw(
                handle,
                base_address,
                buffer as *const T as *const u8,
                size_of::<T>(),
            )
        }
    }

    /// Writes a local slice to `base_address` in the target. A sub-range of
    /// an array is expressed by passing the sub-slice itself.
    pub fn write_process_memory_slice<T: Copy>(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: &[T],
    ) -> TransferResult {
        unsafe {
            self.write_process_memory_raw(
                handle,
                base_address,
                buffer.as_ptr() as *const u8,
                size_of_val(buffer),
            )
        }
    }

    /// Writes a byte sub-range of `buffer` to `base_address`, for touching a
    /// single field or resuming a transfer that previously failed partway.
    /// `len` defaults to the bytes remaining after `offset`.
    ///
    /// # Panics
    /// Panics when `offset`/`len` fall outside the value.
    pub fn write_process_memory_partial<T: Copy>(
        &self,
        handle: ProcessHandle,
        base_address: usize,
        buffer: &T,
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
            self.write_process_memory_raw(
                handle,
                base_address,
                (buffer as *const T as *const u8).add(offset),
                len,
            )
        }
    }
}
