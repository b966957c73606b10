//! Kernel32-style operations over the NT primitive layer, with per-thread
//! last-error bookkeeping applied to every call.

mod pages;
mod read;
mod scalars;
mod write;

use remem_native::{NativeApi, NtStatus, ProcessAccess, ProcessHandle, WaitResult};

use crate::error_state;

/// The process-handle operations and the typed transfer families, bound to a
/// [`NativeApi`] backend. Operations report success as booleans (or a
/// [`crate::TransferResult`]); the reason for a failure is read back through
/// [`NativeWrapper::last_error`] before any other core operation on the same
/// thread overwrites it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeWrapper<N: NativeApi> {
    api: N,
}

/// Wrapper over the live ntdll/kernel32 bindings.
#[cfg(windows)]
pub type SystemWrapper = NativeWrapper<remem_native::SystemApi>;

impl<N: NativeApi> NativeWrapper<N> {
    pub fn new(api: N) -> NativeWrapper<N> {
        NativeWrapper { api }
    }

    /// The primitive backend this wrapper drives.
    pub fn backend(&self) -> &N {
        &self.api
    }

    /// True if the previous core operation on this thread failed.
    pub fn has_error(&self) -> bool {
        error_state::has_error()
    }

    /// The platform error code set by the last failed operation on this
    /// thread, or zero. Translated from the stored NTSTATUS on every read
    /// rather than cached.
    pub fn last_error(&self) -> u32 {
        let status = error_state::last_status();
        if status == NtStatus::SUCCESS {
            0
        } else {
            self.api.translate_status(status)
        }
    }

    /// Opens a handle to the process identified by `pid`. Returns a null
    /// handle on failure.
    pub fn open_process(&self, access: ProcessAccess, inherit: bool, pid: u32) -> ProcessHandle {
        let (status, handle) = self.api.open_process(access, inherit, pid);
        error_state::record(status);
        if status.is_success() {
            handle
        } else {
            tracing::debug!(pid, %status, "open_process failed");
            ProcessHandle::null()
        }
    }

    /// Closes an open object handle.
    pub fn close_handle(&self, handle: ProcessHandle) -> bool {
        let status = self.api.close(handle);
        error_state::record(status);
        status.is_success()
    }

    /// Blocks until `handle` is signaled or `timeout_ms` elapses
    /// ([`crate::INFINITE`] waits forever). The raw result is classified with
    /// [`WaitResult::outcome`] or [`WaitResult::decompose`].
    pub fn wait_for_single_object(&self, handle: ProcessHandle, timeout_ms: u32) -> WaitResult {
        self.api.wait_for_signal(handle, timeout_ms)
    }
}

#[cfg(windows)]
impl SystemWrapper {
    pub fn system() -> SystemWrapper {
        NativeWrapper::new(remem_native::SystemApi)
    }
}
