use crate::flags::{AllocationType, FreeType, ProcessAccess, Protection};
use crate::status::{NtStatus, WaitResult};

/// An opaque OS-level reference to a target process. Owned by the caller:
/// created by an open call, destroyed by a close call, and invalid before the
/// former and after the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessHandle(isize);

impl ProcessHandle {
    pub const fn null() -> ProcessHandle {
        ProcessHandle(0)
    }
    pub const fn from_raw(raw: isize) -> ProcessHandle {
        ProcessHandle(raw)
    }
    pub const fn as_raw(self) -> isize {
        self.0
    }
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// The process/memory primitive surface the core is built on. Every method
/// performs exactly one OS call and reports its raw NTSTATUS; no retrying or
/// error bookkeeping happens at this level.
///
/// Calls are individually atomic as far as the OS guarantees, but sequences of
/// calls are not synchronized against concurrent writers to the same range.
pub trait NativeApi {
    /// Opens a handle to the process identified by `pid` with the requested
    /// access rights. The handle is only meaningful when the status is a
    /// success code.
    fn open_process(
        &self,
        access: ProcessAccess,
        inherit: bool,
        pid: u32,
    ) -> (NtStatus, ProcessHandle);

    /// Closes an open object handle.
    fn close(&self, handle: ProcessHandle) -> NtStatus;

    /// Copies up to `len` bytes from `src_addr` in the target address space
    /// into the local buffer at `dst_ptr`, returning the status and the number
    /// of bytes actually transferred before any fault.
    ///
    /// # Safety
    /// `dst_ptr` must be valid for writes of `len` bytes for the duration of
    /// the call.
    unsafe fn read_memory(
        &self,
        handle: ProcessHandle,
        src_addr: usize,
        dst_ptr: *mut u8,
        len: usize,
    ) -> (NtStatus, usize);

    /// Copies up to `len` bytes from the local buffer at `src_ptr` into
    /// `dst_addr` in the target address space, returning the status and the
    /// number of bytes actually transferred before any fault.
    ///
    /// # Safety
    /// `src_ptr` must be valid for reads of `len` bytes for the duration of
    /// the call.
    unsafe fn write_memory(
        &self,
        handle: ProcessHandle,
        dst_addr: usize,
        src_ptr: *const u8,
        len: usize,
    ) -> (NtStatus, usize);

    /// Reserves and/or commits pages in the target. `addr_hint` of zero lets
    /// the OS pick the base address. Returns the actual base on success.
    fn allocate_memory(
        &self,
        handle: ProcessHandle,
        addr_hint: usize,
        size: usize,
        alloc: AllocationType,
        protect: Protection,
    ) -> (NtStatus, usize);

    /// Releases or decommits pages in the target.
    fn free_memory(
        &self,
        handle: ProcessHandle,
        addr: usize,
        size: usize,
        free_type: FreeType,
    ) -> NtStatus;

    /// Changes the protection of pages in the target, returning the previous
    /// protection of the first page in the range.
    fn protect_memory(
        &self,
        handle: ProcessHandle,
        addr: usize,
        size: usize,
        new_protect: Protection,
    ) -> (NtStatus, Protection);

    /// Blocks the calling thread until the object is signaled or `timeout_ms`
    /// elapses ([`crate::INFINITE`] waits forever). The raw result is decoded
    /// with [`WaitResult::decompose`].
    fn wait_for_signal(&self, handle: ProcessHandle, timeout_ms: u32) -> WaitResult;

    /// Translates a raw NTSTATUS into the equivalent platform (Win32) error
    /// code. Best effort: an unknown status yields whatever the OS maps it to.
    fn translate_status(&self, status: NtStatus) -> u32;
}
