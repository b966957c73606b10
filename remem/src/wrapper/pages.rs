use remem_native::{AllocationType, FreeType, NativeApi, ProcessHandle, Protection};

use super::NativeWrapper;
use crate::error_state;

impl<N: NativeApi> NativeWrapper<N> {
    /// Reserves, commits or changes the state of pages in the target. An
    /// `addr_hint` of zero lets the OS choose the base address. Returns the
    /// base address of the region, or zero on failure.
    pub fn virtual_alloc(
        &self,
        handle: ProcessHandle,
        addr_hint: usize,
        size: usize,
        alloc: AllocationType,
        protect: Protection,
    ) -> usize {
        let (status, base) = self.backend().allocate_memory(handle, addr_hint, size, alloc, protect);
        error_state::record(status);
        if status.is_success() {
            base
        } else {
            tracing::debug!(%status, size, "virtual_alloc failed");
            0
        }
    }

    /// Releases or decommits pages in the target. For a full release the size
    /// must be zero and `addr` the base returned by the allocation.
    pub fn virtual_free(
        &self,
        handle: ProcessHandle,
        addr: usize,
        size: usize,
        free_type: FreeType,
    ) -> bool {
        let status = self.backend().free_memory(handle, addr, size, free_type);
        error_state::record(status);
        status.is_success()
    }

    /// Changes the protection of committed pages in the target. Returns the
    /// previous protection of the first page on success, `None` on failure.
    pub fn virtual_protect(
        &self,
        handle: ProcessHandle,
        addr: usize,
        size: usize,
        new_protect: Protection,
    ) -> Option<Protection> {
        let (status, old_protect) = self.backend().protect_memory(handle, addr, size, new_protect);
        error_state::record(status);
        status.is_success().then_some(old_protect)
    }
}
