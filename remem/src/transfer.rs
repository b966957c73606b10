//! The transfer engine: moves an exact byte count between a remote and a local
//! range, retrying when the primitive stops partway through a multi-page span.

use remem_native::NtStatus;

use crate::error_state;

/// Outcome of one logical transfer: overall success plus the number of bytes
/// actually moved. On success `bytes_transferred` equals the requested length;
/// on failure it is the count moved before the failing primitive call, so a
/// caller inspecting only the byte count still detects short transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferResult {
    pub ok: bool,
    pub bytes_transferred: usize,
}

impl TransferResult {
    pub(crate) const fn success(bytes_transferred: usize) -> TransferResult {
        TransferResult { ok: true, bytes_transferred }
    }
    pub(crate) const fn failure(bytes_transferred: usize) -> TransferResult {
        TransferResult { ok: false, bytes_transferred }
    }
}

/// Drives one transfer of `len` bytes. `op` performs a single primitive call
/// against `(remote address, local address, remaining length)` and reports the
/// raw status plus the bytes moved before any fault. The loop advances both
/// cursors past each partial copy until the range is exhausted, a call
/// completes the remainder, or a hard failure ends it.
pub(crate) fn run_transfer<F>(
    mut remote: usize,
    mut local: usize,
    len: usize,
    mut op: F,
) -> TransferResult
where
    F: FnMut(usize, usize, usize) -> (NtStatus, usize),
{
    let mut remaining = len;
    let mut moved = 0usize;
    loop {
        let (status, transferred) = op(remote, local, remaining);
        if status.is_success() {
            error_state::record(NtStatus::SUCCESS);
            return TransferResult::success(len);
        }
        if status != NtStatus::PARTIAL_COPY {
            error_state::record(status);
            return TransferResult::failure(moved);
        }
        let transferred = transferred.min(remaining);
        if transferred == 0 {
            // A partial report with no progress would retry forever; treat it
            // as a hard failure instead.
            tracing::warn!(remote, remaining, "partial copy made no progress");
            error_state::record(NtStatus::PARTIAL_COPY);
            return TransferResult::failure(moved);
        }
        moved += transferred;
        remote += transferred;
        local += transferred;
        remaining -= transferred;
        tracing::trace!(remote, remaining, transferred, "retrying after partial copy");
        if remaining == 0 {
            // The last partial call happened to finish the range.
            error_state::record(NtStatus::SUCCESS);
            return TransferResult::success(len);
        }
    }
}
