//! Per-thread last-status capture. Every core operation records its outcome
//! here (unless capture is disabled), so a caller that got a `false` back can
//! ask what went wrong without the operation itself carrying an error channel.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

use remem_native::NtStatus;

// The flag is advisory: a race between a writer and a reader only affects
// whether an outcome gets recorded, never the outcome itself.
static CAPTURE_ERRORS: AtomicBool = AtomicBool::new(true);

thread_local! {
    static LAST_STATUS: Cell<u32> = const { Cell::new(0) };
}

/// Enables or disables outcome capture for subsequent calls on every thread.
/// While disabled the per-thread cell is left untouched, so "no error" cannot
/// be inferred from it.
pub fn set_capture_errors(enabled: bool) {
    CAPTURE_ERRORS.store(enabled, Ordering::Relaxed);
}

/// Whether core operations currently record their outcome.
pub fn capture_errors() -> bool {
    CAPTURE_ERRORS.load(Ordering::Relaxed)
}

/// Stores the status of a core operation in the calling thread's cell.
/// No-op while capture is disabled.
pub(crate) fn record(status: NtStatus) {
    if capture_errors() {
        LAST_STATUS.with(|cell| cell.set(status.0));
    }
}

/// True if the most recent recorded operation on this thread failed.
pub fn has_error() -> bool {
    last_status() != NtStatus::SUCCESS
}

/// The raw NTSTATUS recorded by the most recent core operation on this
/// thread; `NtStatus::SUCCESS` when the operation succeeded. For the
/// translated platform error code use [`crate::NativeWrapper::last_error`].
pub fn last_status() -> NtStatus {
    NtStatus(LAST_STATUS.with(|cell| cell.get()))
}
