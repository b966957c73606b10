use std::fmt;

/// A 32-bit NTSTATUS result code. The two most significant bits classify the
/// code as success (`00`), informational (`01`), warning (`10`) or error (`11`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NtStatus(pub u32);

impl NtStatus {
    pub const SUCCESS: NtStatus = NtStatus(0);
    /// The transfer primitive moved some, but not all, of the requested byte
    /// range before being blocked. Warning class; the only code the transfer
    /// engine treats specially.
    pub const PARTIAL_COPY: NtStatus = NtStatus(0x8000_000D);
    pub const ACCESS_VIOLATION: NtStatus = NtStatus(0xC000_0005);
    pub const INVALID_HANDLE: NtStatus = NtStatus(0xC000_0008);
    pub const ACCESS_DENIED: NtStatus = NtStatus(0xC000_0022);

    /// True for success and informational codes
    pub const fn is_success(self) -> bool {
        self.0 <= 0x7FFF_FFFF
    }
    /// True only for strict success codes, informational codes excluded
    pub const fn is_success_only(self) -> bool {
        self.0 <= 0x3FFF_FFFF
    }
    pub const fn is_informational(self) -> bool {
        self.0 >= 0x4000_0000 && self.0 <= 0x7FFF_FFFF
    }
    pub const fn is_warning(self) -> bool {
        self.0 >= 0x8000_0000 && self.0 <= 0xBFFF_FFFF
    }
    pub const fn is_error(self) -> bool {
        self.0 >= 0xC000_0000
    }
}

impl fmt::Display for NtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

/// Timeout sentinel for [`crate::NativeApi::wait_for_signal`]: wait until the
/// object is signaled, however long that takes.
pub const INFINITE: u32 = u32::MAX;

const WAIT_ABANDONED_0: u32 = 0x80;
const WAIT_TIMEOUT: u32 = 0x102;

/// Canonical classification of a wait result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaitOutcome {
    /// The object reached the signaled state.
    Signaled,
    /// The object is a mutex that was abandoned by its owning thread.
    Abandoned,
    /// The timeout elapsed while the object stayed nonsignaled.
    TimedOut,
    /// The wait itself failed.
    Failed,
}

/// Raw result of a wait call. Multi-object waits embed the index of the
/// signaled object as an offset on top of the outcome constant, so the raw
/// value is kept and decoded on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaitResult(pub u32);

impl WaitResult {
    /// The canonical outcome, with any object-index offset stripped.
    pub fn outcome(self) -> WaitOutcome {
        self.decompose().0
    }

    /// Strips the object-index offset from the raw value and returns both the
    /// canonical outcome and the index of the object that satisfied the wait.
    /// The index is zero for timeouts and failures.
    pub fn decompose(self) -> (WaitOutcome, u32) {
        match self.0 {
            value if value < WAIT_ABANDONED_0 => (WaitOutcome::Signaled, value),
            value if value < WAIT_TIMEOUT => (WaitOutcome::Abandoned, value - WAIT_ABANDONED_0),
            WAIT_TIMEOUT => (WaitOutcome::TimedOut, 0),
            _ => (WaitOutcome::Failed, 0),
        }
    }
}
