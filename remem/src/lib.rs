//! Remote process memory access: open a handle to another process, read and
//! write arbitrary byte ranges in its address space with transparent recovery
//! from partial copies, manage its pages, and inspect why an operation failed
//! through a per-thread last-error cell.
//!
//! The crate is a thin, synchronous layer over the [`remem_native::NativeApi`]
//! primitive boundary. Operations report success as plain booleans (or a
//! [`TransferResult`] carrying the byte count); diagnostics live in the
//! thread-local error cell and are read back on demand.

pub mod error_state;
pub mod pool;
pub mod transfer;
pub mod wrapper;

pub use remem_native::{
    AllocationType, FreeType, NativeApi, NtStatus, ProcessAccess, ProcessHandle, Protection,
    WaitOutcome, WaitResult, INFINITE,
};

pub use error_state::{capture_errors, has_error, last_status, set_capture_errors};
pub use pool::{with_byte_pool, ArrayPool, PoolError};
pub use transfer::TransferResult;
pub use wrapper::NativeWrapper;
#[cfg(windows)]
pub use wrapper::SystemWrapper;
