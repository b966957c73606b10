//! The primitive boundary for remote process memory access: the 32-bit NTSTATUS
//! model, opaque handle and flag types, and the [`NativeApi`] trait that the
//! higher-level `remem` crate drives. On Windows the trait is implemented over
//! ntdll.dll and kernel32.dll; on other hosts callers supply their own backend.

pub mod api;
pub mod flags;
pub mod status;
#[cfg(windows)]
pub mod windows;

pub use api::{NativeApi, ProcessHandle};
pub use flags::{AllocationType, FreeType, ProcessAccess, Protection};
pub use status::{NtStatus, WaitOutcome, WaitResult, INFINITE};
#[cfg(windows)]
pub use windows::SystemApi;
