//! Bit-flag sets passed through to the primitive layer unchanged. The numeric
//! values mirror the Win32 constants; nothing in this workspace interprets
//! them beyond combining and forwarding.

use bitflags::bitflags;

bitflags! {
    /// Process security and access rights requested when opening a handle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ProcessAccess: u32 {
        const TERMINATE = 0x0000_0001;
        const CREATE_THREAD = 0x0000_0002;
        /// Required for operations on the address space (allocate, protect, write).
        const VM_OPERATION = 0x0000_0008;
        const VM_READ = 0x0000_0010;
        const VM_WRITE = 0x0000_0020;
        const DUP_HANDLE = 0x0000_0040;
        const CREATE_PROCESS = 0x0000_0080;
        const SET_QUOTA = 0x0000_0100;
        const SET_INFORMATION = 0x0000_0200;
        const QUERY_INFORMATION = 0x0000_0400;
        const SUSPEND_RESUME = 0x0000_0800;
        const QUERY_LIMITED_INFORMATION = 0x0000_1000;
        /// Required to wait on the process handle.
        const SYNCHRONIZE = 0x0010_0000;
        const ALL = 0x001F_FFFF;
    }
}

bitflags! {
    /// How pages are allocated in the target address space.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AllocationType: u32 {
        const COMMIT = 0x0000_1000;
        const RESERVE = 0x0000_2000;
        const RESET = 0x0008_0000;
        const TOP_DOWN = 0x0010_0000;
        const WRITE_WATCH = 0x0020_0000;
        const PHYSICAL = 0x0040_0000;
        const RESET_UNDO = 0x0100_0000;
        const LARGE_PAGES = 0x2000_0000;
    }
}

bitflags! {
    /// How pages are released or decommitted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FreeType: u32 {
        const COALESCE_PLACEHOLDERS = 0x0000_0001;
        const PRESERVE_PLACEHOLDER = 0x0000_0002;
        const DECOMMIT = 0x0000_4000;
        const RELEASE = 0x0000_8000;
    }
}

bitflags! {
    /// Page protection constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Protection: u32 {
        const NO_ACCESS = 0x0000_0001;
        const READ_ONLY = 0x0000_0002;
        const READ_WRITE = 0x0000_0004;
        const WRITE_COPY = 0x0000_0008;
        const EXECUTE = 0x0000_0010;
        const EXECUTE_READ = 0x0000_0020;
        const EXECUTE_READ_WRITE = 0x0000_0040;
        const EXECUTE_WRITE_COPY = 0x0000_0080;
        const GUARD = 0x0000_0100;
        const NO_CACHE = 0x0000_0200;
        const WRITE_COMBINE = 0x0000_0400;
    }
}
