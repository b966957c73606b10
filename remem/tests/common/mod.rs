//! A scripted in-process stand-in for the OS primitive layer. The mock owns a
//! flat byte image standing in for the target's address space and replays
//! per-call outcome plans, so partial-copy recovery and error capture can be
//! exercised on any host.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::ptr;

use remem_native::{
    AllocationType, FreeType, NativeApi, NtStatus, ProcessAccess, ProcessHandle, Protection,
    WaitResult,
};

pub const MOCK_PID: u32 = 4242;
pub const REMOTE_BASE: usize = 0x0010_0000;
pub const MOCK_HANDLE: ProcessHandle = ProcessHandle::from_raw(0x5A5A);

const IMAGE_SIZE: usize = 0x1_0000;
const STATUS_NO_MEMORY: NtStatus = NtStatus(0xC000_0017);
const STATUS_MEMORY_NOT_ALLOCATED: NtStatus = NtStatus(0xC000_009F);
const STATUS_INVALID_CID: NtStatus = NtStatus(0xC000_000B);

/// One scripted outcome for a read or write primitive call.
pub enum Step {
    /// Move at most this many bytes; report PARTIAL_COPY unless that covers
    /// the whole request.
    Chunk(usize),
    /// Report PARTIAL_COPY without moving anything.
    Stall,
    /// Fail outright with the given status.
    Fail(NtStatus),
}

pub struct MockApi {
    memory: RefCell<Vec<u8>>,
    read_plan: RefCell<VecDeque<Step>>,
    write_plan: RefCell<VecDeque<Step>>,
    wait_plan: RefCell<VecDeque<WaitResult>>,
    next_alloc: Cell<usize>,
    allocations: RefCell<HashMap<usize, usize>>,
}

impl MockApi {
    pub fn new() -> MockApi {
        MockApi {
            memory: RefCell::new(vec![0; IMAGE_SIZE]),
            read_plan: RefCell::new(VecDeque::new()),
            write_plan: RefCell::new(VecDeque::new()),
            wait_plan: RefCell::new(VecDeque::new()),
            next_alloc: Cell::new(0),
            allocations: RefCell::new(HashMap::new()),
        }
    }

    /// Places bytes into the fake target image.
    pub fn seed(&self, addr: usize, bytes: &[u8]) {
        let offset = addr - REMOTE_BASE;
        self.memory.borrow_mut()[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Reads bytes back out of the fake target image.
    pub fn peek(&self, addr: usize, len: usize) -> Vec<u8> {
        let offset = addr - REMOTE_BASE;
        self.memory.borrow()[offset..offset + len].to_vec()
    }

    pub fn plan_reads(&self, steps: impl IntoIterator<Item = Step>) {
        self.read_plan.borrow_mut().extend(steps);
    }

    pub fn plan_writes(&self, steps: impl IntoIterator<Item = Step>) {
        self.write_plan.borrow_mut().extend(steps);
    }

    pub fn plan_waits(&self, results: impl IntoIterator<Item = WaitResult>) {
        self.wait_plan.borrow_mut().extend(results);
    }

    fn check_range(&self, addr: usize, len: usize) -> Option<usize> {
        let offset = addr.checked_sub(REMOTE_BASE)?;
        (offset + len <= self.memory.borrow().len()).then_some(offset)
    }

    fn granted(plan: &RefCell<VecDeque<Step>>, len: usize) -> Result<usize, (NtStatus, usize)> {
        match plan.borrow_mut().pop_front() {
            None => Ok(len),
            Some(Step::Chunk(limit)) => Ok(limit.min(len)),
            Some(Step::Stall) => Err((NtStatus::PARTIAL_COPY, 0)),
            Some(Step::Fail(status)) => Err((status, 0)),
        }
    }
}

impl NativeApi for MockApi {
    fn open_process(
        &self,
        _access: ProcessAccess,
        _inherit: bool,
        pid: u32,
    ) -> (NtStatus, ProcessHandle) {
        if pid == MOCK_PID {
            (NtStatus::SUCCESS, MOCK_HANDLE)
        } else {
            (STATUS_INVALID_CID, ProcessHandle::null())
        }
    }

    fn close(&self, handle: ProcessHandle) -> NtStatus {
        if handle == MOCK_HANDLE {
            NtStatus::SUCCESS
        } else {
            NtStatus::INVALID_HANDLE
        }
    }

    unsafe fn read_memory(
        &self,
        handle: ProcessHandle,
        src_addr: usize,
        dst_ptr: *mut u8,
        len: usize,
    ) -> (NtStatus, usize) {
        if handle != MOCK_HANDLE {
            return (NtStatus::INVALID_HANDLE, 0);
        }
        let Some(offset) = self.check_range(src_addr, len) else {
            return (NtStatus::ACCESS_VIOLATION, 0);
        };
        let granted = match Self::granted(&self.read_plan, len) {
            Ok(granted) => granted,
            Err(outcome) => return outcome,
        };
        let memory = self.memory.borrow();
        ptr::copy_nonoverlapping(memory.as_ptr().add(offset), dst_ptr, granted);
        if granted < len {
            (NtStatus::PARTIAL_COPY, granted)
        } else {
            (NtStatus::SUCCESS, len)
        }
    }

    unsafe fn write_memory(
        &self,
        handle: ProcessHandle,
        dst_addr: usize,
        src_ptr: *const u8,
        len: usize,
    ) -> (NtStatus, usize) {
        if handle != MOCK_HANDLE {
            return (NtStatus::INVALID_HANDLE, 0);
        }
        let Some(offset) = self.check_range(dst_addr, len) else {
            return (NtStatus::ACCESS_VIOLATION, 0);
        };
        let granted = match Self::granted(&self.write_plan, len) {
            Ok(granted) => granted,
            Err(outcome) => return outcome,
        };
        let mut memory = self.memory.borrow_mut();
        ptr::copy_nonoverlapping(src_ptr, memory.as_mut_ptr().add(offset), granted);
        if granted < len {
            (NtStatus::PARTIAL_COPY, granted)
        } else {
            (NtStatus::SUCCESS, len)
        }
    }

    fn allocate_memory(
        &self,
        handle: ProcessHandle,
        _addr_hint: usize,
        size: usize,
        _alloc: AllocationType,
        _protect: Protection,
    ) -> (NtStatus, usize) {
        if handle != MOCK_HANDLE {
            return (NtStatus::INVALID_HANDLE, 0);
        }
        let offset = self.next_alloc.get();
        if offset + size > IMAGE_SIZE {
            return (STATUS_NO_MEMORY, 0);
        }
        self.next_alloc.set(offset + size);
        let base = REMOTE_BASE + offset;
        self.allocations.borrow_mut().insert(base, size);
        (NtStatus::SUCCESS, base)
    }

    fn free_memory(
        &self,
        handle: ProcessHandle,
        addr: usize,
        _size: usize,
        _free_type: FreeType,
    ) -> NtStatus {
        if handle != MOCK_HANDLE {
            return NtStatus::INVALID_HANDLE;
        }
        if self.allocations.borrow_mut().remove(&addr).is_some() {
            NtStatus::SUCCESS
        } else {
            STATUS_MEMORY_NOT_ALLOCATED
        }
    }

    fn protect_memory(
        &self,
        handle: ProcessHandle,
        addr: usize,
        size: usize,
        _new_protect: Protection,
    ) -> (NtStatus, Protection) {
        if handle != MOCK_HANDLE {
            return (NtStatus::INVALID_HANDLE, Protection::empty());
        }
        if self.check_range(addr, size).is_none() {
            return (NtStatus::ACCESS_VIOLATION, Protection::empty());
        }
        (NtStatus::SUCCESS, Protection::READ_WRITE)
    }

    fn wait_for_signal(&self, _handle: ProcessHandle, _timeout_ms: u32) -> WaitResult {
        self.wait_plan.borrow_mut().pop_front().unwrap_or(WaitResult(0))
    }

    fn translate_status(&self, status: NtStatus) -> u32 {
        // A fixed subset of the RtlNtStatusToDosError mapping, enough for the
        // codes this suite produces; unknown codes take the kernel's
        // ERROR_MR_MID_NOT_FOUND fallback.
        match status {
            NtStatus::SUCCESS => 0,
            NtStatus::PARTIAL_COPY => 299,
            NtStatus::INVALID_HANDLE => 6,
            NtStatus::ACCESS_DENIED => 5,
            NtStatus::ACCESS_VIOLATION => 998,
            _ => 317,
        }
    }
}
