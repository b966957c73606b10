//! `NativeApi` over the live ntdll.dll / kernel32.dll exports. The functions
//! are ordinary stdcall exports, so plain `extern "system"` declarations give
//! zero-overhead calls with no marshaling layer in between.

use std::ffi::c_void;
use std::mem::size_of;
use std::ptr;

use crate::api::{NativeApi, ProcessHandle};
use crate::flags::{AllocationType, FreeType, ProcessAccess, Protection};
use crate::status::{NtStatus, WaitResult};

const OBJ_INHERIT: u32 = 0x0000_0002;

#[repr(C)]
struct ObjectAttributes {
    length: u32,
    root_directory: isize,
    object_name: *mut c_void,
    attributes: u32,
    security_descriptor: *mut c_void,
    security_quality_of_service: *mut c_void,
}

#[repr(C)]
struct ClientId {
    unique_process: isize,
    unique_thread: isize,
}

#[link(name = "ntdll")]
extern "system" {
    fn NtOpenProcess(
        handle: *mut isize,
        desired_access: u32,
        object_attributes: *mut ObjectAttributes,
        client_id: *mut ClientId,
    ) -> u32;
    fn NtClose(handle: isize) -> u32;
    fn NtReadVirtualMemory(
        handle: isize,
        base_address: usize,
        buffer: *mut u8,
        size: usize,
        number_of_bytes_read: *mut usize,
    ) -> u32;
    fn NtWriteVirtualMemory(
        handle: isize,
        base_address: usize,
        buffer: *const u8,
        size: usize,
        number_of_bytes_written: *mut usize,
    ) -> u32;
    fn NtAllocateVirtualMemory(
        handle: isize,
        base_address: *mut usize,
        zero_bits: usize,
        region_size: *mut usize,
        allocation_type: u32,
        protect: u32,
    ) -> u32;
    fn NtFreeVirtualMemory(
        handle: isize,
        base_address: *mut usize,
        region_size: *mut usize,
        free_type: u32,
    ) -> u32;
    fn NtProtectVirtualMemory(
        handle: isize,
        base_address: *mut usize,
        region_size: *mut usize,
        new_protect: u32,
        old_protect: *mut u32,
    ) -> u32;
    fn RtlNtStatusToDosError(status: u32) -> u32;
}

#[link(name = "kernel32")]
extern "system" {
    fn WaitForSingleObject(handle: isize, timeout_ms: u32) -> u32;
}

/// The system-backed primitive layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemApi;

impl NativeApi for SystemApi {
    fn open_process(
        &self,
        access: ProcessAccess,
        inherit: bool,
        pid: u32,
    ) -> (NtStatus, ProcessHandle) {
        let mut handle: isize = 0;
        let mut attributes = ObjectAttributes {
            length: size_of::<ObjectAttributes>() as u32,
            root_directory: 0,
            object_name: ptr::null_mut(),
            attributes: if inherit { OBJ_INHERIT } else { 0 },
            security_descriptor: ptr::null_mut(),
            security_quality_of_service: ptr::null_mut(),
        };
        let mut client_id = ClientId {
            unique_process: pid as isize,
            unique_thread: 0,
        };
        let status = unsafe {
            NtOpenProcess(&mut handle, access.bits(), &mut attributes, &mut client_id)
        };
        (NtStatus(status), ProcessHandle::from_raw(handle))
    }

    fn close(&self, handle: ProcessHandle) -> NtStatus {
        NtStatus(unsafe { NtClose(handle.as_raw()) })
    }

    unsafe fn read_memory(
        &self,
        handle: ProcessHandle,
        src_addr: usize,
        dst_ptr: *mut u8,
        len: usize,
    ) -> (NtStatus, usize) {
        let mut bytes_read: usize = 0;
        let status = NtReadVirtualMemory(handle.as_raw(), src_addr, dst_ptr, len, &mut bytes_read);
        (NtStatus(status), bytes_read)
    }

    unsafe fn write_memory(
        &self,
        handle: ProcessHandle,
        dst_addr: usize,
        src_ptr: *const u8,
        len: usize,
    ) -> (NtStatus, usize) {
        let mut bytes_written: usize = 0;
        let status =
            NtWriteVirtualMemory(handle.as_raw(), dst_addr, src_ptr, len, &mut bytes_written);
        (NtStatus(status), bytes_written)
    }

    fn allocate_memory(
        &self,
        handle: ProcessHandle,
        addr_hint: usize,
        size: usize,
        alloc: AllocationType,
        protect: Protection,
    ) -> (NtStatus, usize) {
        let mut base = addr_hint;
        let mut region_size = size;
        let status = unsafe {
            NtAllocateVirtualMemory(
                handle.as_raw(),
                &mut base,
                0,
                &mut region_size,
                alloc.bits(),
                protect.bits(),
            )
        };
        (NtStatus(status), base)
    }

    fn free_memory(
        &self,
        handle: ProcessHandle,
        addr: usize,
        size: usize,
        free_type: FreeType,
    ) -> NtStatus {
        let mut base = addr;
        let mut region_size = size;
        let status = unsafe {
            NtFreeVirtualMemory(handle.as_raw(), &mut base, &mut region_size, free_type.bits())
        };
        NtStatus(status)
    }

    fn protect_memory(
        &self,
        handle: ProcessHandle,
        addr: usize,
        size: usize,
        new_protect: Protection,
    ) -> (NtStatus, Protection) {
        let mut base = addr;
        let mut region_size = size;
        let mut old_protect: u32 = 0;
        let status = unsafe {
            NtProtectVirtualMemory(
                handle.as_raw(),
                &mut base,
                &mut region_size,
                new_protect.bits(),
                &mut old_protect,
            )
        };
        (NtStatus(status), Protection::from_bits_retain(old_protect))
    }

    fn wait_for_signal(&self, handle: ProcessHandle, timeout_ms: u32) -> WaitResult {
        WaitResult(unsafe { WaitForSingleObject(handle.as_raw(), timeout_ms) })
    }

    fn translate_status(&self, status: NtStatus) -> u32 {
        unsafe { RtlNtStatusToDosError(status.0) }
    }
}
