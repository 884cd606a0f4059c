use core::{ffi::c_void, ops::Deref, ptr::null_mut};
use std::{ffi::CString, fmt::Debug};

use min_cl::{
    api::{
        build_program, clCreateKernel, clCreateProgramWithSource, clFinish, clGetPlatformIDs,
        clGetProgramBuildInfo, clReleaseKernel, create_buffer, enqueue_read_buffer,
        enqueue_write_buffer, wait_for_event, OCLErrorKind, Program,
    },
    CLDevice,
};

use super::{CLPtr, KernelSource, ProgramBuildError};
use crate::{BenchError, ErrorKind};

const CL_DEVICE_NOT_FOUND: i32 = -1;
const CL_INVALID_VALUE: i32 = -30;
const CL_PLATFORM_NOT_FOUND_KHR: i32 = -1001;
const CL_PROGRAM_BUILD_LOG: u32 = 0x1183;

#[cfg_attr(target_os = "macos", link(name = "OpenCL", kind = "framework"))]
#[cfg_attr(not(target_os = "macos"), link(name = "OpenCL"))]
unsafe extern "system" {
    fn clFlush(command_queue: *mut c_void) -> i32;
}

/// The OpenCL device of the benchmark: the first device of the first platform.
/// # Example
/// ```no_run
/// use cl_vecadd::opencl::{api::MemFlags, OpenCL};
///
/// fn main() -> cl_vecadd::Result<()> {
///     let device = OpenCL::new()?;
///
///     let mut buf = device.alloc::<i32>(4, MemFlags::MemReadWrite as u64)?;
///     device.write(&mut buf, &[1, 2, 3, 4])?;
///     assert_eq!(device.read(&buf, 4)?, [1, 2, 3, 4]);
///     Ok(())
/// }
/// ```
pub struct OpenCL {
    /// The underlying OpenCL device. Owns the context and the in-order command queue.
    pub device: CLDevice,
}

impl Deref for OpenCL {
    type Target = CLDevice;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

/// An OpenCL kernel object, released on drop.
#[derive(Debug)]
pub struct Kernel(pub *mut c_void);

impl Drop for Kernel {
    fn drop(&mut self) {
        let value = unsafe { clReleaseKernel(self.0) };
        if value != 0 {
            eprintln!(
                "Failed to release OpenCL kernel: {}",
                OCLErrorKind::from_value(value)
            );
        }
    }
}

/// A built program and the kernel created from it.
/// The kernel is released before its program.
pub struct CompiledKernel {
    pub kernel: Kernel,
    pub program: Program,
}

impl OpenCL {
    /// Returns the device at index 0 of the first platform.
    /// # Errors
    /// - [`BenchError::NoPlatform`] if no platform is installed
    /// - [`BenchError::NoDevice`] if the platform exposes no device
    /// - Creating the context or command queue failed
    pub fn new() -> crate::Result<OpenCL> {
        let mut count = 0;
        let value = unsafe { clGetPlatformIDs(0, null_mut(), &mut count) };
        check_platforms(value, count)?;

        let device = CLDevice::new(0).map_err(|err| no_device(err.into()))?;
        Ok(OpenCL { device })
    }

    /// Creates an uninitialized memory object of `len` elements.
    pub fn alloc<T>(&self, len: usize, flags: u64) -> crate::Result<CLPtr<T>> {
        let ptr = create_buffer::<T>(self.ctx(), flags, len, None)?;
        Ok(unsafe { CLPtr::from_raw(ptr, len) })
    }

    /// Blocking copy of `data` to the start of `buf`.
    pub fn write<T>(&self, buf: &mut CLPtr<T>, data: &[T]) -> crate::Result<()> {
        if data.len() > buf.len() {
            return Err(OCLErrorKind::from_value(CL_INVALID_VALUE).into());
        }
        let event = unsafe { enqueue_write_buffer(self.queue(), buf.ptr, data, true)? };
        wait_for_event(event)?;
        Ok(())
    }

    /// Blocking copy of the first `len` elements of `buf`.
    pub fn read<T: Clone + Default>(&self, buf: &CLPtr<T>, len: usize) -> crate::Result<Vec<T>> {
        if len > buf.len() {
            return Err(OCLErrorKind::from_value(CL_INVALID_VALUE).into());
        }
        let mut read = vec![T::default(); len];
        let event =
            unsafe { enqueue_read_buffer(self.queue(), buf.ptr, read.as_mut_slice(), true)? };
        wait_for_event(event)?;
        Ok(read)
    }

    /// Builds `src` for this device and creates the kernel `name` from it.
    /// # Errors
    /// A failed build returns a [`ProgramBuildError`] carrying the compiler log.
    pub fn build_kernel(&self, src: &KernelSource, name: &str) -> crate::Result<CompiledKernel> {
        let src = src.as_str();
        let strings = [src.as_ptr().cast()];
        let lengths = [src.len()];

        let mut err = 0;
        let program = unsafe {
            clCreateProgramWithSource(
                self.ctx().0,
                1,
                strings.as_ptr(),
                lengths.as_ptr(),
                &mut err,
            )
        };
        if err != 0 {
            return Err(OCLErrorKind::from_value(err).into());
        }
        let program = Program(program);

        if let Err(err) = build_program(&program, &[self.device()], None) {
            return Err(ProgramBuildError {
                reason: err.to_string(),
                log: self.build_log(&program).unwrap_or_default(),
            }
            .into());
        }

        let name = CString::new(name)?;
        let mut err = 0;
        let kernel = unsafe { clCreateKernel(program.0, name.as_ptr().cast(), &mut err) };
        if err != 0 {
            return Err(OCLErrorKind::from_value(err).into());
        }

        Ok(CompiledKernel {
            kernel: Kernel(kernel),
            program,
        })
    }

    fn build_log(&self, program: &Program) -> crate::Result<String> {
        let device = self.device().0;

        let mut size = 0;
        let value = unsafe {
            clGetProgramBuildInfo(
                program.0,
                device,
                CL_PROGRAM_BUILD_LOG,
                0,
                null_mut(),
                &mut size,
            )
        };
        if value != 0 {
            return Err(OCLErrorKind::from_value(value).into());
        }

        let mut log = vec![0u8; size];
        let value = unsafe {
            clGetProgramBuildInfo(
                program.0,
                device,
                CL_PROGRAM_BUILD_LOG,
                size,
                log.as_mut_ptr().cast(),
                null_mut(),
            )
        };
        if value != 0 {
            return Err(OCLErrorKind::from_value(value).into());
        }

        if let Some(nul) = log.iter().position(|&byte| byte == 0) {
            log.truncate(nul);
        }
        Ok(String::from_utf8_lossy(&log).into_owned())
    }

    #[inline]
    pub fn flush(&self) -> crate::Result<()> {
        check(unsafe { clFlush(self.queue().0) })
    }

    #[inline]
    pub fn finish(&self) -> crate::Result<()> {
        check(unsafe { clFinish(self.queue().0) })
    }
}

#[inline]
fn check(value: i32) -> crate::Result<()> {
    if value != 0 {
        return Err(OCLErrorKind::from_value(value).into());
    }
    Ok(())
}

/// Maps the status and platform count of `clGetPlatformIDs` to [`BenchError::NoPlatform`].
/// Without an installed platform the ICD loader returns `CL_PLATFORM_NOT_FOUND_KHR`.
fn check_platforms(value: i32, count: u32) -> crate::Result<()> {
    match value {
        CL_PLATFORM_NOT_FOUND_KHR => Err(BenchError::NoPlatform.into()),
        0 if count == 0 => Err(BenchError::NoPlatform.into()),
        value => check(value),
    }
}

fn no_device(err: crate::Error) -> crate::Error {
    let missing = err.kind() == Some(&OCLErrorKind::InvalidDeviceIdx)
        || err.kind() == Some(&OCLErrorKind::from_value(CL_DEVICE_NOT_FOUND));

    if missing { BenchError::NoDevice.into() } else { err }
}

impl Debug for OpenCL {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OpenCL {{
            name: {name:?},
            version: {version:?},
        }}",
            name = self.name(),
            version = self.version(),
        )
    }
}
