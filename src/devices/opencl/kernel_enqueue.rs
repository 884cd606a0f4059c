use core::{
    ffi::c_void,
    ptr::{null, null_mut},
};

use min_cl::api::{clEnqueueNDRangeKernel, clSetKernelArg, OCLErrorKind};

use super::{CLPtr, Kernel, OpenCL};

/// Converts `Self` to a *const c_void.
/// This enables taking a [`CLPtr`] as an argument to an OpenCL kernel.
pub trait AsClCvoidPtr {
    fn as_cvoid_ptr(&self) -> *const c_void;
}

impl<T> AsClCvoidPtr for CLPtr<T> {
    #[inline]
    fn as_cvoid_ptr(&self) -> *const c_void {
        self.ptr
    }
}

/// Binds the memory objects `args` to the kernel arguments 0, 1, ...
pub fn set_kernel_args(kernel: &Kernel, args: &[&dyn AsClCvoidPtr]) -> crate::Result<()> {
    for (idx, arg) in args.iter().enumerate() {
        let mem = arg.as_cvoid_ptr();
        let value = unsafe {
            clSetKernelArg(
                kernel.0,
                idx as u32,
                size_of::<*const c_void>(),
                &mem as *const *const c_void as *const c_void,
            )
        };
        if value != 0 {
            return Err(OCLErrorKind::from_value(value).into());
        }
    }
    Ok(())
}

/// Enqueues a one-dimensional dispatch of `kernel` over `gws` work items
/// and returns as soon as the command is queued.
/// `lws`, if given, must divide `gws`.
pub fn enqueue_kernel(
    device: &OpenCL,
    kernel: &Kernel,
    gws: usize,
    lws: Option<usize>,
) -> crate::Result<()> {
    if gws == 0 {
        return Err(OCLErrorKind::InvalidGlobalWorkSize.into());
    }

    let gws = [gws];
    let lws = lws.map(|lws| [lws]);
    let lws = match &lws {
        Some(lws) => lws.as_ptr(),
        None => null(),
    };

    let value = unsafe {
        clEnqueueNDRangeKernel(
            device.queue().0,
            kernel.0,
            1,
            null(),
            gws.as_ptr(),
            lws,
            0,
            null(),
            null_mut(),
        )
    };
    if value != 0 {
        return Err(OCLErrorKind::from_value(value).into());
    }
    Ok(())
}

/// Rounds `len` up to the next multiple of `local`.
/// # Example
/// ```
/// use cl_vecadd::opencl::round_up;
///
/// assert_eq!(round_up(100000, 64), 100032);
/// assert_eq!(round_up(128, 64), 128);
/// ```
#[inline]
pub fn round_up(len: usize, local: usize) -> usize {
    len.div_ceil(local) * local
}

#[cfg(test)]
mod tests {
    use super::{round_up, AsClCvoidPtr};
    use crate::opencl::CLPtr;

    #[test]
    fn test_round_up() {
        assert_eq!(round_up(1, 64), 64);
        assert_eq!(round_up(64, 64), 64);
        assert_eq!(round_up(65, 64), 128);
        assert_eq!(round_up(crate::LIST_SIZE, crate::LOCAL_WORK_SIZE) % 64, 0);
    }

    #[test]
    fn test_as_cl_cvoid() {
        let ptr = CLPtr::<i32>::default();
        assert!(ptr.as_cvoid_ptr().is_null());
    }
}
