use core::{ffi::c_void, marker::PhantomData, ptr::null_mut};

use min_cl::api::release_mem_object;

/// An owned OpenCL memory object holding `len` elements of `T`.
/// The memory object is released when the pointer is dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct CLPtr<T> {
    /// The pointer to the OpenCL memory object
    pub ptr: *mut c_void,
    /// The number of elements allocated
    pub len: usize,
    _marker: PhantomData<T>,
}

impl<T> CLPtr<T> {
    /// # Safety
    /// `ptr` must be a memory object of at least `len` elements that is not released elsewhere.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut c_void, len: usize) -> Self {
        CLPtr {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for CLPtr<T> {
    #[inline]
    fn default() -> Self {
        Self {
            ptr: null_mut(),
            len: 0,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for CLPtr<T> {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        if let Err(err) = unsafe { release_mem_object(self.ptr) } {
            eprintln!("Failed to release OpenCL memory object: {err}");
        }
    }
}
