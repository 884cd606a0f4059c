//! The OpenCL side of the benchmark.

pub use adder::*;
pub use cl_device::*;
pub use cl_ptr::*;
pub use kernel_enqueue::*;
pub use source::*;

pub use min_cl::{api, CLDevice};

mod adder;
mod cl_device;
mod cl_ptr;
mod kernel_enqueue;
mod source;

/// Reads the environment variable `CL_VECADD_REQUIRE_DEVICE`.
/// If it is set, a missing OpenCL platform or device is not a reason to skip a device test.
pub fn device_required() -> bool {
    std::env::var_os("CL_VECADD_REQUIRE_DEVICE").is_some()
}
