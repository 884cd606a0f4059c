// Kernel arguments are written by the device. Clippy does not know this.
// To declare that a value is mutated, a "needless" mutable reference is used.
#![allow(clippy::needless_pass_by_ref_mut)]

//! Times the element-wise addition of two integer vectors on the host CPU and on an OpenCL device.
//!
//! Both approaches implement [`VectorAdd`]: they allocate the vectors `lhs[i] = i` and
//! `rhs[i] = LIST_SIZE - i`, add them and report how long the addition took in microseconds.
//! The host loop is timed as a whole; for OpenCL only the kernel dispatch (the enqueue call) is timed.
//!
#![cfg_attr(feature = "cpu", doc = "```")]
#![cfg_attr(not(feature = "cpu"), doc = "```ignore")]
//! use cl_vecadd::{SequentialAdder, VectorAdd};
//!
//! fn main() -> cl_vecadd::Result<()> {
//!     let measurement = SequentialAdder::new().keep_output().measure()?;
//!
//!     let out = measurement.output.unwrap();
//!     assert!(out.iter().all(|&x| x == cl_vecadd::LIST_SIZE as i32));
//!     Ok(())
//! }
//! ```

pub use buffer::*;
pub use devices::*;
pub use error::*;
pub use op_traits::*;
pub use timer::*;

#[cfg(feature = "cpu")]
pub use devices::cpu::SequentialAdder;

#[cfg(feature = "opencl")]
pub use devices::opencl::OpenCLAdder;

pub mod devices;

mod buffer;
mod error;
mod op_traits;
mod timer;

/// The number of elements of every benchmark vector.
pub const LIST_SIZE: usize = 100000;

/// The work-group size of the OpenCL dispatch.
pub const LOCAL_WORK_SIZE: usize = 64;

/// The kernel source file, relative to the working directory.
pub const KERNEL_PATH: &str = "vector_add_kernel.cl";

/// The entry point in [`KERNEL_PATH`].
pub const KERNEL_NAME: &str = "vector_add";

/// Kernel sources are truncated to this many bytes.
pub const MAX_SOURCE_SIZE: usize = 0x100000;
