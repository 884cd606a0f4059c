use std::path::PathBuf;

use min_cl::api::MemFlags;

use super::{enqueue_kernel, round_up, set_kernel_args, KernelSource, OpenCL};
use crate::{
    HostBuffers, Measurement, Stopwatch, VectorAdd, KERNEL_NAME, KERNEL_PATH, LIST_SIZE,
    LOCAL_WORK_SIZE,
};

/// Adds the benchmark vectors with one dispatch of the `vector_add` OpenCL kernel.
///
/// Only the enqueue call of the dispatch is timed: the stopwatch stops as soon as the command is
/// queued, so the measurement is the dispatch latency, not the execution time on the device.
/// # Example
/// ```no_run
/// use cl_vecadd::{OpenCLAdder, VectorAdd};
///
/// fn main() -> cl_vecadd::Result<()> {
///     let measurement = OpenCLAdder::new().keep_output().measure()?;
///     assert!(measurement.output.unwrap().iter().all(|&x| x == 100000));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OpenCLAdder {
    kernel_path: PathBuf,
    len: usize,
    keep_output: bool,
}

impl Default for OpenCLAdder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl OpenCLAdder {
    #[inline]
    pub fn new() -> Self {
        OpenCLAdder {
            kernel_path: KERNEL_PATH.into(),
            len: LIST_SIZE,
            keep_output: false,
        }
    }

    /// Loads the kernel source from `path` instead of [`KERNEL_PATH`].
    #[inline]
    pub fn with_kernel_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.kernel_path = path.into();
        self
    }

    /// Uses vectors of `len` elements instead of [`LIST_SIZE`].
    #[inline]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Reads the result back from the device after the queue finished
    /// and returns it in [`Measurement::output`].
    #[inline]
    pub fn keep_output(mut self) -> Self {
        self.keep_output = true;
        self
    }
}

impl VectorAdd for OpenCLAdder {
    #[inline]
    fn label(&self) -> &'static str {
        "opencl"
    }

    fn measure(&self) -> crate::Result<Measurement> {
        let host = HostBuffers::new(self.len)?;

        // must fail before any device is touched
        let src = KernelSource::load(&self.kernel_path)?;

        let device = OpenCL::new()?;

        // the kernel has no length argument, so the device buffers cover every work item
        let gws = round_up(self.len, LOCAL_WORK_SIZE);

        let mut lhs = device.alloc::<i32>(gws, MemFlags::MemReadOnly as u64)?;
        let mut rhs = device.alloc::<i32>(gws, MemFlags::MemReadOnly as u64)?;
        let out = device.alloc::<i32>(gws, MemFlags::MemWriteOnly as u64)?;

        device.write(&mut lhs, &host.lhs)?;
        device.write(&mut rhs, &host.rhs)?;

        let compiled = device.build_kernel(&src, KERNEL_NAME)?;
        drop(src);

        set_kernel_args(&compiled.kernel, &[&lhs, &rhs, &out])?;

        let watch = Stopwatch::start();
        enqueue_kernel(&device, &compiled.kernel, gws, Some(LOCAL_WORK_SIZE))?;
        let elapsed = watch.stop();

        device.flush()?;
        device.finish()?;

        let output = if self.keep_output {
            Some(device.read(&out, self.len)?)
        } else {
            None
        };

        drop(compiled);
        drop((lhs, rhs, out));
        drop(device);
        drop(host);

        Ok(Measurement { elapsed, output })
    }
}
