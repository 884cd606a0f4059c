use super::add_into;
use crate::{HostBuffers, LIST_SIZE, Measurement, Stopwatch, VectorAdd};

/// Adds the benchmark vectors with a plain loop on the host.
/// Only the addition itself is timed.
#[derive(Debug, Clone, Copy)]
pub struct SequentialAdder {
    len: usize,
    keep_output: bool,
}

impl Default for SequentialAdder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialAdder {
    #[inline]
    pub fn new() -> Self {
        SequentialAdder {
            len: LIST_SIZE,
            keep_output: false,
        }
    }

    /// Uses vectors of `len` elements instead of [`LIST_SIZE`].
    #[inline]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Returns the computed sum in [`Measurement::output`].
    #[inline]
    pub fn keep_output(mut self) -> Self {
        self.keep_output = true;
        self
    }
}

impl VectorAdd for SequentialAdder {
    #[inline]
    fn label(&self) -> &'static str {
        "math.h"
    }

    fn measure(&self) -> crate::Result<Measurement> {
        let HostBuffers { lhs, rhs, mut out } = HostBuffers::new(self.len)?;

        let watch = Stopwatch::start();
        add_into(&lhs, &rhs, &mut out);
        let elapsed = watch.stop();

        Ok(Measurement {
            elapsed,
            output: self.keep_output.then_some(out),
        })
    }
}
