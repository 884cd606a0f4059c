//! This module defines the two ways the benchmark vectors are added

#[cfg(feature = "cpu")]
pub mod cpu;

#[cfg(feature = "opencl")]
pub mod opencl;
