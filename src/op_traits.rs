use crate::Elapsed;

/// The outcome of one timed vector addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub elapsed: Elapsed,
    /// The computed sum, only present if the adder was asked to keep it.
    pub output: Option<Vec<i32>>,
}

/// Implemented by every way of adding the two benchmark vectors.
/// # Example
#[cfg_attr(feature = "cpu", doc = "```")]
#[cfg_attr(not(feature = "cpu"), doc = "```ignore")]
/// use cl_vecadd::{SequentialAdder, VectorAdd};
///
/// fn main() -> cl_vecadd::Result<()> {
///     let adder = SequentialAdder::new();
///     println!("Adding vectors using {}: {}", adder.label(), adder.time_add()?);
///     Ok(())
/// }
/// ```
pub trait VectorAdd {
    /// Names the approach in the driver output.
    fn label(&self) -> &'static str;

    fn measure(&self) -> crate::Result<Measurement>;

    #[inline]
    fn time_add(&self) -> crate::Result<Elapsed> {
        Ok(self.measure()?.elapsed)
    }
}
