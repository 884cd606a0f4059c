use crate::BenchError;

/// The two input vectors and the zeroed output vector of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBuffers<T> {
    pub lhs: Vec<T>,
    pub rhs: Vec<T>,
    pub out: Vec<T>,
}

impl HostBuffers<i32> {
    /// Allocates the three vectors and fills the inputs with `lhs[i] = i` and `rhs[i] = len - i`.
    /// # Example
    /// ```
    /// use cl_vecadd::HostBuffers;
    ///
    /// fn main() -> cl_vecadd::Result<()> {
    ///     let buffers = HostBuffers::new(4)?;
    ///     assert_eq!(buffers.lhs, [0, 1, 2, 3]);
    ///     assert_eq!(buffers.rhs, [4, 3, 2, 1]);
    ///     assert_eq!(buffers.out, [0; 4]);
    ///     Ok(())
    /// }
    /// ```
    pub fn new(len: usize) -> Result<Self, BenchError> {
        let n = i32::try_from(len).map_err(|_| BenchError::LenOverflow)?;

        let mut lhs = try_alloc(len)?;
        let mut rhs = try_alloc(len)?;
        let out = zeroed(len)?;

        lhs.extend(0..n);
        rhs.extend((0..n).map(|i| n - i));

        Ok(HostBuffers { lhs, rhs, out })
    }
}

impl<T> HostBuffers<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }
}

fn try_alloc<T>(len: usize) -> Result<Vec<T>, BenchError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|_| BenchError::HostAlloc)?;
    Ok(vec)
}

fn zeroed<T: Default + Clone>(len: usize) -> Result<Vec<T>, BenchError> {
    let mut vec = try_alloc(len)?;
    vec.resize(len, T::default());
    Ok(vec)
}
