use std::{io, path::PathBuf};

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = core::result::Result<T, Error>;

/// Downcasts a boxed [`Error`] to a concrete error kind.
/// # Example
/// ```
/// use cl_vecadd::{BenchError, Error, ErrorKind};
///
/// let err = Error::from(BenchError::HostAlloc);
/// assert_eq!(err.kind(), Some(&BenchError::HostAlloc));
/// ```
pub trait ErrorKind {
    fn kind<E: std::error::Error + PartialEq + 'static>(&self) -> Option<&E>;
}

impl ErrorKind for Error {
    #[inline]
    fn kind<E: std::error::Error + PartialEq + 'static>(&self) -> Option<&E> {
        self.downcast_ref::<E>()
    }
}

#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum BenchError {
    HostAlloc,
    LenOverflow,
    NoPlatform,
    NoDevice,
}

impl BenchError {
    pub fn as_str(&self) -> &'static str {
        match self {
            BenchError::HostAlloc => "Couldn't allocate the host vectors (lhs, rhs or out).",
            BenchError::LenOverflow => "The vector length does not fit into an i32 element.",
            BenchError::NoPlatform => "No OpenCL platform was found.",
            BenchError::NoDevice => "The OpenCL platform exposes no default device.",
        }
    }
}

impl core::fmt::Debug for BenchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::fmt::Display for BenchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BenchError {}

/// The kernel source file could not be opened or read.
#[derive(Debug)]
pub struct KernelLoadError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl PartialEq for KernelLoadError {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.source.kind() == other.source.kind()
    }
}

impl core::fmt::Display for KernelLoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Failed to load kernel {:?}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for KernelLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{BenchError, Error, ErrorKind, KernelLoadError};

    #[test]
    fn test_print_error() {
        let err = Error::from(BenchError::HostAlloc);
        assert_eq!(
            "Couldn't allocate the host vectors (lhs, rhs or out).",
            &format!("{err}")
        );
        assert_eq!(
            "Couldn't allocate the host vectors (lhs, rhs or out).",
            &format!("{err:?}")
        );
    }

    #[test]
    fn test_kind_downcast() {
        let err = Error::from(BenchError::NoDevice);
        assert_eq!(err.kind(), Some(&BenchError::NoDevice));
        assert_eq!(err.kind::<KernelLoadError>(), None);
    }

    #[test]
    fn test_kernel_load_error_display() {
        let err = KernelLoadError {
            path: "missing.cl".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to load kernel \"missing.cl\""), "{msg}");
    }
}
