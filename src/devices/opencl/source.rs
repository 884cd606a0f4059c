use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    string::FromUtf8Error,
};

use crate::{KernelLoadError, MAX_SOURCE_SIZE};

/// OpenCL C source text, read once and handed to the device compiler unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelSource {
    src: String,
}

impl KernelSource {
    /// Reads at most [`MAX_SOURCE_SIZE`] bytes from `path`.
    /// # Errors
    /// A [`KernelLoadError`] if the file cannot be opened, is not UTF-8 or is empty.
    /// A character split by the size limit is dropped.
    pub fn load(path: impl AsRef<Path>) -> Result<KernelSource, KernelLoadError> {
        let path = path.as_ref();
        let load_err = |source| KernelLoadError {
            path: path.to_path_buf(),
            source,
        };

        let invalid =
            |err: FromUtf8Error| load_err(io::Error::new(io::ErrorKind::InvalidData, err));

        let file = File::open(path).map_err(load_err)?;

        let mut bytes = Vec::new();
        file.take(MAX_SOURCE_SIZE as u64)
            .read_to_end(&mut bytes)
            .map_err(load_err)?;

        let truncated = bytes.len() == MAX_SOURCE_SIZE;
        let src = match String::from_utf8(bytes) {
            Ok(src) => src,
            // the size limit split the last character
            Err(err) if truncated && err.utf8_error().error_len().is_none() => {
                let valid = err.utf8_error().valid_up_to();
                let mut bytes = err.into_bytes();
                bytes.truncate(valid);
                String::from_utf8(bytes).map_err(invalid)?
            }
            Err(err) => return Err(invalid(err)),
        };

        if src.trim().is_empty() {
            return Err(load_err(io::Error::new(
                io::ErrorKind::InvalidData,
                "kernel source is empty",
            )));
        }
        Ok(KernelSource { src })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.src
    }
}

impl From<&str> for KernelSource {
    #[inline]
    fn from(src: &str) -> Self {
        KernelSource { src: src.into() }
    }
}

/// Building an OpenCL program failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramBuildError {
    /// The error returned by `clBuildProgram`
    pub reason: String,
    /// The compiler output of the device
    pub log: String,
}

impl core::fmt::Display for ProgramBuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.reason)?;
        if !self.log.trim().is_empty() {
            write!(f, "\nbuild log:\n{}", self.log.trim_end())?;
        }
        Ok(())
    }
}

impl std::error::Error for ProgramBuildError {}
