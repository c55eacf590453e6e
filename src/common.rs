// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Transform size is zero or not a power of two.
    InvalidSize,
    /// Twiddle cache was built for a different size than the buffer.
    SizeMismatch,
    /// A buffer holds fewer elements than the transform size.
    BufferTooSmall,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize => write!(f, "Size must be a non-zero power of 2"),
            FftError::SizeMismatch => write!(f, "Twiddle cache size does not match FFT size"),
            FftError::BufferTooSmall => write!(f, "Buffer is smaller than the FFT size"),
        }
    }
}

pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Rejects sizes the radix-2 engine cannot handle (zero included).
#[inline]
pub(crate) fn check_size(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidSize)
    }
}
