pub mod complex;
pub mod real;
pub mod twiddles;
mod core;

pub use crate::common::{ FftError, FftProcess };
pub use complex::{ fft_inplace, fft_inplace_cached, ifft_inplace, ifft_inplace_cached };
pub use real::{ fft, ifft };
pub use twiddles::TwiddleCache;

/// Reorders `buffer` into bit-reversed index order, in place.
///
/// The permutation is its own inverse. Fails with [`FftError::InvalidSize`]
/// unless the length is a non-zero power of two.
pub fn bit_reverse_permute<T>(buffer: &mut [T]) -> Result<(), FftError> {
    crate::common::check_size(buffer.len())?;
    core::bit_reverse(buffer);
    Ok(())
}
