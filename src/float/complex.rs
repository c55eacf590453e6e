use crate::common::{check_size, FftError, FftProcess};
use num_complex::Complex32;
use super::core::{forward, inverse, OnTheFly};
use super::twiddles::TwiddleCache;

/// Forward FFT in-place. The time-domain `signal` is overwritten with its spectrum.
///
/// Twiddle factors are evaluated on the fly; see [`fft_inplace_cached`] for
/// repeated transforms of one size.
pub fn fft_inplace(signal: &mut [Complex32]) -> Result<(), FftError> {
    check_size(signal.len())?;
    forward(signal, &OnTheFly);
    Ok(())
}

/// Inverse FFT in-place, including the 1/n normalization.
pub fn ifft_inplace(signal: &mut [Complex32]) -> Result<(), FftError> {
    check_size(signal.len())?;
    inverse(signal, &OnTheFly);
    Ok(())
}

/// Forward FFT in-place using a precomputed [`TwiddleCache`].
///
/// Fails with [`FftError::SizeMismatch`] if the cache was built for another size.
pub fn fft_inplace_cached<S: AsRef<[Complex32]>>(
    signal: &mut [Complex32],
    cache: &TwiddleCache<S>,
) -> Result<(), FftError> {
    cache.process(signal, false)
}

/// Inverse FFT in-place using a precomputed [`TwiddleCache`].
pub fn ifft_inplace_cached<S: AsRef<[Complex32]>>(
    signal: &mut [Complex32],
    cache: &TwiddleCache<S>,
) -> Result<(), FftError> {
    cache.process(signal, true)
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
