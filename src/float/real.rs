use crate::common::{check_size, FftError};
use num_complex::Complex32;
use super::core::{dit_combine, inverse, reverse_bits, OnTheFly};

/// Forward FFT of a real signal into a separate complex buffer.
///
/// `n` is `time_domain.len()`; `freq_domain` must hold at least `n` elements
/// and receives the spectrum in its first `n`. The input is not modified.
pub fn fft(time_domain: &[f32], freq_domain: &mut [Complex32]) -> Result<(), FftError> {
    let n = time_domain.len();
    check_size(n)?;
    let freq = freq_domain.get_mut(..n).ok_or(FftError::BufferTooSmall)?;

    // Copy-in straight to bit-reversed positions, which replaces the
    // separate permutation pass.
    let bits = n.trailing_zeros();
    for (i, &sample) in time_domain.iter().enumerate() {
        freq[reverse_bits(i, bits)] = Complex32::new(sample, 0.0);
    }

    dit_combine(freq, &OnTheFly);
    Ok(())
}

/// Inverse FFT of a spectrum into a real signal.
///
/// `n` is `time_domain.len()`. The first `n` elements of `freq_domain` are used
/// as scratch and hold the complex time-domain signal afterwards; only its real
/// part is copied out; any imaginary residue is dropped.
pub fn ifft(time_domain: &mut [f32], freq_domain: &mut [Complex32]) -> Result<(), FftError> {
    let n = time_domain.len();
    check_size(n)?;
    let freq = freq_domain.get_mut(..n).ok_or(FftError::BufferTooSmall)?;

    inverse(freq, &OnTheFly);

    for (sample, z) in time_domain.iter_mut().zip(freq.iter()) {
        *sample = z.re;
    }
    Ok(())
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
