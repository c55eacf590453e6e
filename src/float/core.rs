// src/float/core.rs

use num_complex::Complex32;
use core::f32::consts::PI;

/// Source of the rotation factors `exp(-2πi·k/m)` used while combining
/// segments of length `m`.
pub(crate) trait Twiddles {
    fn twiddle(&self, k: usize, m: usize) -> Complex32;
}

/// Evaluates every twiddle factor when it is needed.
pub(crate) struct OnTheFly;

impl Twiddles for OnTheFly {
    #[inline]
    fn twiddle(&self, k: usize, m: usize) -> Complex32 {
        twiddle(k, m)
    }
}

/// Computes `exp(-2πi·k/n)`.
#[inline]
pub(crate) fn twiddle(k: usize, n: usize) -> Complex32 {
    let angle = -2.0 * PI * (k as f32) / (n as f32);
    let (sin, cos) = sin_cos(angle);
    Complex32::new(cos, sin)
}

/// Fills `twiddles` with the first n/2 rotation factors of a size-n transform.
pub(crate) fn precompute_twiddles(twiddles: &mut [Complex32], n: usize) {
    for (k, w) in twiddles.iter_mut().enumerate().take(n / 2) {
        *w = twiddle(k, n);
    }
}

/// Agnostic helper for sin/cos
fn sin_cos(angle: f32) -> (f32, f32) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sinf(angle), libm::cosf(angle));
}

/// Reverses the lowest `bits` bits of `i`.
#[inline]
pub(crate) fn reverse_bits(i: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - bits)
}

/// Reorders `buffer` into bit-reversed index order. Applying it twice is a no-op.
/// The length must be a power of two.
pub(crate) fn bit_reverse<T>(buffer: &mut [T]) {
    let n = buffer.len();
    if n < 2 {
        return;
    }
    let bits = n.trailing_zeros();

    // Index 0 and n - 1 always map onto themselves.
    for i in 1..(n - 1) {
        let j = reverse_bits(i, bits);
        if j < i {
            buffer.swap(i, j);
        }
    }
}

/// Decimation-in-time butterfly stages over a bit-reversed buffer.
///
/// Level by level, each pair of adjacent half-size transforms of length `m / 2`
/// is merged into one transform of length `m`:
/// `buf[k] = p + u·b`, `buf[k + m/2] = p - u·b` with `u = exp(-2πi·k/m)`.
pub(crate) fn dit_combine<W: Twiddles>(buffer: &mut [Complex32], twiddles: &W) {
    let n = buffer.len();
    let mut m = 2;

    while m <= n {
        let half = m >> 1;
        for segment in buffer.chunks_exact_mut(m) {
            let (lo, hi) = segment.split_at_mut(half);
            for (k, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                let p = *a;
                let q = twiddles.twiddle(k, m) * *b;
                *a = p + q;
                *b = p - q;
            }
        }
        m <<= 1;
    }
}

/// Undoes [`dit_combine`], largest segments first.
///
/// Every level halves the difference of each pair, so after log2(n) levels
/// the output carries the 1/n factor of the inverse DFT without a separate
/// scaling pass. The result is left in bit-reversed order.
pub(crate) fn dit_uncombine<W: Twiddles>(buffer: &mut [Complex32], twiddles: &W) {
    let mut m = buffer.len();

    while m >= 2 {
        let half = m >> 1;
        for segment in buffer.chunks_exact_mut(m) {
            let (lo, hi) = segment.split_at_mut(half);
            for (k, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                let u = twiddles.twiddle(k, m);
                let q = (*a - *b).scale(0.5);
                let p = *a - q;
                *a = p;
                // u lies on the unit circle, so dividing by it is multiplying by its conjugate
                *b = q * u.conj();
            }
        }
        m >>= 1;
    }
}

/// Forward transform of a buffer in natural order.
pub(crate) fn forward<W: Twiddles>(buffer: &mut [Complex32], twiddles: &W) {
    bit_reverse(buffer);
    dit_combine(buffer, twiddles);
}

/// Inverse transform (including the 1/n scale) of a buffer in natural order.
pub(crate) fn inverse<W: Twiddles>(buffer: &mut [Complex32], twiddles: &W) {
    dit_uncombine(buffer, twiddles);
    bit_reverse(buffer);
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
