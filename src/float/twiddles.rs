// src/float/twiddles.rs

use crate::common::{check_size, FftError, FftProcess};
use num_complex::Complex32;
use super::core::{forward, inverse, precompute_twiddles, Twiddles};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Precomputed rotation factors for transforms of one fixed size.
///
/// Holds the n/2 factors `exp(-2πi·k/n)` for `k` in `0..n/2`. The table is
/// never written after construction, so a cache can be shared by reference
/// (or behind an `Arc`) between any number of transforms of size n.
///
/// The storage `S` is either an owned `Vec` ([`TwiddleCache::new`]) or a
/// borrowed slice filled in place ([`TwiddleCache::with_storage`]). Dropping
/// the cache releases it.
#[derive(Debug, Clone)]
pub struct TwiddleCache<S> {
    n: usize,
    lut: S,
}

#[cfg(feature = "alloc")]
impl TwiddleCache<Vec<Complex32>> {
    /// Allocates and fills the table for transforms of size `n`.
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_size(n)?;

        let mut lut = alloc::vec![Complex32::new(0.0, 0.0); n / 2];
        precompute_twiddles(&mut lut, n);
        Ok(Self { n, lut })
    }
}

impl<'a> TwiddleCache<&'a [Complex32]> {
    /// Fills caller-provided storage with the table for size `n`.
    ///
    /// `storage` must hold at least n/2 elements; only the first n/2 are
    /// used and they stay borrowed for as long as the cache lives.
    pub fn with_storage(storage: &'a mut [Complex32], n: usize) -> Result<Self, FftError> {
        check_size(n)?;
        if storage.len() < n / 2 {
            return Err(FftError::BufferTooSmall);
        }

        let (lut, _) = storage.split_at_mut(n / 2);
        precompute_twiddles(lut, n);
        Ok(Self { n, lut })
    }
}

impl<S: AsRef<[Complex32]>> TwiddleCache<S> {
    /// Transform size the table was built for.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: the smallest cache serves size 1.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The n/2 precomputed factors.
    pub fn twiddles(&self) -> &[Complex32] {
        self.lut.as_ref()
    }

    pub(crate) fn check_len(&self, n: usize) -> Result<(), FftError> {
        if n != self.n {
            return Err(FftError::SizeMismatch);
        }
        Ok(())
    }
}

impl<S: AsRef<[Complex32]>> Twiddles for TwiddleCache<S> {
    /// A segment of length `m` uses every (n/m)-th entry of the full table.
    #[inline]
    fn twiddle(&self, k: usize, m: usize) -> Complex32 {
        self.lut.as_ref()[k * (self.n / m)]
    }
}

impl<S: AsRef<[Complex32]>> FftProcess<Complex32> for TwiddleCache<S> {
    fn process(&self, buffer: &mut [Complex32], inverse_dir: bool) -> Result<(), FftError> {
        check_size(buffer.len())?;
        self.check_len(buffer.len())?;

        if inverse_dir {
            inverse(buffer, self);
        } else {
            forward(buffer, self);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "twiddles_tests.rs"]
mod tests;
