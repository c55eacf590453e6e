#![no_std]

// Enables the standard library only for tests,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod common;
pub mod float;

pub use common::{FftError, FftProcess};
pub use float::{
    bit_reverse_permute, fft, fft_inplace, fft_inplace_cached, ifft, ifft_inplace,
    ifft_inplace_cached, TwiddleCache,
};
