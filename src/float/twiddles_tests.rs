use super::TwiddleCache;
use crate::common::{FftError, FftProcess};
use crate::float::core::twiddle;
use num_complex::Complex32;
use std::sync::Arc;
use std::thread;
use std::vec;
use std::vec::Vec;

fn assert_complex_close(val: Complex32, expected: Complex32) {
    let tolerance = 1e-5;
    let diff = (val - expected).l1_norm();
    assert!(
        diff < tolerance,
        "Error. Expected: {}, Got: {}", expected, val
    );
}

#[test]
fn test_cache_holds_half_table() {
    for log_n in 0..11 {
        let n = 1 << log_n;
        let cache = TwiddleCache::new(n).unwrap();

        assert_eq!(cache.len(), n);
        assert!(!cache.is_empty());
        assert_eq!(cache.twiddles().len(), n / 2);

        for (k, &w) in cache.twiddles().iter().enumerate() {
            assert_complex_close(w, twiddle(k, n));
        }
    }
}

#[test]
fn test_cache_rejects_invalid_sizes() {
    for n in [0, 3, 6, 12, 1000] {
        assert_eq!(TwiddleCache::new(n).unwrap_err(), FftError::InvalidSize);
    }
}

#[test]
fn test_with_storage_uses_prefix() {
    let n = 16;
    let mut storage = vec![Complex32::new(7.0, 7.0); 12];

    let cache = TwiddleCache::with_storage(&mut storage, n).unwrap();
    let owned = TwiddleCache::new(n).unwrap();
    assert_eq!(cache.len(), n);
    assert_eq!(cache.twiddles(), owned.twiddles());
    drop(cache);

    // Tail past n/2 is left alone.
    assert!(storage[n / 2..].iter().all(|&w| w == Complex32::new(7.0, 7.0)));
}

#[test]
fn test_with_storage_too_small() {
    let mut storage = vec![Complex32::default(); 3];
    assert_eq!(
        TwiddleCache::with_storage(&mut storage, 8).unwrap_err(),
        FftError::BufferTooSmall
    );
    assert_eq!(
        TwiddleCache::with_storage(&mut storage, 5).unwrap_err(),
        FftError::InvalidSize
    );
}

#[test]
fn test_process_size_mismatch() {
    let cache = TwiddleCache::new(8).unwrap();
    let mut buffer = vec![Complex32::default(); 16];
    assert_eq!(cache.process(&mut buffer, false), Err(FftError::SizeMismatch));
    assert_eq!(cache.process(&mut buffer, true), Err(FftError::SizeMismatch));

    let mut odd = vec![Complex32::default(); 3];
    assert_eq!(cache.process(&mut odd, false), Err(FftError::InvalidSize));
}

#[test]
fn test_cache_shared_between_threads() {
    let n = 256;
    let cache = Arc::new(TwiddleCache::new(n).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let input: Vec<Complex32> = (0..n)
                    .map(|i| Complex32::new(((i * (t + 1)) % 7) as f32, 0.0))
                    .collect();
                let mut buffer = input.clone();
                cache.process(&mut buffer, false).unwrap();
                cache.process(&mut buffer, true).unwrap();
                buffer
                    .iter()
                    .zip(input.iter())
                    .all(|(a, b)| (a - b).l1_norm() < 1e-3)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
