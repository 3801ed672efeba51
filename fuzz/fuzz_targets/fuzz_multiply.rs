#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fftmul_core::{multiply, DigitSequence};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the split point, the rest become decimal digits.
    let digits: Vec<u8> = data[1..].iter().take(4096).map(|b| b % 10).collect();
    let split = usize::from(data[0]) % (digits.len() + 1);
    let (left, right) = digits.split_at(split);

    let a = DigitSequence::from_msd_first(left);
    let b = DigitSequence::from_msd_first(right);
    let product = multiply(&a, &b);

    let to_big = |d: &[u8]| {
        if d.is_empty() {
            BigUint::default()
        } else {
            BigUint::from_radix_be(d, 10).unwrap()
        }
    };
    let expected = to_big(left) * to_big(right);
    if a.is_empty() || b.is_empty() {
        assert!(product.is_empty());
    } else if a.is_zero() || b.is_zero() {
        assert_eq!(product, DigitSequence::zero());
    } else {
        assert_eq!(product.to_string(), expected.to_string(), "a={a} b={b}");
    }
});
