//! Common test utilities
#![allow(dead_code)]

use xorshift_mwc::{SampleSequence, Xorshift, XorshiftParams, generate_samples, sample_sequence};

/// Seeds exercised by the cross-interface tests
pub const SEEDS: [i32; 6] = [1, 42, -1, 123_456_789, i32::MIN, i32::MAX];

/// Parameter sets exercised by the cross-interface tests
pub fn param_sets() -> Vec<XorshiftParams> {
    vec![
        XorshiftParams::default(),
        XorshiftParams::new(1_103_515_245, 12_345, 1, 2),
        XorshiftParams::new(u32::MAX, u32::MAX - 1, u32::MAX, u32::MAX),
        XorshiftParams::default().with_x1(0).with_x2(0),
    ]
}

/// First `n` values from stepping a fresh engine
pub fn stepped(n: usize, seed: i32, params: XorshiftParams) -> Vec<f64> {
    let mut rng = Xorshift::with_params(seed, params).unwrap();
    (0..n).map(|_| rng.next_sample()).collect()
}

/// First `n` values from bulk generation
pub fn bulk(n: usize, seed: i32, params: XorshiftParams) -> Vec<f64> {
    generate_samples(n as isize, seed, &params).unwrap()
}

/// First `n` values from a lazy sequence
pub fn lazy(n: usize, seed: i32, params: XorshiftParams) -> Vec<f64> {
    let seq: SampleSequence = sample_sequence(seed, &params).unwrap();
    seq.take(n).collect()
}

/// Assert every value lies in [0, 1)
pub fn assert_unit_interval(values: &[f64], msg: &str) {
    for (i, v) in values.iter().enumerate() {
        assert!(
            *v >= 0.0 && *v < 1.0,
            "{}: element {} = {} out of [0, 1)",
            msg,
            i,
            v
        );
    }
}
