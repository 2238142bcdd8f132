//! Integration tests for driving `rand` APIs with the generator

use rand::{Rng, RngCore, SeedableRng};
use xorshift_mwc::{SyncXorshift, Xorshift};

#[test]
fn test_random_range_bounds() {
    let mut rng = Xorshift::new(42);
    for _ in 0..10_000 {
        let v = rng.random_range(-5i64..5);
        assert!((-5..5).contains(&v));
    }
}

#[test]
fn test_seed_from_u64_is_deterministic() {
    let mut a = Xorshift::seed_from_u64(9);
    let mut b = Xorshift::seed_from_u64(9);
    for _ in 0..100 {
        assert_eq!(a.next_sample(), b.next_sample());
    }
}

#[test]
fn test_fill_bytes_matches_words() {
    let mut words = Xorshift::new(3);
    let expected: Vec<u8> = (0..4).flat_map(|_| words.next_u32().to_le_bytes()).collect();

    let mut rng = Xorshift::new(3);
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    assert_eq!(bytes.as_slice(), expected.as_slice());
}

#[test]
fn test_shared_reference_is_rng() {
    let shared = SyncXorshift::new(10);
    let mut handle = &shared;
    let v: f64 = handle.random();
    assert!((0.0..1.0).contains(&v));

    let mut reference = Xorshift::new(10);
    reference.next_u64();
    assert_eq!(shared.next_u32(), reference.next_u32());
}
