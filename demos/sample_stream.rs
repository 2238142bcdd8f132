//! Print the first few samples from each access pattern
//!
//! Run with: cargo run --example sample_stream

use xorshift_mwc::prelude::*;

fn main() -> Result<()> {
    let seed = 42;
    let params = XorshiftParams::default();

    let mut rng = Xorshift::with_params(seed, params)?;
    let stepped: Vec<f64> = (0..5).map(|_| rng.next_sample()).collect();
    let bulk = generate_samples(5, seed, &params)?;
    let lazy: Vec<f64> = sample_sequence(seed, &params)?.take(5).collect();

    println!("params: {:?}", params);
    println!("stepped: {:?}", stepped);
    println!("bulk:    {:?}", bulk);
    println!("lazy:    {:?}", lazy);
    assert_eq!(stepped, bulk);
    assert_eq!(bulk, lazy);

    match Xorshift::with_params(seed, params.with_a(params.c)) {
        Ok(_) => println!("unexpectedly accepted a == c"),
        Err(e) => println!("rejected: {}", e),
    }
    Ok(())
}
