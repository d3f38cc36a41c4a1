//! Store a body-state buffer, load it back and compare
//!
//! Usage: cargo run --example roundtrip -- [path] [count]

use floatbuf::fatal::{load_or_exit, store_or_exit};
use std::time::Instant;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "bodies.bin".to_string());
    let count: usize = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4 * 1024);

    // x, y, z, mass per body
    let bodies: Vec<f32> = (0..count)
        .map(|i| match i % 4 {
            3 => 1.0 + (i / 4) as f32 * 1e-3,
            axis => ((i / 4) as f32 * 0.1 + axis as f32).cos(),
        })
        .collect();

    let start = Instant::now();
    store_or_exit(&path, &bodies);
    println!("Stored {count} floats to {path} in {:?}", start.elapsed());

    let mut restored = vec![0.0f32; count];
    let start = Instant::now();
    load_or_exit(&path, &mut restored);
    println!("Loaded {count} floats from {path} in {:?}", start.elapsed());

    let identical = bodies
        .iter()
        .zip(&restored)
        .all(|(a, b)| a.to_bits() == b.to_bits());
    println!("Bit-identical: {identical}");
}
