use std::hint::black_box;
use std::time::Instant;

use murmur_common::FlockConfig;
use murmur_kernel::Flock;

const DT: f32 = 1.0 / 60.0;

fn make_flock(population: usize) -> Flock {
    let config = FlockConfig {
        population,
        ..FlockConfig::default()
    };
    Flock::with_seed(config, 42).expect("default config is valid")
}

fn bench_step(population: usize, iterations: usize) {
    let mut flock = make_flock(population);

    let start = Instant::now();
    for _ in 0..iterations {
        flock.step(black_box(DT));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  step ({population} agents, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
    black_box(flock.state_hash());
}

fn bench_reset(population: usize, iterations: usize) {
    let mut flock = make_flock(population);

    let start = Instant::now();
    for _ in 0..iterations {
        flock.reset();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  reset ({population} agents, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
    black_box(flock.agent_count());
}

fn main() {
    println!("=== Flock Benchmarks ===\n");

    println!("Step (O(n^2) neighbor scan):");
    bench_step(50, 1000);
    bench_step(100, 500);
    bench_step(500, 20);

    println!("\nReset:");
    bench_reset(100, 1000);
    bench_reset(1000, 100);

    println!("\n=== Done ===");
}
