//! Step throughput for a range of grid sizes

use std::time::Instant;

use life_canvas::{CELL_BYTES, Engine, Seed};

fn benchmark_step(size: u32, iterations: u32) -> f64 {
    let seed = Seed::Random { seed: 0x5eed, density: 0.3 };
    let Ok(mut engine) = Engine::with_seed(size, size, &seed) else {
        return 0.0;
    };

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>12} {:>12} {:>16} {:>12}", "Size", "ms/gen", "Mcells/sec", "Buffer");
    println!("{:-<56}", "");

    for size in sizes {
        let ms = benchmark_step(size, iterations);
        let cells = size as f64 * size as f64;
        let throughput = if ms > 0.0 { cells / (ms / 1000.0) / 1_000_000.0 } else { 0.0 };
        let buffer_bytes = size as usize * size as usize * CELL_BYTES;

        println!(
            "{:>12} {:>12.3} {:>16.1} {:>10.1}KB",
            format!("{}x{}", size, size),
            ms,
            throughput,
            buffer_bytes as f64 / 1024.0
        );
    }
}
