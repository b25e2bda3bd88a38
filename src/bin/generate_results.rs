use std::fs;
use std::io::Write;
use std::path::Path;

const THREAD_COUNTS: [u32; 5] = [2, 4, 6, 8, 12];
const MODES: [&str; 2] = ["bsp", "bspsteal"];
const SAMPLES_PER_FILE: usize = 5;

/// (dataset, sequential runtime in seconds, parallelisable fraction)
const DATASETS: [(&str, f64, f64); 3] = [
    ("small", 4.2, 0.88),
    ("mixture", 18.5, 0.92),
    ("big", 55.0, 0.95),
];

/// Amdahl-shaped parallel runtime with a per-mode coordination overhead.
/// The work-stealing variant pays less per extra thread.
fn parallel_runtime(sequential: f64, parallel_fraction: f64, mode: &str, threads: u32) -> f64 {
    let ideal = sequential * ((1.0 - parallel_fraction) + parallel_fraction / threads as f64);
    let per_thread_overhead = match mode {
        "bspsteal" => 0.006,
        _ => 0.015,
    };
    ideal * (1.0 + per_thread_overhead * threads as f64)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Emit one measurement file: the true runtime plus non-negative scheduling
/// jitter, so the minimum of the samples approaches the true runtime.
fn write_samples(path: &Path, runtime: f64, rng: &mut SimpleRng) {
    let mut file = fs::File::create(path).expect("Failed to create results file");
    for _ in 0..SAMPLES_PER_FILE {
        let jitter = rng.gauss(0.0, 0.02 * runtime).abs();
        writeln!(file, "{:.6}", runtime + jitter).expect("Failed to write sample");
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let out_dir = Path::new("results");
    fs::create_dir_all(out_dir).expect("Failed to create results directory");

    let mut n_files = 0usize;
    for &(dataset, sequential, parallel_fraction) in &DATASETS {
        write_samples(
            &out_dir.join(format!("{dataset}_sequential.txt")),
            sequential,
            &mut rng,
        );
        n_files += 1;

        for mode in MODES {
            for threads in THREAD_COUNTS {
                let runtime = parallel_runtime(sequential, parallel_fraction, mode, threads);
                write_samples(
                    &out_dir.join(format!("{dataset}_{mode}_{threads}.txt")),
                    runtime,
                    &mut rng,
                );
                n_files += 1;
            }
        }
    }

    println!(
        "Wrote {} result files ({} samples each) to {}",
        n_files,
        SAMPLES_PER_FILE,
        out_dir.display()
    );
}
