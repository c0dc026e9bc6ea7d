#![allow(dead_code)]

use rand::Rng;

/// Memory throughput GiB/s
pub fn throughput_gibs(bytes: usize, duration_secs: f64) -> f64 {
    bytes as f64 / duration_secs / (1024.0 * 1024.0 * 1024.0)
}

/// Read/write bytes for the forward kernel (in + out, f32)
pub fn forward_rw_bytes(n: usize) -> u64 {
    2 * n as u64 * 4
}

/// Read/write bytes for the backward kernel (input + grad_out + grad_in, f32)
pub fn backward_rw_bytes(n: usize) -> u64 {
    3 * n as u64 * 4
}

/// Random f32 vector in [-4.0, 4.0), covering both SELU branches
pub fn random_f32_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-4.0..4.0)).collect()
}
