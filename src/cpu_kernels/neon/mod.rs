pub mod math;

pub use math::{neon_selu_f32, neon_selu_f32_inplace, neon_selu_grad_f32};

#[cfg(test)]
mod tests;
