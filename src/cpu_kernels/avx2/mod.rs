pub mod math;

pub use math::{
    avx2_exp_f32, avx2_selu_f32, avx2_selu_f32_inplace, avx2_selu_grad_f32,
};

#[cfg(test)]
mod tests;
