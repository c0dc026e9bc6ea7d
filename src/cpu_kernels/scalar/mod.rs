//! Portable scalar fallback kernels, used when no SIMD path is available.

use crate::ops::selu::{selu_grad_scalar, selu_scalar};

#[inline(always)]
pub fn scalar_selu(input: &[f32], output: &mut [f32], scale: f32, alpha: f32) {
    debug_assert_eq!(input.len(), output.len());
    for (o, &x) in output.iter_mut().zip(input.iter()) {
        *o = selu_scalar(x, scale, alpha);
    }
}

#[inline(always)]
pub fn scalar_selu_inplace(data: &mut [f32], scale: f32, alpha: f32) {
    for x in data.iter_mut() {
        *x = selu_scalar(*x, scale, alpha);
    }
}

#[inline(always)]
pub fn scalar_selu_grad(
    input: &[f32],
    grad_output: &[f32],
    grad_input: &mut [f32],
    scale: f32,
    alpha: f32,
) {
    debug_assert_eq!(input.len(), grad_output.len());
    debug_assert_eq!(input.len(), grad_input.len());
    for i in 0..input.len() {
        grad_input[i] = grad_output[i] * selu_grad_scalar(input[i], scale, alpha);
    }
}
