//! Zero-cost SELU activation kernels, forward and backward.
//!
//! Scaled Exponential Linear Unit, the self-normalizing activation:
//!
//! # Formula
//!
//! ```text
//! forward:  f(x) = scale * x                       if x >= 0
//!           f(x) = scale * (alpha * exp(x) - alpha)   if x < 0
//!
//! backward: f'(x) = scale                          if x >= 0
//!           f'(x) = scale * alpha * exp(x)            if x < 0
//! ```
//!
//! The default `scale`/`alpha` constants preserve zero mean / unit variance
//! of activations across layers under lecun-normal initialization. Both are
//! runtime parameters on every entry point; the constants are defaults, not
//! hard-coded values.
//!
//! # Design
//!
//! - Exactly zero takes the linear branch, in forward and backward. The
//!   analytic derivative is discontinuous at 0 (left limit `scale*alpha`,
//!   right limit `scale`); the backward kernel returns `scale` there.
//! - All functions have both in-place and out-of-place variants.
//! - Direct slice operations with `#[inline(always)]`, no heap allocation.
//! - NaN and infinity follow IEEE propagation: `exp(-inf) = 0`,
//!   `exp(NaN) = NaN`. No special-casing.
//! - Reduced-precision element types compute in f32 and round on store;
//!   f64 computes natively in f64.

use rayon::prelude::*;

use crate::traits::Element;

/// Canonical SELU scale constant.
pub const SELU_SCALE: f64 = 1.0507009873554804934193349852946;

/// Canonical SELU alpha constant.
pub const SELU_ALPHA: f64 = 1.6732632423543772848170429916717;

/// Buffers at least this large are split across the rayon pool.
const PAR_CHUNK: usize = 32 * 1024;

// ============================================================================
// Scalar helpers
// ============================================================================

/// SELU for a single value.
#[inline(always)]
pub fn selu_scalar(x: f32, scale: f32, alpha: f32) -> f32 {
    if x >= 0.0 {
        scale * x
    } else {
        scale * (alpha * x.exp() - alpha)
    }
}

/// SELU derivative for a single value.
///
/// `x == 0` is treated as the non-negative branch, returning `scale`.
#[inline(always)]
pub fn selu_grad_scalar(x: f32, scale: f32, alpha: f32) -> f32 {
    if x >= 0.0 {
        scale
    } else {
        scale * alpha * x.exp()
    }
}

/// SELU for a single f64 value.
#[inline(always)]
pub fn selu_scalar_f64(x: f64, scale: f64, alpha: f64) -> f64 {
    if x >= 0.0 {
        scale * x
    } else {
        scale * (alpha * x.exp() - alpha)
    }
}

/// SELU derivative for a single f64 value.
#[inline(always)]
pub fn selu_grad_scalar_f64(x: f64, scale: f64, alpha: f64) -> f64 {
    if x >= 0.0 {
        scale
    } else {
        scale * alpha * x.exp()
    }
}

// ============================================================================
// f32 slice kernels
// ============================================================================

/// SELU forward: `output[i] = selu(input[i])`.
#[inline(always)]
pub fn selu(input: &[f32], output: &mut [f32], scale: f32, alpha: f32) {
    debug_assert_eq!(input.len(), output.len());
    for (o, &x) in output.iter_mut().zip(input.iter()) {
        *o = selu_scalar(x, scale, alpha);
    }
}

/// SELU forward in-place: `data[i] = selu(data[i])`.
#[inline(always)]
pub fn selu_inplace(data: &mut [f32], scale: f32, alpha: f32) {
    for x in data.iter_mut() {
        *x = selu_scalar(*x, scale, alpha);
    }
}

/// SELU forward with the canonical constants.
#[inline(always)]
pub fn selu_default(input: &[f32], output: &mut [f32]) {
    selu(input, output, SELU_SCALE as f32, SELU_ALPHA as f32);
}

/// SELU forward in-place with the canonical constants.
#[inline(always)]
pub fn selu_default_inplace(data: &mut [f32]) {
    selu_inplace(data, SELU_SCALE as f32, SELU_ALPHA as f32);
}

/// SELU backward: `grad_input[i] = grad_output[i] * selu'(input[i])`.
///
/// `input` is the forward input, not the forward output.
#[inline(always)]
pub fn selu_grad(
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

/// SELU backward accumulating into the upstream-gradient buffer:
/// `grad[i] *= selu'(input[i])`.
#[inline(always)]
pub fn selu_grad_inplace(grad: &mut [f32], input: &[f32], scale: f32, alpha: f32) {
    debug_assert_eq!(grad.len(), input.len());
    for (g, &x) in grad.iter_mut().zip(input.iter()) {
        *g *= selu_grad_scalar(x, scale, alpha);
    }
}

// ============================================================================
// f64 slice kernels
// ============================================================================

/// SELU forward over f64 slices, computed natively in f64.
#[inline(always)]
pub fn selu_f64(input: &[f64], output: &mut [f64], scale: f64, alpha: f64) {
    debug_assert_eq!(input.len(), output.len());
    for (o, &x) in output.iter_mut().zip(input.iter()) {
        *o = selu_scalar_f64(x, scale, alpha);
    }
}

/// SELU backward over f64 slices, computed natively in f64.
#[inline(always)]
pub fn selu_grad_f64(
    input: &[f64],
    grad_output: &[f64],
    grad_input: &mut [f64],
    scale: f64,
    alpha: f64,
) {
    debug_assert_eq!(input.len(), grad_output.len());
    debug_assert_eq!(input.len(), grad_input.len());
    for i in 0..input.len() {
        grad_input[i] = grad_output[i] * selu_grad_scalar_f64(input[i], scale, alpha);
    }
}

// ============================================================================
// Dtype-generic kernels
// ============================================================================

/// SELU forward, generic over element precision.
///
/// f32 and f64 slices take their native paths; f16/bf16 convert each element
/// to f32, compute, and round on store.
#[inline(always)]
pub fn selu_elem<E: Element>(input: &[E], output: &mut [E], scale: f64, alpha: f64) {
    debug_assert_eq!(input.len(), output.len());

    if let (Some(x), Some(out)) = (E::as_f32_slice(input), E::as_f32_slice_mut(output)) {
        selu(x, out, scale as f32, alpha as f32);
        return;
    }
    if let (Some(x), Some(out)) = (E::as_f64_slice(input), E::as_f64_slice_mut(output)) {
        selu_f64(x, out, scale, alpha);
        return;
    }

    let (s, a) = (scale as f32, alpha as f32);
    for (o, &x) in output.iter_mut().zip(input.iter()) {
        *o = E::from_f32(selu_scalar(x.to_f32(), s, a));
    }
}

/// SELU forward in-place, generic over element precision.
#[inline(always)]
pub fn selu_elem_inplace<E: Element>(data: &mut [E], scale: f64, alpha: f64) {
    if let Some(d) = E::as_f32_slice_mut(data) {
        selu_inplace(d, scale as f32, alpha as f32);
        return;
    }
    if let Some(d) = E::as_f64_slice_mut(data) {
        for x in d.iter_mut() {
            *x = selu_scalar_f64(*x, scale, alpha);
        }
        return;
    }

    let (s, a) = (scale as f32, alpha as f32);
    for x in data.iter_mut() {
        *x = E::from_f32(selu_scalar(x.to_f32(), s, a));
    }
}

/// SELU backward, generic over element precision.
#[inline(always)]
pub fn selu_grad_elem<E: Element>(
    input: &[E],
    grad_output: &[E],
    grad_input: &mut [E],
    scale: f64,
    alpha: f64,
) {
    debug_assert_eq!(input.len(), grad_output.len());
    debug_assert_eq!(input.len(), grad_input.len());

    if let (Some(x), Some(g), Some(gi)) = (
        E::as_f32_slice(input),
        E::as_f32_slice(grad_output),
        E::as_f32_slice_mut(grad_input),
    ) {
        selu_grad(x, g, gi, scale as f32, alpha as f32);
        return;
    }
    if let (Some(x), Some(g), Some(gi)) = (
        E::as_f64_slice(input),
        E::as_f64_slice(grad_output),
        E::as_f64_slice_mut(grad_input),
    ) {
        selu_grad_f64(x, g, gi, scale, alpha);
        return;
    }

    let (s, a) = (scale as f32, alpha as f32);
    for i in 0..input.len() {
        grad_input[i] = E::from_f32(
            grad_output[i].to_f32() * selu_grad_scalar(input[i].to_f32(), s, a),
        );
    }
}

// ============================================================================
// Parallel variants
// ============================================================================

/// SELU forward, partitioned across the rayon pool for large buffers.
///
/// Elements carry no cross-element dependency, so chunks are processed with
/// no synchronization. Small buffers fall through to the serial kernel
/// (avoids rayon overhead).
pub fn par_selu(input: &[f32], output: &mut [f32], scale: f32, alpha: f32) {
    debug_assert_eq!(input.len(), output.len());
    if input.len() < PAR_CHUNK {
        selu(input, output, scale, alpha);
        return;
    }
    output
        .par_chunks_mut(PAR_CHUNK)
        .zip(input.par_chunks(PAR_CHUNK))
        .for_each(|(o, x)| selu(x, o, scale, alpha));
}

/// SELU backward, partitioned across the rayon pool for large buffers.
pub fn par_selu_grad(
    input: &[f32],
    grad_output: &[f32],
    grad_input: &mut [f32],
    scale: f32,
    alpha: f32,
) {
    debug_assert_eq!(input.len(), grad_output.len());
    debug_assert_eq!(input.len(), grad_input.len());
    if input.len() < PAR_CHUNK {
        selu_grad(input, grad_output, grad_input, scale, alpha);
        return;
    }
    grad_input
        .par_chunks_mut(PAR_CHUNK)
        .zip(input.par_chunks(PAR_CHUNK).zip(grad_output.par_chunks(PAR_CHUNK)))
        .for_each(|(gi, (x, g))| selu_grad(x, g, gi, scale, alpha));
}
