//! NEON SELU kernels for aarch64.
//!
//! Same branchless shape as the AVX2 path: both branch results are computed
//! for all 4 lanes and merged with `vbslq_f32` on an `x < 0` mask. The
//! exponential itself unpacks to scalar `exp` per lane, so lane semantics
//! are identical to the scalar kernel.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::ops::selu::{selu_grad_scalar, selu_scalar};

/// Vectorized exp(x) for NEON.
#[cfg(target_arch = "aarch64")]
#[inline]
pub unsafe fn neon_exp_f32(x: float32x4_t) -> float32x4_t {
    // Unpack, exp, pack
    let mut tmp = [0.0f32; 4];
    vst1q_f32(tmp.as_mut_ptr(), x);
    for t in tmp.iter_mut() {
        *t = t.exp();
    }
    vld1q_f32(tmp.as_ptr())
}

/// SELU forward over f32 slices, 4 lanes per iteration.
#[cfg(target_arch = "aarch64")]
pub unsafe fn neon_selu_f32(input: &[f32], output: &mut [f32], scale: f32, alpha: f32) {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len();
    let v_scale = vdupq_n_f32(scale);
    let v_scale_alpha = vdupq_n_f32(scale * alpha);
    let zero = vdupq_n_f32(0.0);
    let one = vdupq_n_f32(1.0);

    let mut i = 0;
    while i + 4 <= n {
        let x = vld1q_f32(input.as_ptr().add(i));
        let linear = vmulq_f32(x, v_scale);
        let e = neon_exp_f32(x);
        let expo = vmulq_f32(vsubq_f32(e, one), v_scale_alpha);
        let neg_mask = vcltq_f32(x, zero);
        let r = vbslq_f32(neg_mask, expo, linear);
        vst1q_f32(output.as_mut_ptr().add(i), r);
        i += 4;
    }
    while i < n {
        output[i] = selu_scalar(input[i], scale, alpha);
        i += 1;
    }
}

/// SELU forward in-place over an f32 slice, 4 lanes per iteration.
#[cfg(target_arch = "aarch64")]
pub unsafe fn neon_selu_f32_inplace(data: &mut [f32], scale: f32, alpha: f32) {
    let n = data.len();
    let v_scale = vdupq_n_f32(scale);
    let v_scale_alpha = vdupq_n_f32(scale * alpha);
    let zero = vdupq_n_f32(0.0);
    let one = vdupq_n_f32(1.0);

    let mut i = 0;
    while i + 4 <= n {
        let x = vld1q_f32(data.as_ptr().add(i));
        let linear = vmulq_f32(x, v_scale);
        let e = neon_exp_f32(x);
        let expo = vmulq_f32(vsubq_f32(e, one), v_scale_alpha);
        let neg_mask = vcltq_f32(x, zero);
        let r = vbslq_f32(neg_mask, expo, linear);
        vst1q_f32(data.as_mut_ptr().add(i), r);
        i += 4;
    }
    while i < n {
        data[i] = selu_scalar(data[i], scale, alpha);
        i += 1;
    }
}

/// SELU backward over f32 slices, 4 lanes per iteration.
#[cfg(target_arch = "aarch64")]
pub unsafe fn neon_selu_grad_f32(
    input: &[f32],
    grad_output: &[f32],
    grad_input: &mut [f32],
    scale: f32,
    alpha: f32,
) {
    debug_assert_eq!(input.len(), grad_output.len());
    debug_assert_eq!(input.len(), grad_input.len());
    let n = input.len();
    let v_scale = vdupq_n_f32(scale);
    let v_scale_alpha = vdupq_n_f32(scale * alpha);
    let zero = vdupq_n_f32(0.0);

    let mut i = 0;
    while i + 4 <= n {
        let x = vld1q_f32(input.as_ptr().add(i));
        let g = vld1q_f32(grad_output.as_ptr().add(i));
        let linear = vmulq_f32(g, v_scale);
        let e = neon_exp_f32(x);
        let expo = vmulq_f32(vmulq_f32(g, v_scale_alpha), e);
        let neg_mask = vcltq_f32(x, zero);
        let r = vbslq_f32(neg_mask, expo, linear);
        vst1q_f32(grad_input.as_mut_ptr().add(i), r);
        i += 4;
    }
    while i < n {
        grad_input[i] = grad_output[i] * selu_grad_scalar(input[i], scale, alpha);
        i += 1;
    }
}
