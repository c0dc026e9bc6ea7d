//! AVX2+FMA SELU kernels.
//!
//! The piecewise branch is evaluated branchlessly: both the linear and the
//! exponential result are computed for all 8 lanes, then merged with
//! `_mm256_blendv_ps` on an `x < 0` mask. Lanes holding NaN fail the
//! comparison and take the linear branch, where `scale * NaN` propagates
//! NaN as the scalar kernel does.
//!
//! Remainder elements past the widest multiple of 8 run through the scalar
//! helpers, so dispatched and scalar results agree on every length.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::ops::selu::{selu_grad_scalar, selu_scalar};

/// Fast vectorized exp(x) for AVX2+FMA.
/// Cephes-style degree-5 polynomial with Cody-Waite range reduction.
/// Input clamped to [-87.3365, 88.376]; the lower bound keeps `k >= -126`
/// so the 2^k exponent-field construction stays in the normal range.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
pub unsafe fn avx2_exp_f32(x: __m256) -> __m256 {
    // Clamp input to avoid overflow/underflow in 2^k computation
    let x = _mm256_min_ps(
        _mm256_max_ps(x, _mm256_set1_ps(-87.336_54_f32)),
        _mm256_set1_ps(88.376_f32),
    );

    let v_log2e = _mm256_set1_ps(1.442_695_04_f32);

    // Cody-Waite range reduction: ln2 = c1 + c2 (c1 exact in float)
    let c1 = _mm256_set1_ps(-0.693_359_375_f32);
    let c2 = _mm256_set1_ps(2.121_944_4e-4_f32);

    // k = round(x * log2e); cvtps rounds to nearest under the default MXCSR mode
    let t = _mm256_mul_ps(x, v_log2e);
    let k = _mm256_cvtps_epi32(t);
    let k_ps = _mm256_cvtepi32_ps(k);

    // y = x - k*ln2 (two-step for precision)
    let mut y = _mm256_fmadd_ps(k_ps, c1, x);
    y = _mm256_fmadd_ps(k_ps, c2, y);

    // Degree-5 minimax polynomial (Horner's method)
    let one = _mm256_set1_ps(1.0_f32);
    let mut p = _mm256_set1_ps(1.987_569_15e-4_f32);
    p = _mm256_fmadd_ps(p, y, _mm256_set1_ps(1.398_199_950_7e-3_f32));
    p = _mm256_fmadd_ps(p, y, _mm256_set1_ps(8.333_451_907_3e-3_f32));
    p = _mm256_fmadd_ps(p, y, _mm256_set1_ps(4.166_579_589_4e-2_f32));
    p = _mm256_fmadd_ps(p, y, _mm256_set1_ps(1.666_666_545_9e-1_f32));
    p = _mm256_fmadd_ps(p, y, _mm256_set1_ps(5.000_000_120_1e-1_f32));
    p = _mm256_fmadd_ps(p, y, one);
    p = _mm256_fmadd_ps(p, y, one);

    // 2^k via IEEE-754 exponent manipulation: (k + 127) << 23
    let v_exp = _mm256_slli_epi32::<23>(_mm256_add_epi32(k, _mm256_set1_epi32(127)));
    let fact = _mm256_castsi256_ps(v_exp);

    _mm256_mul_ps(p, fact)
}

/// SELU forward over f32 slices, 8 lanes per iteration.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
pub unsafe fn avx2_selu_f32(input: &[f32], output: &mut [f32], scale: f32, alpha: f32) {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len();
    let v_scale = _mm256_set1_ps(scale);
    let v_scale_alpha = _mm256_set1_ps(scale * alpha);
    let zero = _mm256_setzero_ps();
    let one = _mm256_set1_ps(1.0_f32);

    let mut i = 0;
    while i + 8 <= n {
        let x = _mm256_loadu_ps(input.as_ptr().add(i));
        let linear = _mm256_mul_ps(x, v_scale);
        // scale * alpha * (exp(x) - 1)
        let e = avx2_exp_f32(x);
        let expo = _mm256_mul_ps(_mm256_sub_ps(e, one), v_scale_alpha);
        let neg_mask = _mm256_cmp_ps::<_CMP_LT_OQ>(x, zero);
        let r = _mm256_blendv_ps(linear, expo, neg_mask);
        _mm256_storeu_ps(output.as_mut_ptr().add(i), r);
        i += 8;
    }
    while i < n {
        output[i] = selu_scalar(input[i], scale, alpha);
        i += 1;
    }
}

/// SELU forward in-place over an f32 slice, 8 lanes per iteration.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
pub unsafe fn avx2_selu_f32_inplace(data: &mut [f32], scale: f32, alpha: f32) {
    let n = data.len();
    let v_scale = _mm256_set1_ps(scale);
    let v_scale_alpha = _mm256_set1_ps(scale * alpha);
    let zero = _mm256_setzero_ps();
    let one = _mm256_set1_ps(1.0_f32);

    let mut i = 0;
    while i + 8 <= n {
        let x = _mm256_loadu_ps(data.as_ptr().add(i));
        let linear = _mm256_mul_ps(x, v_scale);
        let e = avx2_exp_f32(x);
        let expo = _mm256_mul_ps(_mm256_sub_ps(e, one), v_scale_alpha);
        let neg_mask = _mm256_cmp_ps::<_CMP_LT_OQ>(x, zero);
        let r = _mm256_blendv_ps(linear, expo, neg_mask);
        _mm256_storeu_ps(data.as_mut_ptr().add(i), r);
        i += 8;
    }
    while i < n {
        data[i] = selu_scalar(data[i], scale, alpha);
        i += 1;
    }
}

/// SELU backward over f32 slices, 8 lanes per iteration.
///
/// `grad_input[i] = grad_output[i] * scale` on the non-negative branch,
/// `grad_output[i] * scale * alpha * exp(x[i])` on the negative branch.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
pub unsafe fn avx2_selu_grad_f32(
    input: &[f32],
    grad_output: &[f32],
    grad_input: &mut [f32],
    scale: f32,
    alpha: f32,
) {
    debug_assert_eq!(input.len(), grad_output.len());
    debug_assert_eq!(input.len(), grad_input.len());
    let n = input.len();
    let v_scale = _mm256_set1_ps(scale);
    let v_scale_alpha = _mm256_set1_ps(scale * alpha);
    let zero = _mm256_setzero_ps();

    let mut i = 0;
    while i + 8 <= n {
        let x = _mm256_loadu_ps(input.as_ptr().add(i));
        let g = _mm256_loadu_ps(grad_output.as_ptr().add(i));
        let linear = _mm256_mul_ps(g, v_scale);
        let e = avx2_exp_f32(x);
        let expo = _mm256_mul_ps(_mm256_mul_ps(g, v_scale_alpha), e);
        let neg_mask = _mm256_cmp_ps::<_CMP_LT_OQ>(x, zero);
        let r = _mm256_blendv_ps(linear, expo, neg_mask);
        _mm256_storeu_ps(grad_input.as_mut_ptr().add(i), r);
        i += 8;
    }
    while i < n {
        grad_input[i] = grad_output[i] * selu_grad_scalar(input[i], scale, alpha);
        i += 1;
    }
}
