//! Runtime ISA selection for the f32 SELU kernels.
//!
//! f32 buffers route through the widest SIMD path the host supports:
//!
//! | Level | Kernel | Lanes |
//! |---|---|---|
//! | Avx512 | AVX2 kernel (falls through) | 8 x f32 |
//! | Avx2 | `avx2::avx2_selu_f32` / `avx2_selu_grad_f32` | 8 x f32 |
//! | Neon | `neon::neon_selu_f32` / `neon_selu_grad_f32` | 4 x f32 |
//! | Scalar | portable slice loop | 1 |
//!
//! A dedicated 512-bit path buys nothing for a memory-bound elementwise op,
//! so AVX-512 hosts reuse the AVX2 kernel. Non-f32 element types skip
//! dispatch entirely and use the portable generic kernels.

use std::marker::PhantomData;
use std::sync::OnceLock;

use crate::ops::selu as selu_ops;
use crate::traits::{Element, Kernels};

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod avx2;

#[cfg(target_arch = "aarch64")]
pub mod neon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsaLevel {
    Scalar,
    Avx2,
    Avx512,
    Neon,
}

static ISA_LEVEL: OnceLock<IsaLevel> = OnceLock::new();

pub fn get_isa_level() -> IsaLevel {
    *ISA_LEVEL.get_or_init(detect_isa_features)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_isa_features() -> IsaLevel {
    if is_x86_feature_detected!("avx512f") {
        IsaLevel::Avx512
    } else if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
        IsaLevel::Avx2
    } else {
        IsaLevel::Scalar
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_isa_features() -> IsaLevel {
    IsaLevel::Neon
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_isa_features() -> IsaLevel {
    IsaLevel::Scalar
}

/// SELU forward over f32 slices with runtime ISA dispatch.
#[inline]
pub fn selu_f32(input: &[f32], output: &mut [f32], scale: f32, alpha: f32) {
    debug_assert_eq!(input.len(), output.len());
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        IsaLevel::Avx2 | IsaLevel::Avx512 => unsafe {
            avx2::avx2_selu_f32(input, output, scale, alpha)
        },
        #[cfg(target_arch = "aarch64")]
        IsaLevel::Neon => unsafe { neon::neon_selu_f32(input, output, scale, alpha) },
        _ => scalar::scalar_selu(input, output, scale, alpha),
    }
}

/// SELU forward in-place over an f32 slice with runtime ISA dispatch.
#[inline]
pub fn selu_f32_inplace(data: &mut [f32], scale: f32, alpha: f32) {
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        IsaLevel::Avx2 | IsaLevel::Avx512 => unsafe {
            avx2::avx2_selu_f32_inplace(data, scale, alpha)
        },
        #[cfg(target_arch = "aarch64")]
        IsaLevel::Neon => unsafe { neon::neon_selu_f32_inplace(data, scale, alpha) },
        _ => scalar::scalar_selu_inplace(data, scale, alpha),
    }
}

/// SELU backward over f32 slices with runtime ISA dispatch.
#[inline]
pub fn selu_grad_f32(
    input: &[f32],
    grad_output: &[f32],
    grad_input: &mut [f32],
    scale: f32,
    alpha: f32,
) {
    debug_assert_eq!(input.len(), grad_output.len());
    debug_assert_eq!(input.len(), grad_input.len());
    match get_isa_level() {
        #[cfg(target_arch = "x86_64")]
        IsaLevel::Avx2 | IsaLevel::Avx512 => unsafe {
            avx2::avx2_selu_grad_f32(input, grad_output, grad_input, scale, alpha)
        },
        #[cfg(target_arch = "aarch64")]
        IsaLevel::Neon => unsafe {
            neon::neon_selu_grad_f32(input, grad_output, grad_input, scale, alpha)
        },
        _ => scalar::scalar_selu_grad(input, grad_output, grad_input, scale, alpha),
    }
}

/// CPU kernel set for element type `E`.
///
/// f32 routes through ISA dispatch; every other precision uses the portable
/// generic kernels.
pub struct CpuKernels<E: Element> {
    _phantom: PhantomData<E>,
}

impl<E: Element> CpuKernels<E> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<E: Element> Default for CpuKernels<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> Kernels<E> for CpuKernels<E> {
    fn selu(&self, x: &[E], out: &mut [E], scale: f64, alpha: f64) {
        if let (Some(x), Some(out)) = (E::as_f32_slice(x), E::as_f32_slice_mut(out)) {
            selu_f32(x, out, scale as f32, alpha as f32);
        } else {
            selu_ops::selu_elem(x, out, scale, alpha);
        }
    }

    fn selu_inplace(&self, data: &mut [E], scale: f64, alpha: f64) {
        if let Some(data) = E::as_f32_slice_mut(data) {
            selu_f32_inplace(data, scale as f32, alpha as f32);
        } else {
            selu_ops::selu_elem_inplace(data, scale, alpha);
        }
    }

    fn selu_grad(&self, x: &[E], grad_out: &[E], grad_in: &mut [E], scale: f64, alpha: f64) {
        if let (Some(x), Some(g), Some(gi)) = (
            E::as_f32_slice(x),
            E::as_f32_slice(grad_out),
            E::as_f32_slice_mut(grad_in),
        ) {
            selu_grad_f32(x, g, gi, scale as f32, alpha as f32);
        } else {
            selu_ops::selu_grad_elem(x, grad_out, grad_in, scale, alpha);
        }
    }
}
