use std::fmt::Debug;
use half::{bf16, f16};

/// Core element trait for kernel operations.
///
/// Provides a unified interface for scalar conversions across precisions
/// (f32, f64, f16, bf16). Compile-time monomorphization, zero runtime overhead.
///
/// Reduced-precision types (f16, bf16) route all arithmetic through an f32
/// accumulator and round on store. f64 computes natively so it can serve as
/// the reference precision for the lower widths.
pub trait Element:
    Debug + Clone + Copy + Send + Sync + Default + PartialOrd + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn from_f32(v: f32) -> Self;
    fn to_f32(self) -> f32;

    /// Zero-cost transmute to f32 slice when Self == f32.
    /// Returns None for non-f32 types (caller must convert element-by-element).
    fn as_f32_slice(s: &[Self]) -> Option<&[f32]>;

    /// Zero-cost transmute to mutable f32 slice when Self == f32.
    fn as_f32_slice_mut(s: &mut [Self]) -> Option<&mut [f32]>;

    /// Zero-cost transmute to f64 slice when Self == f64.
    fn as_f64_slice(s: &[Self]) -> Option<&[f64]>;

    /// Zero-cost transmute to mutable f64 slice when Self == f64.
    fn as_f64_slice_mut(s: &mut [Self]) -> Option<&mut [f64]>;
}

impl Element for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)] fn from_f32(v: f32) -> Self { v }
    #[inline(always)] fn to_f32(self) -> f32 { self }

    #[inline(always)]
    fn as_f32_slice(s: &[Self]) -> Option<&[f32]> { Some(s) }

    #[inline(always)]
    fn as_f32_slice_mut(s: &mut [Self]) -> Option<&mut [f32]> { Some(s) }

    #[inline(always)]
    fn as_f64_slice(_s: &[Self]) -> Option<&[f64]> { None }

    #[inline(always)]
    fn as_f64_slice_mut(_s: &mut [Self]) -> Option<&mut [f64]> { None }
}

impl Element for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline(always)] fn from_f32(v: f32) -> Self { v as f64 }
    #[inline(always)] fn to_f32(self) -> f32 { self as f32 }

    #[inline(always)]
    fn as_f32_slice(_s: &[Self]) -> Option<&[f32]> { None }

    #[inline(always)]
    fn as_f32_slice_mut(_s: &mut [Self]) -> Option<&mut [f32]> { None }

    #[inline(always)]
    fn as_f64_slice(s: &[Self]) -> Option<&[f64]> { Some(s) }

    #[inline(always)]
    fn as_f64_slice_mut(s: &mut [Self]) -> Option<&mut [f64]> { Some(s) }
}

impl Element for f16 {
    const ZERO: Self = f16::ZERO;
    const ONE: Self = f16::ONE;

    #[inline(always)] fn from_f32(v: f32) -> Self { f16::from_f32(v) }
    #[inline(always)] fn to_f32(self) -> f32 { f16::to_f32(self) }

    #[inline(always)] fn as_f32_slice(_s: &[Self]) -> Option<&[f32]> { None }
    #[inline(always)] fn as_f32_slice_mut(_s: &mut [Self]) -> Option<&mut [f32]> { None }
    #[inline(always)] fn as_f64_slice(_s: &[Self]) -> Option<&[f64]> { None }
    #[inline(always)] fn as_f64_slice_mut(_s: &mut [Self]) -> Option<&mut [f64]> { None }
}

impl Element for bf16 {
    const ZERO: Self = bf16::ZERO;
    const ONE: Self = bf16::ONE;

    #[inline(always)] fn from_f32(v: f32) -> Self { bf16::from_f32(v) }
    #[inline(always)] fn to_f32(self) -> f32 { bf16::to_f32(self) }

    #[inline(always)] fn as_f32_slice(_s: &[Self]) -> Option<&[f32]> { None }
    #[inline(always)] fn as_f32_slice_mut(_s: &mut [Self]) -> Option<&mut [f32]> { None }
    #[inline(always)] fn as_f64_slice(_s: &[Self]) -> Option<&[f64]> { None }
    #[inline(always)] fn as_f64_slice_mut(_s: &mut [Self]) -> Option<&mut [f64]> { None }
}

/// The compute kernels exposed by a backend, parameterized by element precision.
///
/// `scale` and `alpha` are true runtime parameters supplied per invocation;
/// implementations must never bake in the canonical defaults.
pub trait Kernels<E: Element>: Send + Sync {
    /// SELU forward: `out[i] = selu(x[i])`.
    fn selu(&self, x: &[E], out: &mut [E], scale: f64, alpha: f64);

    /// SELU forward, in place.
    fn selu_inplace(&self, data: &mut [E], scale: f64, alpha: f64);

    /// SELU backward: `grad_in[i] = grad_out[i] * selu'(x[i])`.
    fn selu_grad(&self, x: &[E], grad_out: &[E], grad_in: &mut [E], scale: f64, alpha: f64);
}
