//! Zero-cost kernel dispatcher with runtime ISA selection.
//!
//! Uses generics for f32/f64/f16/bf16 support - compile-time
//! monomorphization = zero cost. The ISA level is detected once; f32
//! buffers take the widest available SIMD path, other precisions run the
//! portable kernels.

use thiserror::Error;

use crate::cpu_kernels::{get_isa_level, CpuKernels, IsaLevel};
use crate::ops::selu::{SELU_ALPHA, SELU_SCALE};
use crate::traits::{Element, Kernels};
use crate::validation::{validate_elementwise_len, validate_grad_len};

/// Errors surfaced by the checked dispatcher entry points.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Input/output/gradient buffer lengths disagree.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Configuration for the SELU kernels.
///
/// Both parameters are applied per invocation; `Default` supplies the
/// canonical self-normalizing constants. Non-positive values are applied
/// as given - the function stays defined, it just loses its
/// self-normalizing justification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeluConfig {
    pub scale: f64,
    pub alpha: f64,
}

impl Default for SeluConfig {
    fn default() -> Self {
        Self {
            scale: SELU_SCALE,
            alpha: SELU_ALPHA,
        }
    }
}

impl SeluConfig {
    pub fn new(scale: f64, alpha: f64) -> Self {
        Self { scale, alpha }
    }
}

/// Dispatches SELU forward/backward to the best kernel for the host CPU.
#[derive(Debug, Clone, Copy)]
pub struct KernelDispatcher {
    isa: IsaLevel,
}

impl KernelDispatcher {
    /// Detect the ISA level and build a dispatcher.
    pub fn new() -> Self {
        let isa = get_isa_level();
        log::debug!("selu kernels: {:?} code path selected", isa);
        Self { isa }
    }

    /// The ISA level this dispatcher routes f32 buffers through.
    pub fn isa_level(&self) -> IsaLevel {
        self.isa
    }

    /// SELU forward: `output[i] = selu(input[i])`.
    ///
    /// Lengths must match; debug-asserted only. Use [`try_forward`] for a
    /// checked entry point.
    ///
    /// [`try_forward`]: KernelDispatcher::try_forward
    pub fn forward<E: Element>(&self, input: &[E], output: &mut [E], config: &SeluConfig) {
        CpuKernels::<E>::new().selu(input, output, config.scale, config.alpha);
    }

    /// SELU forward, in place.
    pub fn forward_inplace<E: Element>(&self, data: &mut [E], config: &SeluConfig) {
        CpuKernels::<E>::new().selu_inplace(data, config.scale, config.alpha);
    }

    /// SELU backward: `grad_input[i] = grad_output[i] * selu'(input[i])`.
    ///
    /// `input` is the forward input. Lengths must match; debug-asserted
    /// only. Use [`try_backward`] for a checked entry point.
    ///
    /// [`try_backward`]: KernelDispatcher::try_backward
    pub fn backward<E: Element>(
        &self,
        input: &[E],
        grad_output: &[E],
        grad_input: &mut [E],
        config: &SeluConfig,
    ) {
        CpuKernels::<E>::new().selu_grad(input, grad_output, grad_input, config.scale, config.alpha);
    }

    /// Checked SELU forward.
    pub fn try_forward<E: Element>(
        &self,
        input: &[E],
        output: &mut [E],
        config: &SeluConfig,
    ) -> Result<(), KernelError> {
        validate_elementwise_len(input.len(), output.len()).map_err(KernelError::ShapeMismatch)?;
        self.forward(input, output, config);
        Ok(())
    }

    /// Checked SELU backward.
    pub fn try_backward<E: Element>(
        &self,
        input: &[E],
        grad_output: &[E],
        grad_input: &mut [E],
        config: &SeluConfig,
    ) -> Result<(), KernelError> {
        validate_grad_len(input.len(), grad_output.len(), grad_input.len())
            .map_err(KernelError::ShapeMismatch)?;
        self.backward(input, grad_output, grad_input, config);
        Ok(())
    }
}

impl Default for KernelDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
