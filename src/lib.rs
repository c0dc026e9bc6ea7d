//! selu-kernels: SELU activation forward/backward kernels.
//!
//! This crate provides the Scaled Exponential Linear Unit operator as pure
//! slice kernels, with:
//! - **Runtime ISA Selection**: Automatically detects AVX2/AVX-512/NEON/scalar
//! - **Zero-Cost Abstraction**: Generic over f32/f64/f16/bf16 via monomorphization
//! - **Accumulation Policy**: f16/bf16 compute in f32 and round on store
//! - **Framework-Free Design**: Raw slice APIs, caller owns every buffer
//!
//! # Quick Start
//!
//! ```ignore
//! use selu_kernels::{KernelDispatcher, SeluConfig};
//!
//! let dispatcher = KernelDispatcher::new(); // Detect ISA level
//! dispatcher.forward(&input, &mut output, &SeluConfig::default());
//! dispatcher.backward(&input, &grad_out, &mut grad_in, &SeluConfig::default());
//! ```

pub mod cpu_kernels;
pub mod kernel_dispatcher;
pub mod ops;
pub mod traits;
pub mod validation;


// Runtime ISA detection
pub use cpu_kernels::{get_isa_level, CpuKernels, IsaLevel};

// Zero-cost dispatcher exports
pub use kernel_dispatcher::{KernelDispatcher, KernelError, SeluConfig};

// Element trait and the kernel seam
pub use traits::{Element, Kernels};

// SELU kernel exports
pub use ops::selu::{
    // Canonical constants
    SELU_ALPHA, SELU_SCALE,
    // f32 slice kernels
    selu, selu_default, selu_default_inplace, selu_grad, selu_grad_inplace, selu_inplace,
    // f64 slice kernels
    selu_f64, selu_grad_f64,
    // Dtype-generic kernels
    selu_elem, selu_elem_inplace, selu_grad_elem,
    // Scalar helpers
    selu_grad_scalar, selu_grad_scalar_f64, selu_scalar, selu_scalar_f64,
    // Parallel variants
    par_selu, par_selu_grad,
};
