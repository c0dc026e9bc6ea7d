//! Zero-cost validation utilities for kernel parameters.
//!
//! All validation functions return `Result<(), String>` for flexible error
//! conversion; the dispatcher maps String errors to `KernelError`. Scalar
//! parameters (`scale`, `alpha`) are never validated — the kernel applies
//! whatever values the caller supplies.

/// Validate that an elementwise input/output pair has matching lengths.
#[inline]
pub fn validate_elementwise_len(input_len: usize, output_len: usize) -> Result<(), String> {
    if input_len != output_len {
        return Err(format!(
            "input len {} != output len {}",
            input_len, output_len
        ));
    }
    Ok(())
}

/// Validate backward-pass buffer lengths against the forward input.
#[inline]
pub fn validate_grad_len(
    input_len: usize,
    grad_output_len: usize,
    grad_input_len: usize,
) -> Result<(), String> {
    if grad_output_len != input_len {
        return Err(format!(
            "grad_output len {} != input len {}",
            grad_output_len, input_len
        ));
    }
    if grad_input_len != input_len {
        return Err(format!(
            "grad_input len {} != input len {}",
            grad_input_len, input_len
        ));
    }
    Ok(())
}
