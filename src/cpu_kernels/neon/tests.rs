#[cfg(test)]
#[cfg(target_arch = "aarch64")]
mod tests {
    use crate::cpu_kernels::neon::{neon_selu_f32, neon_selu_grad_f32};
    use crate::cpu_kernels::scalar;
    use crate::ops::selu::{SELU_ALPHA, SELU_SCALE};

    // On aarch64, NEON is always available for this project scope.

    #[test]
    fn test_neon_selu_matches_scalar() {
        // 13 exercises both the 4-lane body and the scalar tail
        for n in [4usize, 32, 13] {
            let input: Vec<f32> = (0..n).map(|i| ((i as f32) * 0.41).sin() * 5.0).collect();
            let mut simd = vec![0.0; n];
            let mut reference = vec![0.0; n];

            unsafe { neon_selu_f32(&input, &mut simd, SELU_SCALE as f32, SELU_ALPHA as f32) };
            scalar::scalar_selu(&input, &mut reference, SELU_SCALE as f32, SELU_ALPHA as f32);

            for i in 0..n {
                assert!(
                    (simd[i] - reference[i]).abs() < 1e-6,
                    "lane {}: neon {} vs scalar {}",
                    i,
                    simd[i],
                    reference[i]
                );
            }
        }
    }

    #[test]
    fn test_neon_selu_grad_matches_scalar() {
        let n = 13;
        let input: Vec<f32> = (0..n).map(|i| ((i as f32) * 0.41).sin() * 5.0).collect();
        let grad_out: Vec<f32> = (0..n).map(|i| (i as f32) * 0.05 - 0.2).collect();
        let mut simd = vec![0.0; n];
        let mut reference = vec![0.0; n];

        unsafe {
            neon_selu_grad_f32(
                &input,
                &grad_out,
                &mut simd,
                SELU_SCALE as f32,
                SELU_ALPHA as f32,
            )
        };
        scalar::scalar_selu_grad(
            &input,
            &grad_out,
            &mut reference,
            SELU_SCALE as f32,
            SELU_ALPHA as f32,
        );

        for i in 0..n {
            assert!((simd[i] - reference[i]).abs() < 1e-6);
        }
    }
}
