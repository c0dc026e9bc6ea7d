#[cfg(test)]
#[cfg(target_arch = "x86_64")]
mod tests {
    use crate::cpu_kernels::avx2::{avx2_selu_f32, avx2_selu_f32_inplace, avx2_selu_grad_f32};
    use crate::cpu_kernels::scalar;
    use crate::cpu_kernels::{get_isa_level, CpuKernels, IsaLevel};
    use crate::ops::selu::{SELU_ALPHA, SELU_SCALE};
    use crate::traits::Kernels;

    fn test_input(n: usize) -> Vec<f32> {
        // Covers both branches, the boundary, and large magnitudes
        (0..n).map(|i| ((i as f32) * 0.37).sin() * 6.0 - 0.5).collect()
    }

    #[test]
    fn test_avx2_selu_matches_scalar() {
        if !is_x86_feature_detected!("avx2") || !is_x86_feature_detected!("fma") {
            println!("Skipping AVX2 test: AVX2/FMA not supported");
            return;
        }

        // 67 exercises both the 8-lane body and the scalar tail
        for n in [8usize, 64, 67] {
            let input = test_input(n);
            let mut simd = vec![0.0; n];
            let mut reference = vec![0.0; n];

            unsafe { avx2_selu_f32(&input, &mut simd, SELU_SCALE as f32, SELU_ALPHA as f32) };
            scalar::scalar_selu(&input, &mut reference, SELU_SCALE as f32, SELU_ALPHA as f32);

            for i in 0..n {
                assert!(
                    (simd[i] - reference[i]).abs() < 1e-6,
                    "lane {}: avx2 {} vs scalar {} (x = {})",
                    i,
                    simd[i],
                    reference[i],
                    input[i]
                );
            }
        }
    }

    #[test]
    fn test_avx2_selu_inplace_matches_scalar() {
        if !is_x86_feature_detected!("avx2") || !is_x86_feature_detected!("fma") {
            return;
        }

        let input = test_input(61);
        let mut simd = input.clone();
        let mut reference = vec![0.0; input.len()];

        unsafe { avx2_selu_f32_inplace(&mut simd, 1.5, 2.0) };
        scalar::scalar_selu(&input, &mut reference, 1.5, 2.0);

        for i in 0..input.len() {
            assert!((simd[i] - reference[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_avx2_selu_grad_matches_scalar() {
        if !is_x86_feature_detected!("avx2") || !is_x86_feature_detected!("fma") {
            return;
        }

        let n = 67;
        let input = test_input(n);
        let grad_out: Vec<f32> = (0..n).map(|i| (i as f32) * 0.01 - 0.3).collect();
        let mut simd = vec![0.0; n];
        let mut reference = vec![0.0; n];

        unsafe {
            avx2_selu_grad_f32(
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
            assert!(
                (simd[i] - reference[i]).abs() < 1e-6,
                "lane {}: avx2 grad {} vs scalar {}",
                i,
                simd[i],
                reference[i]
            );
        }
    }

    #[test]
    fn test_avx2_dispatch() {
        if get_isa_level() != IsaLevel::Avx2 && get_isa_level() != IsaLevel::Avx512 {
            println!(
                "Skipping AVX2 dispatch test: Current level {:?} < Avx2",
                get_isa_level()
            );
            return;
        }

        // CpuKernels should dispatch to the AVX2 path and agree with scalar
        let kernels = CpuKernels::<f32>::new();
        let input = test_input(40);
        let mut out = vec![0.0; 40];
        let mut reference = vec![0.0; 40];

        kernels.selu(&input, &mut out, SELU_SCALE, SELU_ALPHA);
        scalar::scalar_selu(&input, &mut reference, SELU_SCALE as f32, SELU_ALPHA as f32);

        for i in 0..40 {
            assert!((out[i] - reference[i]).abs() < 1e-6);
        }
    }
}
