//! End-to-end verification tests across kernel families.
//!
//! The per-file tests cover each kernel in isolation; these exercise the
//! properties that tie the library together:
//!
//! - **Convolution algebra:** commutativity, output length, known products
//! - **Variant agreement:** precise, fast and scratch-optimized convolution
//!   agree when the fast path's pre-scaling contract is honored
//! - **Scalar/packed bit equality:** every dual-path kernel, stress inputs
//! - **Saturation:** `abs(MIN) == MAX` at all three widths
//! - **Round trips:** narrow-then-widen masks exactly the dropped bits

#[cfg(test)]
mod tests {
    use crate::basic::{abs_q15, abs_q31, abs_q7, mult_q15, offset_q15, shift_q15};
    use crate::basic::{
        abs_q15_packed, abs_q15_scalar, abs_q7_packed, abs_q7_scalar, mult_q15_packed,
        mult_q15_scalar, mult_q7_packed, mult_q7_scalar, offset_q15_packed, offset_q15_scalar,
        offset_q7_packed, offset_q7_scalar, shift_q15_packed, shift_q15_scalar, shift_q7_packed,
        shift_q7_scalar,
    };
    use crate::filtering::{conv_fast_q15, conv_opt_q15, conv_q15};
    use crate::filtering::{conv_fast_q15_packed, conv_fast_q15_scalar};
    use crate::matrix::{mat_mult_fast_q15, mat_mult_q15, MatQ15, MatQ15Mut};
    use crate::support::{q15_to_q7, q7_to_q15};
    use crate::support::{q15_to_q7_packed, q15_to_q7_scalar, q7_to_q15_packed, q7_to_q15_scalar};
    use crate::MathError;

    // Stress vector hitting both i16 extremes, zero, and odd offsets.
    const STRESS_Q15: [i16; 11] = [
        i16::MIN,
        i16::MIN + 1,
        -12345,
        -1,
        0,
        1,
        255,
        -256,
        12345,
        i16::MAX - 1,
        i16::MAX,
    ];

    const STRESS_Q7: [i8; 11] = [
        i8::MIN,
        i8::MIN + 1,
        -100,
        -1,
        0,
        1,
        31,
        -32,
        100,
        i8::MAX - 1,
        i8::MAX,
    ];

    // ── Convolution algebra ────────────────────────────────────────────

    #[test]
    fn verify_conv_known_product() {
        // [1,2,3] * [1,1] = [1,3,5,3], staged so the >>15 lands on integers.
        let x = [1i16 << 8, 2 << 8, 3 << 8];
        let h = [1i16 << 7, 1 << 7];
        let mut y = [0i16; 4];
        conv_q15(&x, &h, &mut y);
        assert_eq!(y, [1, 3, 5, 3]);
    }

    #[test]
    fn verify_conv_commutative() {
        let a = [300i16, -700, 1500, 250, -90];
        let b = [1200i16, 64, -800];
        let mut ab = [0i16; 7];
        let mut ba = [0i16; 7];
        conv_q15(&a, &b, &mut ab);
        conv_q15(&b, &a, &mut ba);
        assert_eq!(ab, ba);
    }

    #[test]
    fn verify_conv_variants_agree() {
        // min len 4 → callers pre-scale by 2 bits for the fast variant.
        let a = [4000i16 >> 2, -2500 >> 2, 1000 >> 2, 3000 >> 2, -500 >> 2, 1250 >> 2];
        let b = [2000i16 >> 2, 1500 >> 2, -3000 >> 2, 700 >> 2];
        let mut precise = [0i16; 9];
        let mut fast = [0i16; 9];
        let mut opt = [0i16; 9];
        let mut scratch1 = [0i16; 6 + 2 * 4 - 2];
        let mut scratch2 = [0i16; 4];
        conv_q15(&a, &b, &mut precise);
        conv_fast_q15(&a, &b, &mut fast);
        conv_opt_q15(&a, &b, &mut opt, &mut scratch1, &mut scratch2);
        assert_eq!(precise, fast);
        assert_eq!(precise, opt);
    }

    #[test]
    fn verify_conv_fast_scalar_packed_equal() {
        // Unscaled extremes: the wrapping accumulator must wrap the same
        // way down both paths.
        let a = STRESS_Q15;
        let b = [i16::MIN, i16::MAX, -1, 1, i16::MIN];
        let mut scalar = [0i16; 15];
        let mut packed = [0i16; 15];
        conv_fast_q15_scalar(&a, &b, &mut scalar);
        conv_fast_q15_packed(&a, &b, &mut packed);
        assert_eq!(scalar, packed);
    }

    // ── Matrix ─────────────────────────────────────────────────────────

    #[test]
    fn verify_matrix_identity() {
        let ident = [i16::MAX, 0, 0, 0, i16::MAX, 0, 0, 0, i16::MAX];
        let m_data = [1000i16, -2000, 3000, 4000, -5000, 6000, 7000, 8000, -9000];
        let mut out = [0i16; 9];
        let mut out_fast = [0i16; 9];
        let mut scratch = [0i16; 9];
        let i3 = MatQ15::new(3, 3, &ident).unwrap();
        let m = MatQ15::new(3, 3, &m_data).unwrap();

        let mut dst = MatQ15Mut::new(3, 3, &mut out).unwrap();
        mat_mult_q15(&i3, &m, &mut dst).unwrap();
        let mut dst = MatQ15Mut::new(3, 3, &mut out_fast).unwrap();
        mat_mult_fast_q15(&i3, &m, &mut dst, &mut scratch).unwrap();

        for ((&got, &got_fast), &want) in out.iter().zip(out_fast.iter()).zip(m_data.iter()) {
            assert!((got - want).abs() <= 1, "got {} want {}", got, want);
            assert_eq!(got, got_fast);
        }
    }

    #[test]
    fn verify_matrix_mismatch_leaves_output() {
        let a_data = [0i16; 6];
        let b_data = [0i16; 6];
        let mut out = [0x55i16; 4];
        let a = MatQ15::new(2, 3, &a_data).unwrap();
        let b = MatQ15::new(2, 3, &b_data).unwrap();
        let mut dst = MatQ15Mut::new(2, 2, &mut out).unwrap();
        assert_eq!(mat_mult_q15(&a, &b, &mut dst), Err(MathError::SizeMismatch));
        assert_eq!(out, [0x55; 4]);
    }

    // ── Round trips ────────────────────────────────────────────────────

    #[test]
    fn verify_narrow_widen_masks_low_bits() {
        let mut q7 = [0i8; STRESS_Q15.len()];
        let mut back = [0i16; STRESS_Q15.len()];
        q15_to_q7(&STRESS_Q15, &mut q7);
        q7_to_q15(&q7, &mut back);
        for (&orig, &round) in STRESS_Q15.iter().zip(back.iter()) {
            assert_eq!(round, ((orig >> 8) as i16) << 8);
        }
    }

    // ── Scalar/packed bit equality across every dual-path kernel ──────

    #[test]
    fn verify_dual_paths_q15() {
        let a = STRESS_Q15;
        let b = [
            i16::MAX,
            i16::MIN,
            -1,
            1,
            0,
            i16::MIN,
            4096,
            -4097,
            i16::MAX,
            2,
            -2,
        ];

        let mut s = [0i16; 11];
        let mut p = [0i16; 11];

        abs_q15_scalar(&a, &mut s);
        abs_q15_packed(&a, &mut p);
        assert_eq!(s, p);

        mult_q15_scalar(&a, &b, &mut s);
        mult_q15_packed(&a, &b, &mut p);
        assert_eq!(s, p);

        for offset in [i16::MIN, -1, 0, 1, i16::MAX] {
            offset_q15_scalar(&a, offset, &mut s);
            offset_q15_packed(&a, offset, &mut p);
            assert_eq!(s, p, "offset {}", offset);
        }

        for shift in [-15i8, -8, -1, 0, 1, 8, 14] {
            shift_q15_scalar(&a, shift, &mut s);
            shift_q15_packed(&a, shift, &mut p);
            assert_eq!(s, p, "shift {}", shift);
        }
    }

    #[test]
    fn verify_dual_paths_q7() {
        let a = STRESS_Q7;
        let b = [i8::MAX, i8::MIN, -1, 1, 0, i8::MIN, 64, -65, i8::MAX, 2, -2];

        let mut s = [0i8; 11];
        let mut p = [0i8; 11];

        abs_q7_scalar(&a, &mut s);
        abs_q7_packed(&a, &mut p);
        assert_eq!(s, p);

        mult_q7_scalar(&a, &b, &mut s);
        mult_q7_packed(&a, &b, &mut p);
        assert_eq!(s, p);

        for offset in [i8::MIN, -1, 0, 1, i8::MAX] {
            offset_q7_scalar(&a, offset, &mut s);
            offset_q7_packed(&a, offset, &mut p);
            assert_eq!(s, p, "offset {}", offset);
        }

        for shift in [-7i8, -4, -1, 0, 1, 4, 6] {
            shift_q7_scalar(&a, shift, &mut s);
            shift_q7_packed(&a, shift, &mut p);
            assert_eq!(s, p, "shift {}", shift);
        }
    }

    #[test]
    fn verify_dual_paths_convert() {
        let mut s7 = [0i8; 11];
        let mut p7 = [0i8; 11];
        q15_to_q7_scalar(&STRESS_Q15, &mut s7);
        q15_to_q7_packed(&STRESS_Q15, &mut p7);
        assert_eq!(s7, p7);

        let mut s15 = [0i16; 11];
        let mut p15 = [0i16; 11];
        q7_to_q15_scalar(&STRESS_Q7, &mut s15);
        q7_to_q15_packed(&STRESS_Q7, &mut p15);
        assert_eq!(s15, p15);
    }

    // ── Saturation ─────────────────────────────────────────────────────

    #[test]
    fn verify_abs_min_saturates_all_widths() {
        let mut out7 = [0i8; 2];
        abs_q7(&[i8::MIN, -1], &mut out7);
        assert_eq!(out7, [i8::MAX, 1]);

        let mut out15 = [0i16; 2];
        abs_q15(&[i16::MIN, -1], &mut out15);
        assert_eq!(out15, [i16::MAX, 1]);

        let mut out31 = [0i32; 2];
        abs_q31(&[i32::MIN, -1], &mut out31);
        assert_eq!(out31, [i32::MAX, 1]);
    }

    // ── Pipeline: dissimilar kernels composed ──────────────────────────

    #[test]
    fn verify_kernel_pipeline() {
        // offset → shift → multiply → convolve, values chosen to stay exact.
        let x = [100i16, -200, 300, -400];
        let mut staged = [0i16; 4];
        offset_q15(&x, 50, &mut staged);
        let mut scaled = [0i16; 4];
        shift_q15(&staged, 3, &mut scaled);
        assert_eq!(scaled, [1200, -1200, 2800, -2800]);

        let mut squared = [0i16; 4];
        mult_q15(&scaled, &scaled, &mut squared);

        let h = [1i16 << 14, 1 << 14]; // 0.5, 0.5
        let mut y = [0i16; 5];
        conv_q15(&squared, &h, &mut y);
        // Averaging filter: y[n] = (squared[n-1] + squared[n]) / 2.
        assert_eq!(y[1], (squared[0] as i32 + squared[1] as i32) as i16 / 2);
        assert_eq!(y[2], (squared[1] as i32 + squared[2] as i32) as i16 / 2);
    }
}
