//! XpulpV2 DSP instruction wrappers with pure-Rust fallbacks.
//!
//! On `riscv32` targets with the `xpulp` feature (PULP cores such as RI5CY),
//! the hot primitives compile to single XpulpV2 instructions. On every other
//! target (host tests, plain RV32I), equivalent pure-Rust implementations are
//! used.
//!
//! Packed-lane values travel as `u32`: two 16-bit lanes (lane 0 in the low
//! halfword) or four 8-bit lanes (lane 0 in the low byte). Every packed
//! operation is bit-identical, lane by lane, to applying the corresponding
//! scalar primitive to each lane independently; the packed form is a
//! throughput optimization, never a semantic variant.

/// Saturate an `i32` to `i8` range (`-128..=127`).
#[inline(always)]
pub fn saturate8(val: i32) -> i8 {
    #[cfg(all(target_arch = "riscv32", feature = "xpulp"))]
    {
        let out: i32;
        unsafe {
            core::arch::asm!(
                "p.clip {out}, {val}, 8",
                out = out(reg) out,
                val = in(reg) val,
            );
        }
        out as i8
    }
    #[cfg(not(all(target_arch = "riscv32", feature = "xpulp")))]
    {
        if val > 127 {
            127
        } else if val < -128 {
            -128
        } else {
            val as i8
        }
    }
}

/// Saturate an `i32` to `i16` range (`-32768..=32767`).
///
/// Maps to `p.clip` with a 16-bit bound.
#[inline(always)]
pub fn saturate16(val: i32) -> i16 {
    #[cfg(all(target_arch = "riscv32", feature = "xpulp"))]
    {
        let out: i32;
        unsafe {
            core::arch::asm!(
                "p.clip {out}, {val}, 16",
                out = out(reg) out,
                val = in(reg) val,
            );
        }
        out as i16
    }
    #[cfg(not(all(target_arch = "riscv32", feature = "xpulp")))]
    {
        if val > 32767 {
            32767
        } else if val < -32768 {
            -32768
        } else {
            val as i16
        }
    }
}

/// Saturate an `i64` to `i32` range.
#[inline(always)]
pub fn saturate32(val: i64) -> i32 {
    if val > i32::MAX as i64 {
        i32::MAX
    } else if val < i32::MIN as i64 {
        i32::MIN
    } else {
        val as i32
    }
}

/// Saturate an `i64` into the range of a signed `bits`-wide integer.
///
/// `saturate_n(x, 31)` clamps into `[-2^30, 2^30 - 1]`, the form the Q31
/// multiply uses before restoring its guard bit.
#[inline(always)]
pub fn saturate_n(val: i64, bits: u32) -> i32 {
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    if val > max {
        max as i32
    } else if val < min {
        min as i32
    } else {
        val as i32
    }
}

/// Clamp `val` into `[lo, hi]`.
#[inline(always)]
pub fn clip(val: i32, lo: i32, hi: i32) -> i32 {
    if val < lo {
        lo
    } else if val > hi {
        hi
    } else {
        val
    }
}

/// Saturating absolute value for Q7: `abs(-128)` saturates to `127`.
#[inline(always)]
pub fn abs_sat_q7(val: i8) -> i8 {
    if val == i8::MIN {
        i8::MAX
    } else if val < 0 {
        -val
    } else {
        val
    }
}

/// Saturating absolute value for Q15: `abs(-32768)` saturates to `32767`.
#[inline(always)]
pub fn abs_sat_q15(val: i16) -> i16 {
    if val == i16::MIN {
        i16::MAX
    } else if val < 0 {
        -val
    } else {
        val
    }
}

/// Saturating absolute value for Q31: `abs(i32::MIN)` saturates to `i32::MAX`.
///
/// Maps to `p.abs` plus the `0x80000000` guard the hardware port carries.
#[inline(always)]
pub fn abs_sat_q31(val: i32) -> i32 {
    if val == i32::MIN {
        i32::MAX
    } else if val < 0 {
        -val
    } else {
        val
    }
}

/// Multiply-accumulate: `sum + a * b`, wrapping on overflow.
///
/// Maps to `p.mac`. The wrapping outer add is the documented overflow
/// behavior of the fast (32-bit accumulator) kernels.
#[inline(always)]
pub fn mac(a: i16, b: i16, sum: i32) -> i32 {
    #[cfg(all(target_arch = "riscv32", feature = "xpulp"))]
    {
        let mut out: i32 = sum;
        unsafe {
            core::arch::asm!(
                "p.mac {out}, {a}, {b}",
                out = inout(reg) out,
                a = in(reg) a as i32,
                b = in(reg) b as i32,
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "riscv32", feature = "xpulp")))]
    {
        sum.wrapping_add(a as i32 * b as i32)
    }
}

// ── Packed-lane pack / unpack ──────────────────────────────────────────────

/// Pack two 16-bit lanes: lane 0 into the low halfword, lane 1 into the high.
#[inline(always)]
pub fn pack2(lane0: i16, lane1: i16) -> u32 {
    (lane0 as u16 as u32) | ((lane1 as u16 as u32) << 16)
}

/// Unpack two 16-bit lanes.
#[inline(always)]
pub fn unpack2(v: u32) -> [i16; 2] {
    [v as i16, (v >> 16) as i16]
}

/// Pack four 8-bit lanes, lane 0 into the low byte.
#[inline(always)]
pub fn pack4(lane0: i8, lane1: i8, lane2: i8, lane3: i8) -> u32 {
    (lane0 as u8 as u32)
        | ((lane1 as u8 as u32) << 8)
        | ((lane2 as u8 as u32) << 16)
        | ((lane3 as u8 as u32) << 24)
}

/// Unpack four 8-bit lanes.
#[inline(always)]
pub fn unpack4(v: u32) -> [i8; 4] {
    [v as i8, (v >> 8) as i8, (v >> 16) as i8, (v >> 24) as i8]
}

// ── Packed-lane arithmetic ─────────────────────────────────────────────────

/// Dual 16-bit saturating addition, lane by lane.
#[inline(always)]
pub fn qadd2(a: u32, b: u32) -> u32 {
    let [a0, a1] = unpack2(a);
    let [b0, b1] = unpack2(b);
    pack2(
        saturate16(a0 as i32 + b0 as i32),
        saturate16(a1 as i32 + b1 as i32),
    )
}

/// Quad 8-bit saturating addition, lane by lane.
#[inline(always)]
pub fn qadd4(a: u32, b: u32) -> u32 {
    let la = unpack4(a);
    let lb = unpack4(b);
    pack4(
        saturate8(la[0] as i32 + lb[0] as i32),
        saturate8(la[1] as i32 + lb[1] as i32),
        saturate8(la[2] as i32 + lb[2] as i32),
        saturate8(la[3] as i32 + lb[3] as i32),
    )
}

/// Dual 16-bit saturating left shift.
#[inline(always)]
pub fn qshl2(v: u32, shift: u32) -> u32 {
    let [v0, v1] = unpack2(v);
    pack2(
        saturate16((v0 as i32) << shift),
        saturate16((v1 as i32) << shift),
    )
}

/// Quad 8-bit saturating left shift.
#[inline(always)]
pub fn qshl4(v: u32, shift: u32) -> u32 {
    let l = unpack4(v);
    pack4(
        saturate8((l[0] as i32) << shift),
        saturate8((l[1] as i32) << shift),
        saturate8((l[2] as i32) << shift),
        saturate8((l[3] as i32) << shift),
    )
}

/// Dual 16-bit arithmetic right shift. Never saturates.
///
/// Maps to `pv.sra.sc.h`.
#[inline(always)]
pub fn sra2(v: u32, shift: u32) -> u32 {
    #[cfg(all(target_arch = "riscv32", feature = "xpulp"))]
    {
        let out: u32;
        unsafe {
            core::arch::asm!(
                "pv.sra.sc.h {out}, {v}, {shift}",
                out = out(reg) out,
                v = in(reg) v,
                shift = in(reg) shift,
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "riscv32", feature = "xpulp")))]
    {
        let [v0, v1] = unpack2(v);
        pack2(v0 >> shift, v1 >> shift)
    }
}

/// Quad 8-bit arithmetic right shift. Never saturates.
///
/// Maps to `pv.sra.sc.b`.
#[inline(always)]
pub fn sra4(v: u32, shift: u32) -> u32 {
    #[cfg(all(target_arch = "riscv32", feature = "xpulp"))]
    {
        let out: u32;
        unsafe {
            core::arch::asm!(
                "pv.sra.sc.b {out}, {v}, {shift}",
                out = out(reg) out,
                v = in(reg) v,
                shift = in(reg) shift,
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "riscv32", feature = "xpulp")))]
    {
        let l = unpack4(v);
        pack4(l[0] >> shift, l[1] >> shift, l[2] >> shift, l[3] >> shift)
    }
}

/// Dual 16-bit saturating absolute value, lane by lane.
#[inline(always)]
pub fn qabs2(v: u32) -> u32 {
    let [v0, v1] = unpack2(v);
    pack2(abs_sat_q15(v0), abs_sat_q15(v1))
}

/// Quad 8-bit saturating absolute value, lane by lane.
#[inline(always)]
pub fn qabs4(v: u32) -> u32 {
    let l = unpack4(v);
    pack4(
        abs_sat_q7(l[0]),
        abs_sat_q7(l[1]),
        abs_sat_q7(l[2]),
        abs_sat_q7(l[3]),
    )
}

/// Dual 16-bit dot product: `a0*b0 + a1*b1`.
///
/// Maps to `pv.dotsp.h`. The inner add wraps like the hardware register
/// does; it can only overflow for the doubled `-1.0 * -1.0` corner case.
#[inline(always)]
pub fn dotp2(a: u32, b: u32) -> i32 {
    #[cfg(all(target_arch = "riscv32", feature = "xpulp"))]
    {
        let out: i32;
        unsafe {
            core::arch::asm!(
                "pv.dotsp.h {out}, {a}, {b}",
                out = out(reg) out,
                a = in(reg) a,
                b = in(reg) b,
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "riscv32", feature = "xpulp")))]
    {
        let [a0, a1] = unpack2(a);
        let [b0, b1] = unpack2(b);
        (a0 as i32 * b0 as i32).wrapping_add(a1 as i32 * b1 as i32)
    }
}

/// Fused dual 16-bit dot-product-accumulate: `sum + a0*b0 + a1*b1`.
///
/// Maps to `pv.sdotsp.h`. The outer add wraps, matching the fast kernels'
/// 32-bit accumulator contract.
#[inline(always)]
pub fn sum_dotp2(a: u32, b: u32, sum: i32) -> i32 {
    #[cfg(all(target_arch = "riscv32", feature = "xpulp"))]
    {
        let mut out: i32 = sum;
        unsafe {
            core::arch::asm!(
                "pv.sdotsp.h {out}, {a}, {b}",
                out = inout(reg) out,
                a = in(reg) a,
                b = in(reg) b,
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "riscv32", feature = "xpulp")))]
    {
        sum.wrapping_add(dotp2(a, b))
    }
}
