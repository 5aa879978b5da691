//! AVX2 8-lane f32 register.
//!
//! `F32x8` wraps Intel's 256-bit `__m256` register and implements the
//! [`SimdRegister`] primitives on 8 packed single-precision lanes. It is
//! the register behind `Vector<f32>` when the build script detects AVX2.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Compilation**: compiled only when the build script enables
//!   `-C target-feature=+avx2` and sets `cfg(avx2)`
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 256 bits (8 × f32)
//! - **Memory Alignment**: aligned accesses require 32-byte boundaries
//! - **Gather**: hardware `vgatherdps`, including the masked form that
//!   never dereferences unselected lanes
//! - **Scatter**: AVX2 has no scatter instruction; lanes are written one
//!   by one from a spilled copy of the register

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::mem;

use crate::simd::avx2::masks::M32x8;
use crate::simd::avx2::u32x8::U32x8;
use crate::simd::avx2::AVX_ALIGNMENT;
use crate::simd::traits::{MaskRegister, RegisterConvert, SimdRegister};

/// AVX2 register containing 8 packed f32 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x8(pub(crate) __m256);

impl SimdRegister<f32> for F32x8 {
    type Mask = M32x8;
    type Index = U32x8;

    const LANES: usize = 8;
    const ALIGN: usize = AVX_ALIGNMENT;

    /// Returns a register without writing its lanes first.
    ///
    /// `_mm256_undefined_ps` produces a valid register whose contents are
    /// whatever the renamer hands out; callers overwrite before reading
    /// anything meaningful.
    #[inline(always)]
    fn uninit() -> Self {
        Self(unsafe { _mm256_undefined_ps() })
    }

    #[inline(always)]
    fn zero() -> Self {
        Self(unsafe { _mm256_setzero_ps() })
    }

    #[inline(always)]
    fn one() -> Self {
        Self(unsafe { _mm256_set1_ps(1.0) })
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self(unsafe { _mm256_set1_ps(value) })
    }

    /// Loads 8 lanes from 32-byte aligned memory with `_mm256_load_ps`.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned load from a misaligned pointer"
        );

        Self(_mm256_load_ps(ptr))
    }

    /// Loads 8 lanes from arbitrarily aligned memory with `_mm256_loadu_ps`.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        Self(_mm256_loadu_ps(ptr))
    }

    /// Stores 8 lanes to 32-byte aligned memory with `_mm256_store_ps`.
    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned store to a misaligned pointer"
        );

        _mm256_store_ps(ptr, self.0)
    }

    /// Stores 8 lanes to arbitrarily aligned memory with `_mm256_storeu_ps`.
    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        _mm256_storeu_ps(ptr, self.0)
    }

    #[inline(always)]
    fn add_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_mul_ps(self.0, rhs.0) })
    }

    /// Lane-wise division; a zero divisor yields ±inf or NaN per IEEE 754.
    #[inline(always)]
    fn div_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_div_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_or_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_ps(self.0, rhs.0) })
    }

    /// Ordered quiet equality; a NaN lane compares unequal to everything.
    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_castps_si256(_mm256_cmp_ps::<_CMP_EQ_OQ>(self.0, rhs.0)) })
    }

    /// Unordered inequality; a NaN lane compares unequal to everything.
    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_castps_si256(_mm256_cmp_ps::<_CMP_NEQ_UQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_castps_si256(_mm256_cmp_ps::<_CMP_LT_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_castps_si256(_mm256_cmp_ps::<_CMP_LE_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_castps_si256(_mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_castps_si256(_mm256_cmp_ps::<_CMP_GE_OQ>(self.0, rhs.0)) })
    }

    /// Single `vblendvps`; lanes come from `other` where the mask is set.
    #[inline(always)]
    fn blend_elements(self, other: Self, mask: M32x8) -> Self {
        Self(unsafe { _mm256_blendv_ps(self.0, other.0, mask.as_ps()) })
    }

    /// Hardware gather (`vgatherdps`) with a 4-byte element scale.
    #[inline(always)]
    unsafe fn gather(base: *const f32, idx: U32x8) -> Self {
        Self(_mm256_i32gather_ps::<4>(base, idx.0))
    }

    /// Hardware masked gather. The instruction guarantees that memory is
    /// not touched for lanes whose mask bit is clear, which is what allows
    /// those lanes to carry out-of-range indexes.
    #[inline(always)]
    unsafe fn gather_masked(self, base: *const f32, idx: U32x8, mask: M32x8) -> Self {
        Self(_mm256_mask_i32gather_ps::<4>(self.0, base, idx.0, mask.as_ps()))
    }

    /// Lane-by-lane scatter from a spilled copy of the register.
    #[inline(always)]
    unsafe fn scatter(self, base: *mut f32, idx: U32x8) {
        let lanes: [f32; 8] = mem::transmute(self.0);
        let offsets: [u32; 8] = mem::transmute(idx.0);

        for (lane, offset) in offsets.into_iter().enumerate() {
            *base.add(offset as usize) = lanes[lane];
        }
    }

    /// Lane-by-lane masked scatter; unselected lanes are neither written
    /// nor are their indexes dereferenced.
    #[inline(always)]
    unsafe fn scatter_masked(self, base: *mut f32, idx: U32x8, mask: M32x8) {
        let lanes: [f32; 8] = mem::transmute(self.0);
        let offsets: [u32; 8] = mem::transmute(idx.0);
        let bits = mask.to_bits();

        for (lane, offset) in offsets.into_iter().enumerate() {
            if bits >> lane & 1 != 0 {
                *base.add(offset as usize) = lanes[lane];
            }
        }
    }
}

/// Lane-wise `i32 -> f32` conversion (`vcvtdq2ps`).
impl RegisterConvert<super::i32x8::I32x8> for F32x8 {
    #[inline(always)]
    fn convert(src: super::i32x8::I32x8) -> Self {
        Self(unsafe { _mm256_cvtepi32_ps(src.0) })
    }
}
