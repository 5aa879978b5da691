//! AVX2 4-lane f64 register.
//!
//! Double-precision lanes halve the lane count of the 256-bit register:
//! `Vector<f64>` has 4 lanes where `Vector<f32>` has 8, and its gather and
//! scatter offsets travel in the 4-lane [`U64x4`](super::u64x4::U64x4)
//! index register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::mem;

use crate::simd::avx2::masks::M64x4;
use crate::simd::avx2::u64x4::U64x4;
use crate::simd::avx2::AVX_ALIGNMENT;
use crate::simd::traits::{MaskRegister, SimdRegister};

/// AVX2 register containing 4 packed f64 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F64x4(pub(crate) __m256d);

impl SimdRegister<f64> for F64x4 {
    type Mask = M64x4;
    type Index = U64x4;

    const LANES: usize = 4;
    const ALIGN: usize = AVX_ALIGNMENT;

    #[inline(always)]
    fn uninit() -> Self {
        Self(unsafe { _mm256_undefined_pd() })
    }

    #[inline(always)]
    fn zero() -> Self {
        Self(unsafe { _mm256_setzero_pd() })
    }

    #[inline(always)]
    fn one() -> Self {
        Self(unsafe { _mm256_set1_pd(1.0) })
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self(unsafe { _mm256_set1_pd(value) })
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned load from a misaligned pointer"
        );

        Self(_mm256_load_pd(ptr))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        Self(_mm256_loadu_pd(ptr))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned store to a misaligned pointer"
        );

        _mm256_store_pd(ptr, self.0)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        _mm256_storeu_pd(ptr, self.0)
    }

    #[inline(always)]
    fn add_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_mul_pd(self.0, rhs.0) })
    }

    /// Lane-wise division; a zero divisor yields ±inf or NaN per IEEE 754.
    #[inline(always)]
    fn div_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_div_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_or_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_EQ_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_NEQ_UQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_LT_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_LE_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_GT_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_castpd_si256(_mm256_cmp_pd::<_CMP_GE_OQ>(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn blend_elements(self, other: Self, mask: M64x4) -> Self {
        Self(unsafe { _mm256_blendv_pd(self.0, other.0, mask.as_pd()) })
    }

    /// Hardware gather (`vgatherqpd`) with an 8-byte element scale.
    #[inline(always)]
    unsafe fn gather(base: *const f64, idx: U64x4) -> Self {
        Self(_mm256_i64gather_pd::<8>(base, idx.0))
    }

    #[inline(always)]
    unsafe fn gather_masked(self, base: *const f64, idx: U64x4, mask: M64x4) -> Self {
        Self(_mm256_mask_i64gather_pd::<8>(self.0, base, idx.0, mask.as_pd()))
    }

    #[inline(always)]
    unsafe fn scatter(self, base: *mut f64, idx: U64x4) {
        let lanes: [f64; 4] = mem::transmute(self.0);
        let offsets: [u64; 4] = mem::transmute(idx.0);

        for (lane, offset) in offsets.into_iter().enumerate() {
            *base.add(offset as usize) = lanes[lane];
        }
    }

    #[inline(always)]
    unsafe fn scatter_masked(self, base: *mut f64, idx: U64x4, mask: M64x4) {
        let lanes: [f64; 4] = mem::transmute(self.0);
        let offsets: [u64; 4] = mem::transmute(idx.0);
        let bits = mask.to_bits();

        for (lane, offset) in offsets.into_iter().enumerate() {
            if bits >> lane & 1 != 0 {
                *base.add(offset as usize) = lanes[lane];
            }
        }
    }
}
