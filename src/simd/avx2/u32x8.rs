//! AVX2 8-lane u32 register.
//!
//! Unsigned 32-bit lanes in a `__m256i`. This is also the index register
//! for every 32-bit entry type: gather and scatter offsets travel in a
//! `U32x8`. AVX2 has no unsigned compare, so orderings bias both operands
//! by the sign bit and use the signed compare.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::mem;

use crate::simd::avx2::masks::M32x8;
use crate::simd::avx2::AVX_ALIGNMENT;
use crate::simd::traits::{MaskRegister, RegisterConvert, SimdInteger, SimdRegister};

/// AVX2 register containing 8 packed u32 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U32x8(pub(crate) __m256i);

impl U32x8 {
    /// Flips the sign bit of every lane, mapping unsigned order onto
    /// signed order.
    #[inline(always)]
    fn bias(self) -> __m256i {
        unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi32(i32::MIN)) }
    }
}

impl SimdRegister<u32> for U32x8 {
    type Mask = M32x8;
    type Index = U32x8;

    const LANES: usize = 8;
    const ALIGN: usize = AVX_ALIGNMENT;

    #[inline(always)]
    fn uninit() -> Self {
        Self(unsafe { _mm256_undefined_si256() })
    }

    #[inline(always)]
    fn zero() -> Self {
        Self(unsafe { _mm256_setzero_si256() })
    }

    #[inline(always)]
    fn one() -> Self {
        Self(unsafe { _mm256_set1_epi32(1) })
    }

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self(unsafe { _mm256_set1_epi32(value as i32) })
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const u32) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned load from a misaligned pointer"
        );

        Self(_mm256_load_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u32) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        Self(_mm256_loadu_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u32) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned store to a misaligned pointer"
        );

        _mm256_store_si256(ptr as *mut __m256i, self.0)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u32) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        _mm256_storeu_si256(ptr as *mut __m256i, self.0)
    }

    /// Wrapping addition.
    #[inline(always)]
    fn add_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_epi32(self.0, rhs.0) })
    }

    /// Wrapping subtraction.
    #[inline(always)]
    fn sub_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_epi32(self.0, rhs.0) })
    }

    /// Wrapping low-half multiplication; the bit pattern matches the
    /// signed instruction.
    #[inline(always)]
    fn mul_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_mullo_epi32(self.0, rhs.0) })
    }

    /// Lane-by-lane scalar division; panics on a zero divisor.
    #[inline(always)]
    fn div_elements(self, rhs: Self) -> Self {
        unsafe {
            let a: [u32; 8] = mem::transmute(self.0);
            let b: [u32; 8] = mem::transmute(rhs.0);
            let mut q = [0u32; 8];
            for lane in 0..8 {
                q[lane] = a[lane] / b[lane];
            }
            Self(mem::transmute::<[u32; 8], __m256i>(q))
        }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_cmpeq_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> M32x8 {
        self.eq_elements(rhs).not_elements()
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_cmpgt_epi32(rhs.bias(), self.bias()) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> M32x8 {
        self.gt_elements(rhs).not_elements()
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> M32x8 {
        M32x8(unsafe { _mm256_cmpgt_epi32(self.bias(), rhs.bias()) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> M32x8 {
        self.lt_elements(rhs).not_elements()
    }

    #[inline(always)]
    fn blend_elements(self, other: Self, mask: M32x8) -> Self {
        Self(unsafe { _mm256_blendv_epi8(self.0, other.0, mask.0) })
    }

    /// Hardware gather; offsets are consumed as 32-bit values by
    /// `vpgatherdd`, so indexes above `i32::MAX` are out of contract.
    #[inline(always)]
    unsafe fn gather(base: *const u32, idx: U32x8) -> Self {
        Self(_mm256_i32gather_epi32::<4>(base as *const i32, idx.0))
    }

    #[inline(always)]
    unsafe fn gather_masked(self, base: *const u32, idx: U32x8, mask: M32x8) -> Self {
        Self(_mm256_mask_i32gather_epi32::<4>(
            self.0,
            base as *const i32,
            idx.0,
            mask.0,
        ))
    }

    #[inline(always)]
    unsafe fn scatter(self, base: *mut u32, idx: U32x8) {
        let lanes: [u32; 8] = mem::transmute(self.0);
        let offsets: [u32; 8] = mem::transmute(idx.0);

        for (lane, offset) in offsets.into_iter().enumerate() {
            *base.add(offset as usize) = lanes[lane];
        }
    }

    #[inline(always)]
    unsafe fn scatter_masked(self, base: *mut u32, idx: U32x8, mask: M32x8) {
        let lanes: [u32; 8] = mem::transmute(self.0);
        let offsets: [u32; 8] = mem::transmute(idx.0);
        let bits = mask.to_bits();

        for (lane, offset) in offsets.into_iter().enumerate() {
            if bits >> lane & 1 != 0 {
                *base.add(offset as usize) = lanes[lane];
            }
        }
    }
}

impl SimdInteger<u32> for U32x8 {
    #[inline(always)]
    fn indexes_from_zero() -> Self {
        Self(unsafe { _mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7) })
    }
}

/// Lane-wise `i32 -> u32` reinterpretation.
impl RegisterConvert<super::i32x8::I32x8> for U32x8 {
    #[inline(always)]
    fn convert(src: super::i32x8::I32x8) -> Self {
        Self(src.0)
    }
}
