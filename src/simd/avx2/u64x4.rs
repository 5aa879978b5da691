//! AVX2 4-lane u64 register.
//!
//! Unsigned 64-bit lanes in a `__m256i`; the index register for the
//! 64-bit entry types. AVX2 has neither a 64-bit multiply nor unsigned
//! compares, so the multiply is assembled from 32-bit partial products and
//! the orderings use the sign-bit bias trick on `vpcmpgtq`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::mem;

use crate::simd::avx2::masks::M64x4;
use crate::simd::avx2::AVX_ALIGNMENT;
use crate::simd::traits::{MaskRegister, SimdInteger, SimdRegister};

/// AVX2 register containing 4 packed u64 lanes.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U64x4(pub(crate) __m256i);

impl U64x4 {
    /// Flips the sign bit of every lane, mapping unsigned order onto
    /// signed order.
    #[inline(always)]
    fn bias(self) -> __m256i {
        unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi64x(i64::MIN)) }
    }
}

impl SimdRegister<u64> for U64x4 {
    type Mask = M64x4;
    type Index = U64x4;

    const LANES: usize = 4;
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
        Self(unsafe { _mm256_set1_epi64x(1) })
    }

    #[inline(always)]
    fn splat(value: u64) -> Self {
        Self(unsafe { _mm256_set1_epi64x(value as i64) })
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const u64) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned load from a misaligned pointer"
        );

        Self(_mm256_load_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const u64) -> Self {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        Self(_mm256_loadu_si256(ptr as *const __m256i))
    }

    #[inline(always)]
    unsafe fn store_aligned(self, ptr: *mut u64) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");
        debug_assert!(
            ptr as usize % Self::ALIGN == 0,
            "aligned store to a misaligned pointer"
        );

        _mm256_store_si256(ptr as *mut __m256i, self.0)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut u64) {
        debug_assert!(!ptr.is_null(), "pointer must not be null");

        _mm256_storeu_si256(ptr as *mut __m256i, self.0)
    }

    /// Wrapping addition (`vpaddq`).
    #[inline(always)]
    fn add_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_add_epi64(self.0, rhs.0) })
    }

    /// Wrapping subtraction (`vpsubq`).
    #[inline(always)]
    fn sub_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm256_sub_epi64(self.0, rhs.0) })
    }

    /// Wrapping 64-bit multiply from 32-bit partial products:
    /// `lo(a)*lo(b) + ((lo(a)*hi(b) + hi(a)*lo(b)) << 32)`.
    #[inline(always)]
    fn mul_elements(self, rhs: Self) -> Self {
        unsafe {
            let low = _mm256_mul_epu32(self.0, rhs.0);
            let a_hi = _mm256_srli_epi64::<32>(self.0);
            let b_hi = _mm256_srli_epi64::<32>(rhs.0);
            let cross = _mm256_add_epi64(
                _mm256_mul_epu32(a_hi, rhs.0),
                _mm256_mul_epu32(self.0, b_hi),
            );
            Self(_mm256_add_epi64(low, _mm256_slli_epi64::<32>(cross)))
        }
    }

    /// Lane-by-lane scalar division; panics on a zero divisor.
    #[inline(always)]
    fn div_elements(self, rhs: Self) -> Self {
        unsafe {
            let a: [u64; 4] = mem::transmute(self.0);
            let b: [u64; 4] = mem::transmute(rhs.0);
            let mut q = [0u64; 4];
            for lane in 0..4 {
                q[lane] = a[lane] / b[lane];
            }
            Self(mem::transmute::<[u64; 4], __m256i>(q))
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
    fn eq_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_cmpeq_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> M64x4 {
        self.eq_elements(rhs).not_elements()
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_cmpgt_epi64(rhs.bias(), self.bias()) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> M64x4 {
        self.gt_elements(rhs).not_elements()
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> M64x4 {
        M64x4(unsafe { _mm256_cmpgt_epi64(self.bias(), rhs.bias()) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> M64x4 {
        self.lt_elements(rhs).not_elements()
    }

    /// `vpblendvb` works byte-wise; comparison masks cover whole lanes, so
    /// the 64-bit lanes blend as units.
    #[inline(always)]
    fn blend_elements(self, other: Self, mask: M64x4) -> Self {
        Self(unsafe { _mm256_blendv_epi8(self.0, other.0, mask.0) })
    }

    /// Hardware gather (`vpgatherqq`) with an 8-byte element scale.
    /// Offsets are consumed as signed 64-bit values, so indexes above
    /// `i64::MAX` are out of contract.
    #[inline(always)]
    unsafe fn gather(base: *const u64, idx: U64x4) -> Self {
        Self(_mm256_i64gather_epi64::<8>(base as *const i64, idx.0))
    }

    #[inline(always)]
    unsafe fn gather_masked(self, base: *const u64, idx: U64x4, mask: M64x4) -> Self {
        Self(_mm256_mask_i64gather_epi64::<8>(
            self.0,
            base as *const i64,
            idx.0,
            mask.0,
        ))
    }

    #[inline(always)]
    unsafe fn scatter(self, base: *mut u64, idx: U64x4) {
        let lanes: [u64; 4] = mem::transmute(self.0);
        let offsets: [u64; 4] = mem::transmute(idx.0);

        for (lane, offset) in offsets.into_iter().enumerate() {
            *base.add(offset as usize) = lanes[lane];
        }
    }

    #[inline(always)]
    unsafe fn scatter_masked(self, base: *mut u64, idx: U64x4, mask: M64x4) {
        let lanes: [u64; 4] = mem::transmute(self.0);
        let offsets: [u64; 4] = mem::transmute(idx.0);
        let bits = mask.to_bits();

        for (lane, offset) in offsets.into_iter().enumerate() {
            if bits >> lane & 1 != 0 {
                *base.add(offset as usize) = lanes[lane];
            }
        }
    }
}

impl SimdInteger<u64> for U64x4 {
    #[inline(always)]
    fn indexes_from_zero() -> Self {
        Self(unsafe { _mm256_setr_epi64x(0, 1, 2, 3) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes(v: U64x4) -> [u64; 4] {
        unsafe { mem::transmute(v.0) }
    }

    fn reg(values: [u64; 4]) -> U64x4 {
        unsafe { U64x4::load_unaligned(values.as_ptr()) }
    }

    #[test]
    fn multiply_matches_scalar_wrapping() {
        let a = reg([3, u64::MAX, 0x1_0000_0001, 1 << 40]);
        let b = reg([5, 2, 7, 1 << 30]);

        let got = lanes(a.mul_elements(b));
        let want = [
            3u64.wrapping_mul(5),
            u64::MAX.wrapping_mul(2),
            0x1_0000_0001u64.wrapping_mul(7),
            (1u64 << 40).wrapping_mul(1 << 30),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn unsigned_ordering_above_the_sign_bit() {
        let a = reg([u64::MAX, 1, 1 << 63, 4]);
        let b = reg([0, 2, 3, 4]);

        assert_eq!(a.gt_elements(b).to_bits(), 0b0101);
        assert_eq!(a.lt_elements(b).to_bits(), 0b0010);
        assert_eq!(a.le_elements(b).to_bits(), 0b1010);
    }

    #[test]
    fn gather_scatter_round_trip() {
        let mut table = vec![0u64; 16];
        let idx = reg([15, 0, 7, 3]);
        let v = reg([100, 200, 300, 400]);

        unsafe { v.scatter(table.as_mut_ptr(), idx) };
        let back = unsafe { U64x4::gather(table.as_ptr(), idx) };
        assert_eq!(lanes(back), lanes(v));
    }

    #[test]
    fn ramp_and_one() {
        assert_eq!(lanes(U64x4::indexes_from_zero()), [0, 1, 2, 3]);
        assert_eq!(lanes(U64x4::one()), [1; 4]);
    }
}
