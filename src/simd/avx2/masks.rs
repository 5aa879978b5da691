//! AVX2 mask registers.
//!
//! Comparison results on AVX2 are ordinary vector registers whose lanes are
//! either all-ones or all-zero. Both mask types here keep that
//! representation in a `__m256i` so the boolean operations compile to plain
//! 256-bit logic instructions and blends can consume the mask directly.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::MaskRegister;

/// Mask with eight 32-bit lanes, paired with [`F32x8`](super::f32x8::F32x8),
/// [`I32x8`](super::i32x8::I32x8) and [`U32x8`](super::u32x8::U32x8).
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M32x8(pub(crate) __m256i);

/// Mask with four 64-bit lanes, paired with [`F64x4`](super::f64x4::F64x4)
/// and [`U64x4`](super::u64x4::U64x4).
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct M64x4(pub(crate) __m256i);

impl M32x8 {
    /// Reinterprets the mask as a float register for `blendv_ps` style
    /// consumers.
    #[inline(always)]
    pub(crate) fn as_ps(self) -> __m256 {
        unsafe { _mm256_castsi256_ps(self.0) }
    }
}

impl M64x4 {
    /// Reinterprets the mask as a double register for `blendv_pd` style
    /// consumers.
    #[inline(always)]
    pub(crate) fn as_pd(self) -> __m256d {
        unsafe { _mm256_castsi256_pd(self.0) }
    }
}

impl MaskRegister for M32x8 {
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(flag: bool) -> Self {
        Self(unsafe { _mm256_set1_epi32(-(flag as i32)) })
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        debug_assert!(lane < Self::LANES, "mask lane out of range");
        self.to_bits() >> lane & 1 != 0
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
    fn not_elements(self) -> Self {
        Self(unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi32(-1)) })
    }

    #[inline(always)]
    fn to_bits(self) -> u64 {
        unsafe { _mm256_movemask_ps(_mm256_castsi256_ps(self.0)) as u32 as u64 }
    }
}

impl MaskRegister for M64x4 {
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(flag: bool) -> Self {
        Self(unsafe { _mm256_set1_epi64x(-(flag as i64)) })
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        debug_assert!(lane < Self::LANES, "mask lane out of range");
        self.to_bits() >> lane & 1 != 0
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
    fn not_elements(self) -> Self {
        Self(unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi64x(-1)) })
    }

    #[inline(always)]
    fn to_bits(self) -> u64 {
        unsafe { _mm256_movemask_pd(_mm256_castsi256_pd(self.0)) as u32 as u64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splat_sets_every_lane() {
        assert_eq!(M32x8::splat(true).to_bits(), 0xFF);
        assert_eq!(M32x8::splat(false).to_bits(), 0);
        assert_eq!(M64x4::splat(true).to_bits(), 0xF);
        assert_eq!(M64x4::splat(false).to_bits(), 0);
    }

    #[test]
    fn boolean_algebra() {
        let t = M32x8::splat(true);
        let f = M32x8::splat(false);

        assert_eq!(t.and_elements(f).to_bits(), 0);
        assert_eq!(t.or_elements(f).to_bits(), 0xFF);
        assert_eq!(t.xor_elements(t).to_bits(), 0);
        assert_eq!(f.not_elements().to_bits(), 0xFF);
    }

    #[test]
    fn test_reads_individual_lanes() {
        let t = M64x4::splat(true);
        for lane in 0..M64x4::LANES {
            assert!(t.test(lane));
        }
        let f = M64x4::splat(false);
        for lane in 0..M64x4::LANES {
            assert!(!f.test(lane));
        }
    }
}
