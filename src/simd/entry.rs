//! Entry types and their register bindings.
//!
//! `Entry` is the closed set of scalar types a `Vector` can hold. Each
//! entry type names its active register backend (selected here at compile
//! time from the build script's cfg flag) and the unsigned entry type its
//! gather/scatter offsets use. The lane count of a vector is whatever its
//! register provides — 64-bit entry types get half the lanes of 32-bit
//! ones on a 256-bit register, which is why the index entry type follows
//! the entry width (u32 for 32-bit entries, u64 for 64-bit entries): the
//! index vector always has the same lane count as the vector it addresses.

use std::fmt::Debug;

use crate::simd::traits::SimdRegister;

/// A scalar type that can populate vector lanes.
///
/// Implemented for f32, f64, i32, u32 and u64; the set is closed because
/// each member needs a register backend per instruction set.
pub trait Entry: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Unsigned entry type carrying per-lane gather/scatter offsets.
    type Index: IndexEntry;

    /// The register backend selected for this build.
    type Register: SimdRegister<Self, Index = <Self::Index as Entry>::Register>;
}

/// An entry type usable as a gather/scatter offset.
pub trait IndexEntry: Entry {
    /// Widens the offset for pointer arithmetic.
    fn as_usize(self) -> usize;

    /// Narrows a count into an offset lane. Debug-asserts that the value
    /// fits.
    fn from_usize(value: usize) -> Self;
}

impl IndexEntry for u32 {
    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        debug_assert!(value <= u32::MAX as usize, "offset does not fit in u32");
        value as u32
    }
}

impl IndexEntry for u64 {
    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn from_usize(value: usize) -> Self {
        value as u64
    }
}

#[cfg(avx2)]
mod bindings {
    use super::Entry;
    use crate::simd::avx2::{f32x8::F32x8, f64x4::F64x4, i32x8::I32x8, u32x8::U32x8, u64x4::U64x4};

    impl Entry for f32 {
        type Index = u32;
        type Register = F32x8;
    }

    impl Entry for f64 {
        type Index = u64;
        type Register = F64x4;
    }

    impl Entry for i32 {
        type Index = u32;
        type Register = I32x8;
    }

    impl Entry for u32 {
        type Index = u32;
        type Register = U32x8;
    }

    impl Entry for u64 {
        type Index = u64;
        type Register = U64x4;
    }
}

#[cfg(not(avx2))]
mod bindings {
    use super::Entry;
    use crate::simd::fallback::reg::ScalarReg;

    impl Entry for f32 {
        type Index = u32;
        type Register = ScalarReg<f32, 8>;
    }

    impl Entry for f64 {
        type Index = u64;
        type Register = ScalarReg<f64, 4>;
    }

    impl Entry for i32 {
        type Index = u32;
        type Register = ScalarReg<i32, 8>;
    }

    impl Entry for u32 {
        type Index = u32;
        type Register = ScalarReg<u32, 8>;
    }

    impl Entry for u64 {
        type Index = u64;
        type Register = ScalarReg<u64, 4>;
    }
}
