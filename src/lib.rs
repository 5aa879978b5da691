//! Portable fixed-width SIMD vector abstraction.
//!
//! One value type, [`Vector<T>`](simd::Vector), represents `SIZE` scalar
//! lanes of a numeric entry type, backed by whatever register width the
//! build machine offers, behind an API that does not change with that
//! width. Comparisons produce per-lane [`Mask`](simd::Mask)s, partial
//! mutation goes through masked assignment, and indexed access to
//! arbitrary memory layouts goes through gather and scatter — all
//! branch-free at the register level.
//!
//! The build script probes the CPU and compiles exactly one register
//! backend (AVX2 today, portable scalar registers everywhere else); lane
//! counts follow the backend, so code is written against `Vector::SIZE`
//! rather than a fixed number.
//!
//! ```rust
//! use lanewise::simd::Vector;
//!
//! // 1, 2, 3, ... regardless of how many lanes the build has.
//! let mut v = Vector::<i32>::indexes_from_zero() + Vector::one();
//!
//! // Masked assignment: only the lanes below 3 are touched.
//! let small = v.lt_elements(Vector::broadcast(3));
//! let mut selected = v.masked(small);
//! selected += Vector::broadcast(10);
//!
//! assert_eq!(v[0], 11);
//! assert_eq!(v[2], 3);
//! ```

pub mod error;
pub mod simd;
pub mod utils;
