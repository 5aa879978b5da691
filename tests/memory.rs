//! Memory and aligned-buffer staging: scalar population feeding vector
//! loads, and aligned heap buffers driving the aligned load/store path.

use lanewise::simd::{Align, Memory, Vector};
use lanewise::utils::AlignedBuffer;

#[test]
fn scalar_population_is_the_road_into_a_vector() {
    // Per-lane construction logic goes through Memory, not through
    // scalar writes into a live vector.
    let mut m = Memory::<f32, 8>::new();
    for i in 0..m.len() {
        m[i] = (i as f32).sin();
    }

    let v = m.load_vector(0);
    for lane in 0..Vector::<f32>::SIZE {
        assert_eq!(v[lane], (lane as f32).sin());
    }
}

#[test]
fn memory_is_aligned_for_the_aligned_path() {
    let mut m = Memory::<u64, 8>::new();
    for i in 0..m.len() {
        m[i] = i as u64 + 1;
    }
    assert_eq!(m.as_ptr() as usize % Vector::<u64>::ALIGN, 0);

    let mut v = Vector::<u64>::uninit();
    unsafe { v.load(m.as_ptr(), Align::Aligned) };
    assert_eq!(v[0], 1);
}

#[test]
fn chunked_memory_processes_in_register_strides() {
    const N: usize = 32;
    let mut input = Memory::<f32, N>::new();
    for i in 0..N {
        input[i] = i as f32;
    }

    // Double every entry a chunk at a time.
    let mut output = Memory::<f32, N>::new();
    for chunk in 0..input.vectors() {
        let v = input.load_vector(chunk) * Vector::broadcast(2.0);
        output.store_vector(chunk, v);
    }

    for i in 0..N {
        assert_eq!(output[i], i as f32 * 2.0);
    }
}

#[test]
fn aligned_buffer_feeds_aligned_vector_loads() {
    let mut buffer = AlignedBuffer::<f32>::new_zeroed(64, Vector::<f32>::ALIGN);
    for (i, slot) in buffer.iter_mut().enumerate() {
        *slot = i as f32 * 0.25;
    }

    let mut total = Vector::<f32>::zero();
    let mut offset = 0;
    while offset + Vector::<f32>::SIZE <= buffer.len() {
        let v = unsafe { Vector::<f32>::from_aligned(buffer.as_ptr().add(offset)) };
        total += v;
        offset += Vector::<f32>::SIZE;
    }

    // Horizontal check through the scalar view.
    let sum: f32 = total.as_slice().iter().sum();
    let want: f32 = (0..64).map(|i| i as f32 * 0.25).sum();
    assert_eq!(sum, want);
}

#[test]
fn aligned_buffer_rejects_invalid_requests() {
    assert!(AlignedBuffer::<f32>::try_new_zeroed(8, 7).is_err());
    assert!(AlignedBuffer::<f32>::try_new_zeroed(8, 2).is_err());
    assert!(AlignedBuffer::<f32>::try_new_zeroed(8, Vector::<f32>::ALIGN).is_ok());
}

#[test]
fn memory_copies_are_independent() {
    let mut a = Memory::<i32, 8>::new();
    a[0] = 5;

    let mut b = a;
    b[0] = 9;

    assert_eq!(a[0], 5);
    assert_eq!(b[0], 9);
}
