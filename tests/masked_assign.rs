//! Masked assignment semantics: only mask-selected lanes change, and the
//! write happens as a blend rather than a per-lane branch.

use lanewise::simd::{Mask, Vector};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn masked_assign_writes_selected_lanes_only() {
    let mut rng = StdRng::seed_from_u64(21);

    for _ in 0..100 {
        let before: Vec<f32> = (0..Vector::<f32>::SIZE)
            .map(|_| rng.random_range(-10.0..10.0))
            .collect();
        let rhs: Vec<f32> = (0..Vector::<f32>::SIZE)
            .map(|_| rng.random_range(-10.0..10.0))
            .collect();
        let threshold = rng.random_range(-10.0..10.0);

        let mut v = Vector::from_slice(&before);
        let k = v.lt_elements(Vector::broadcast(threshold));
        v.masked(k).assign(Vector::from_slice(&rhs));

        for lane in 0..Vector::<f32>::SIZE {
            let want = if before[lane] < threshold {
                rhs[lane]
            } else {
                before[lane]
            };
            assert_eq!(v[lane], want);
        }
    }
}

#[test]
fn masked_compound_assignment_accumulates() {
    let mut v = Vector::<i32>::indexes_from_zero();
    let odd = (v & Vector::one()).eq_elements(Vector::one());

    let mut lanes = v.masked(odd);
    lanes += Vector::broadcast(100);

    for lane in 0..Vector::<i32>::SIZE {
        let want = if lane % 2 == 1 {
            lane as i32 + 100
        } else {
            lane as i32
        };
        assert_eq!(v[lane], want);
    }
}

#[test]
fn masked_scalar_rhs_broadcasts() {
    let mut v = Vector::<f64>::one();
    let all = Mask::splat(true);

    let mut lanes = v.masked(all);
    lanes *= 2.5f64;

    assert_eq!(v.as_slice(), vec![2.5; Vector::<f64>::SIZE]);
}

#[test]
fn masked_bitwise_assignment() {
    let mut v = Vector::<u32>::broadcast(0b1111);
    let ramp = Vector::<u32>::indexes_from_zero();
    let low = ramp.lt_elements(Vector::broadcast(2));

    let mut lanes = v.masked(low);
    lanes &= Vector::broadcast(0b0101);

    assert_eq!(v[0], 0b0101);
    assert_eq!(v[1], 0b0101);
    assert_eq!(v[2], 0b1111);
}

#[test]
fn set_zero_variants() {
    let mut v = Vector::<f32>::broadcast(3.0);
    let ramp = Vector::<i32>::indexes_from_zero();
    let k = Vector::<f32>::convert(ramp).ge_elements(Vector::broadcast(2.0));

    v.set_zero_masked(k);
    for lane in 0..Vector::<f32>::SIZE {
        let want = if lane >= 2 { 0.0 } else { 3.0 };
        assert_eq!(v[lane], want);
    }

    v.set_zero();
    assert_eq!(v.as_slice(), vec![0.0; Vector::<f32>::SIZE]);
}

#[test]
fn example_scenario_from_the_crate_docs() {
    // v = 1, 2, 3, 4, ...; k = v < 3 selects the first two lanes;
    // v(k) += 10 leaves the rest untouched.
    let mut v = Vector::<i32>::indexes_from_zero() + Vector::one();
    let k = v.lt_elements(Vector::broadcast(3));

    assert!(k.test(0) && k.test(1));
    assert!(!k.test(2));

    let mut selected = v.masked(k);
    selected += Vector::broadcast(10);

    assert_eq!(v[0], 11);
    assert_eq!(v[1], 12);
    assert_eq!(v[2], 3);
    assert_eq!(v[3], 4);
}

#[test]
fn chained_masked_updates_compose() {
    let mut v = Vector::<i32>::zero();
    let ramp = Vector::<i32>::indexes_from_zero();

    v.masked(ramp.lt_elements(Vector::broadcast(4))).assign(Vector::one());
    let mut upper = v.masked(ramp.ge_elements(Vector::broadcast(4)));
    upper -= Vector::one();

    for lane in 0..Vector::<i32>::SIZE {
        let want = if lane < 4 { 1 } else { -1 };
        assert_eq!(v[lane], want);
    }
}
