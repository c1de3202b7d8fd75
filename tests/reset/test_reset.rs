use hybrid_systems::{
    prelude::*,
    reset::{Cases, Product},
    shape::ResetShape,
};
use std::sync::Arc;

use {
    crate::theory::systems::threshold,
    proptest::{prop_assert_eq, proptest},
};

#[test]
fn test_either_truth_table() {
    let r1 = Reset::new("pos", |x: &[f64]| x[0] > 0.0, |_: &[f64]| vec![1.0]);
    let r2 = Reset::new("neg", |x: &[f64]| x[0] < -5.0, |_: &[f64]| vec![2.0]);
    let r = Reset::either(r1, r2);

    assert_eq!(r.fire(&[1.0]), Some(vec![1.0]));
    assert_eq!(r.fire(&[-10.0]), Some(vec![2.0]));
    assert_eq!(r.fire(&[-1.0]), None);
}

#[test]
fn test_either_first_has_priority() {
    let r1 = threshold("first", 0.0, 1.0);
    let r2 = threshold("second", -1.0, 100.0);

    // both guards hold at 1.0
    assert_eq!(Reset::either(r1.clone(), r2.clone()).fire(&[1.0]), Some(vec![2.0]));
    assert_eq!(Reset::either(r2, r1).fire(&[1.0]), Some(vec![101.0]));
}

#[test]
fn test_either_never_is_unit() {
    let r = threshold("r", 0.0, 1.0);
    assert_eq!(Reset::either(Reset::never(), r.clone()), r);
    assert_eq!(Reset::either(r.clone(), Reset::never()), r);
    assert!(Reset::either(Reset::never(), Reset::never()).is_never());
}

#[test]
fn test_either_shape_and_depth() {
    let r = Reset::either(
        Reset::either(threshold("a", 0.0, 0.0), threshold("b", 0.0, 0.0)),
        threshold("c", 0.0, 0.0),
    );
    assert_eq!(r.depth(), 2);
    assert_eq!(
        r.shape(),
        ResetShape::Either(
            Box::new(ResetShape::Either(
                Box::new(ResetShape::leaf("a")),
                Box::new(ResetShape::leaf("b")),
            )),
            Box::new(ResetShape::leaf("c")),
        )
    );
}

#[test]
fn test_never() {
    let r = Reset::never();
    assert!(!r.holds(&[0.0, 1.0]));
    assert_eq!(r.fire(&[0.0, 1.0]), None);
    assert_eq!(r.depth(), 0);
    assert_eq!(r.shape(), ResetShape::Never);
}

#[test]
fn test_leaves_with_distinct_names() {
    let guard = GuardLeaf::guard("x0 > 0", |x: &[f64]| x[0] > 0.0);
    let map = MapLeaf::map("negate", |x: &[f64]| x.iter().map(|v| -v).collect());
    let r = Reset::from_leaves(guard, map);
    assert_eq!(
        r.shape(),
        ResetShape::Leaf {
            guard: "x0 > 0".to_string(),
            map: "negate".to_string(),
        }
    );
    assert_eq!(r.fire(&[2.0, 3.0]), Some(vec![-2.0, -3.0]));
}

#[test]
fn test_leaf_equality_is_by_function() {
    let r = threshold("r", 0.0, 1.0);
    // same name, different function
    let s = threshold("r", 0.0, 1.0);
    assert_eq!(r, r.clone());
    assert_ne!(r, s);
}

#[test]
fn test_apply_is_identity_outside_guard() {
    let r = threshold("r", 0.0, 1.0);
    assert_eq!(r.apply(&[1.0, 2.0]), vec![2.0, 3.0]);
    assert_eq!(r.apply(&[-1.0, 2.0]), vec![-1.0, 2.0]);
    assert_eq!(Reset::never().apply(&[4.0]), vec![4.0]);
}

#[test]
fn test_cases_admit() {
    let all = Cases::LEFT_ONLY | Cases::RIGHT_ONLY | Cases::BOTH;
    assert!(!all.admits(false, false));
    assert!(all.admits(true, false) && all.admits(false, true) && all.admits(true, true));

    assert!(Cases::LEFT_ONLY.admits(true, false));
    assert!(!Cases::LEFT_ONLY.admits(true, true));
    assert!(!Cases::BOTH.admits(false, true));
    assert!(Cases::default().is_empty());
    assert!(!Cases::BOTH.is_empty());
}

#[test]
fn test_product_resets_only_the_blocks_that_fire() {
    let left = threshold("l", 0.0, 1.0);
    let right = threshold("r", 0.0, 10.0);
    let r = Product {
        left,
        right,
        split: 1,
        cases: Cases::LEFT_ONLY | Cases::BOTH,
    }
    .into_reset();

    assert_eq!(r.fire(&[1.0, -1.0, -2.0]), Some(vec![2.0, -1.0, -2.0]));
    assert_eq!(r.fire(&[1.0, 1.0, 2.0]), Some(vec![2.0, 11.0, 12.0]));
    // right only is not one of the cases
    assert_eq!(r.fire(&[-1.0, 1.0, 2.0]), None);
    assert_eq!(r.min_arity(), 1);
    assert_eq!(r.depth(), 1);
}

#[test]
fn test_product_that_cannot_fire_is_never() {
    let r = Product {
        left: threshold("l", 0.0, 1.0),
        right: Reset::never(),
        split: 1,
        cases: Cases::BOTH | Cases::RIGHT_ONLY,
    };
    assert!(r.into_reset().is_never());

    let r = Product {
        left: threshold("l", 0.0, 1.0),
        right: threshold("r", 0.0, 1.0),
        split: 1,
        cases: Cases::default(),
    };
    assert!(r.into_reset().is_never());
}

#[test]
fn test_min_arity_of_nested_products() {
    let leaf = || threshold("x", 0.0, 0.0);
    let inner = Reset::Product(Arc::new(Product {
        left: leaf(),
        right: leaf(),
        split: 2,
        cases: Cases::BOTH,
    }));
    let outer = Reset::Product(Arc::new(Product {
        left: leaf(),
        right: inner.clone(),
        split: 1,
        cases: Cases::BOTH,
    }));

    assert_eq!(leaf().min_arity(), 0);
    assert_eq!(inner.min_arity(), 2);
    assert_eq!(outer.min_arity(), 3);
    assert_eq!(Reset::either(leaf(), outer).min_arity(), 3);
}

proptest! {
    #[test]
    fn test_either_guard_is_disjunction(
        c1 in -5.0..5.0f64,
        c2 in -5.0..5.0f64,
        x in -10.0..10.0f64,
    ) {
        let r1 = threshold("r1", c1, 1.0);
        let r2 = threshold("r2", c2, 2.0);
        let r = Reset::either(r1.clone(), r2.clone());

        prop_assert_eq!(r.holds(&[x]), r1.holds(&[x]) || r2.holds(&[x]));
        if r1.holds(&[x]) {
            prop_assert_eq!(r.fire(&[x]), r1.fire(&[x]));
        } else {
            prop_assert_eq!(r.fire(&[x]), r2.fire(&[x]));
        }
    }
}
