use hybrid_systems::{error::Site, mode::Field, prelude::*, shape::BlockShape};

use {
    super::strategy::split_state_strategy,
    proptest::{prop_assert_eq, proptest},
};

fn double(dim: usize) -> Mode {
    Mode::new("double", dim, |x: &[f64]| x.iter().map(|v| 2.0 * v).collect())
}

fn increment(dim: usize) -> Mode {
    Mode::new("increment", dim, |x: &[f64]| x.iter().map(|v| v + 1.0).collect())
}

proptest! {
    /// parallel(M, N) evaluates M on the first M.dim coordinates and N on the rest.
    #[test]
    fn test_parallel_dimension_closure((a, b) in split_state_strategy()) {
        let m = double(a.len());
        let n = increment(b.len());
        let mn = Mode::parallel(&m, &n);
        prop_assert_eq!(mn.dim(), a.len() + b.len());

        let x: Vec<f64> = a.iter().chain(b.iter()).cloned().collect();
        let expected: Vec<f64> = m
            .vector_field(&a)
            .into_iter()
            .chain(n.vector_field(&b))
            .collect();
        prop_assert_eq!(mn.flow(&x).unwrap().0, expected);
    }
}

#[test]
fn test_nested_parallel_is_flat() {
    let a = double(1);
    let b = increment(2);
    let c = Mode::stationary(3);
    let abc = Mode::parallel(&Mode::parallel(&a, &b), &c);

    assert_eq!(abc.dim(), 6);
    assert_eq!(abc.blocks().len(), 3);
    assert_eq!(
        abc.shape().blocks,
        vec![
            BlockShape { offset: 0, dim: 1, field: Some("double".to_string()) },
            BlockShape { offset: 1, dim: 2, field: Some("increment".to_string()) },
            BlockShape { offset: 3, dim: 3, field: None },
        ]
    );
    assert_eq!(abc.blocks()[2].field, Field::Zero);

    let dx = abc.flow(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(dx.0, vec![2.0, 3.0, 4.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_parallel_is_associative_on_fields() {
    let (a, b, c) = (double(1), increment(1), double(2));
    let left = Mode::parallel(&Mode::parallel(&a, &b), &c);
    let right = Mode::parallel(&a, &Mode::parallel(&b, &c));
    assert_eq!(left, right);
}

#[test]
fn test_stationary() {
    let m = Mode::stationary(3);
    assert_eq!(m.flow(&[1.0, 2.0, 3.0]).unwrap(), StateVector::zeros(3));

    let empty = Mode::stationary(0);
    assert!(empty.blocks().is_empty());
    assert_eq!(empty.flow(&[]).unwrap().dim(), 0);
}

#[test]
fn test_flow_rejects_wrong_input_length() {
    let m = double(2);
    assert_eq!(
        m.flow(&[1.0, 2.0, 3.0]),
        Err(HybridError::ArityMismatch {
            mode: None,
            site: Site::VectorField,
            expected: 2,
            found: 3,
        })
    );
}

#[test]
fn test_flow_rejects_wrong_output_length() {
    let m = Mode::new("bad", 2, |_: &[f64]| vec![0.0]);
    assert_eq!(
        m.flow(&[1.0, 2.0]),
        Err(HybridError::ArityMismatch {
            mode: None,
            site: Site::VectorField,
            expected: 2,
            found: 1,
        })
    );
}
