//! Integration Tests for Hopfield Memory Library

use approx::assert_relative_eq;
use hopfield_memory::prelude::*;

const T: bool = true;
const F: bool = false;

fn sample_matrix(rows: usize, cols: usize) -> Matrix {
    let values: Vec<f64> = (0..rows * cols)
        .map(|i| (i as f64) * 0.5 - 3.0)
        .collect();
    Matrix::from_packed_array(rows, cols, &values).unwrap()
}

/// Identity has exactly n ones, all on the diagonal
#[test]
fn test_identity_diagonal() {
    for n in 1..=6 {
        let id = math::identity(n).unwrap();
        assert_eq!(id.dim(), (n, n));
        assert_relative_eq!(id.sum(), n as f64);

        let ones = id.to_packed_array().iter().filter(|&&v| v == 1.0).count();
        assert_eq!(ones, n);
        for i in 0..n {
            assert_eq!(id.get(i, i).unwrap(), 1.0);
        }
    }
}

/// Transposing twice gives back the original matrix
#[test]
fn test_double_transpose() {
    for (rows, cols) in [(1, 1), (1, 5), (4, 1), (3, 7), (6, 6)] {
        let m = sample_matrix(rows, cols);
        let t = math::transpose(&m);
        assert_eq!(t.dim(), (cols, rows));
        assert_eq!(math::transpose(&t), m);
    }
}

/// Subtract undoes Add
#[test]
fn test_add_subtract_inverse() {
    let a = sample_matrix(3, 4);
    let b = math::multiply_scalar(&sample_matrix(3, 4), -1.5);

    let sum = math::add(&a, &b).unwrap();
    let back = math::subtract(&sum, &b).unwrap();

    for (x, y) in back.to_packed_array().iter().zip(a.to_packed_array().iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12);
    }
}

/// Product shapes and multiplication by identity
#[test]
fn test_multiply_shape_and_identity() {
    let a = sample_matrix(2, 3);
    let b = sample_matrix(3, 5);
    assert_eq!(math::multiply(&a, &b).unwrap().dim(), (2, 5));

    let left = math::multiply(&math::identity(2).unwrap(), &a).unwrap();
    let right = math::multiply(&a, &math::identity(3).unwrap()).unwrap();
    assert_eq!(left, a);
    assert_eq!(right, a);
}

/// Mismatched inner dimensions are rejected, never truncated or padded
#[test]
fn test_multiply_mismatch_always_errors() {
    for (a_shape, b_shape) in [((2, 3), (2, 3)), ((1, 4), (3, 1)), ((3, 3), (2, 3))] {
        let a = sample_matrix(a_shape.0, a_shape.1);
        let b = sample_matrix(b_shape.0, b_shape.1);
        let err = math::multiply(&a, &b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                operation: "multiply",
                left: a_shape,
                right: b_shape,
            }
        );
    }
}

/// Dot product does not depend on operand order
#[test]
fn test_dot_product_symmetric() {
    let a = Matrix::create_row_matrix(&[1.0, -2.0, 3.5, 0.25]).unwrap();
    let b = Matrix::create_column_matrix(&[-1.0, 4.0, 2.0, 8.0]).unwrap();

    let ab = math::dot_product(&a, &b).unwrap();
    let ba = math::dot_product(&b, &a).unwrap();
    assert_relative_eq!(ab, ba);
    assert_relative_eq!(ab, -1.0 - 8.0 + 7.0 + 2.0);
}

/// Demo scenario: train one pattern, recall it from itself
/// and from a one-bit corruption
#[test]
fn test_demo_scenario() {
    let mut network = HopfieldNetwork::new(4).unwrap();
    let trained = [T, T, F, F];
    network.train(&trained).unwrap();

    let recalled = network.present(&trained).unwrap();
    assert_eq!(format_pattern(&recalled), "[T,T,F,F]");

    let recalled = network.present(&[T, F, F, F]).unwrap();
    assert_eq!(format_pattern(&recalled), "[T,T,F,F]");
}

/// Two orthogonal patterns are both stored and a corrupted probe recalls
/// the nearer one
#[test]
fn test_two_orthogonal_patterns() {
    let first = [T, T, T, T, F, F, F, F];
    let second = [T, F, T, F, T, F, T, F];

    let mut network = HopfieldNetwork::new(8).unwrap();
    network.train(&first).unwrap();
    network.train(&second).unwrap();

    assert_eq!(network.present(&first).unwrap(), first.to_vec());
    assert_eq!(network.present(&second).unwrap(), second.to_vec());

    let corrupted = [F, T, T, T, F, F, F, F];
    assert_eq!(network.present(&corrupted).unwrap(), first.to_vec());
}

/// Training order does not change the final weights
#[test]
fn test_train_order_independent() {
    let a = [T, F, T, T, F];
    let b = [F, F, T, F, T];

    let mut ab = HopfieldNetwork::new(5).unwrap();
    ab.train(&a).unwrap();
    ab.train(&b).unwrap();

    let mut ba = HopfieldNetwork::new(5).unwrap();
    ba.train(&b).unwrap();
    ba.train(&a).unwrap();

    assert_eq!(ab.weights(), ba.weights());
}

/// A rejected training call leaves every weight bit-for-bit unchanged
#[test]
fn test_train_wrong_length_is_atomic() {
    let mut network = HopfieldNetwork::new(4).unwrap();
    network.train(&[T, F, T, F]).unwrap();
    let before: Vec<u64> = network
        .weights()
        .to_packed_array()
        .iter()
        .map(|v| v.to_bits())
        .collect();

    for bad in [vec![T, F, T], vec![T, F, T, F, T], vec![]] {
        let err = network.train(&bad).unwrap_err();
        assert!(matches!(err, HopfieldError::SizeMismatch { expected: 4, .. }));
    }

    let after: Vec<u64> = network
        .weights()
        .to_packed_array()
        .iter()
        .map(|v| v.to_bits())
        .collect();
    assert_eq!(before, after);
    assert_eq!(network.pattern_count(), 1);
}

/// Presenting after each training step reflects everything trained so far
#[test]
fn test_recall_tracks_training() {
    let mut network = HopfieldNetwork::new(4).unwrap();
    assert_eq!(network.present(&[T, T, F, F]).unwrap(), vec![F, F, F, F]);

    network.train(&[T, T, F, F]).unwrap();
    assert_eq!(network.present(&[T, T, F, F]).unwrap(), vec![T, T, F, F]);
}

/// Net input of exactly zero recalls false
#[test]
fn test_zero_tie_break() {
    let mut network = HopfieldNetwork::new(3).unwrap();
    network.train(&[T, T, T]).unwrap();

    let net = network.net_input(&[T, T, F]).unwrap();
    assert_eq!(net[0], 0.0);
    assert_eq!(net[1], 0.0);
    assert_eq!(network.present(&[T, T, F]).unwrap(), vec![F, F, T]);
}

/// Patterns parsed from text train the same network as literal ones
#[test]
fn test_parsed_patterns() {
    let parsed = parse_pattern("T,T,F,F").unwrap();
    let mut network = HopfieldNetwork::new(parsed.len()).unwrap();
    network.train(&parsed).unwrap();

    let probe = parse_pattern("[1,0,0,0]").unwrap();
    assert_eq!(network.present(&probe).unwrap(), parsed);
}
