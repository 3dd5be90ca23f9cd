//! End-to-end scenarios exercising the public surface the way an
//! application would: construction, transposition, products, axis
//! reductions, CSV persistence, and failure atomicity.

use matriz::prelude::*;
use std::io::Cursor;

fn inc_matrix(rows: usize, cols: usize) -> Matrix {
    let mut m = Matrix::zeros(rows, cols).expect("test shapes are non-empty");
    m.set_inc();
    m
}

#[test]
fn transpose_of_incrementing_matrix() {
    let t = inc_matrix(3, 4).transpose();
    assert_eq!(t.shape(), (4, 3));
    assert_eq!(t.get(0, 2).expect("in bounds"), 8.0);
    assert_eq!(t.get(3, 1).expect("in bounds"), 7.0);
}

#[test]
fn incrementing_matrix_product() {
    let a = inc_matrix(10, 4);
    let b = inc_matrix(4, 10);
    let c = a.matmul(&b).expect("inner dimensions agree: 4");

    assert_eq!(c.shape(), (10, 10));
    // c[0,0] = 0*0 + 1*10 + 2*20 + 3*30 = 140
    assert_eq!(c.get(0, 0).expect("in bounds"), 140.0);

    let par = a.matmul_par(&b).expect("inner dimensions agree: 4");
    assert_eq!(c, par);
}

#[test]
fn ones_matrix_axis_sums() {
    let m = Matrix::ones(12, 17).expect("12x17 is a valid shape");
    for i in 0..12 {
        assert_eq!(m.sum_axis(Axis::Row, i as isize).expect("row exists"), 17.0);
    }
    for j in 0..17 {
        assert_eq!(m.sum_axis(Axis::Col, j as isize).expect("column exists"), 12.0);
    }
}

#[test]
fn vector_dot_products() {
    let v = Vector::ones(13);
    let w = Vector::zeros(13);
    assert_eq!(v.dot(&w).expect("equal lengths"), 0.0);

    let inc = Vector::inc(13);
    assert_eq!(inc.dot(&v).expect("equal lengths"), inc.sum());
    assert_eq!(inc.dot(&v).expect("equal lengths"), 78.0);
    assert_eq!(
        v.dot(&inc).expect("equal lengths"),
        inc.dot(&v).expect("equal lengths")
    );
}

#[test]
fn csv_round_trip_preserves_values() {
    let original = inc_matrix(4, 4);

    let mut buf = Vec::new();
    original.to_csv(&mut buf).expect("writing to a Vec cannot fail");
    let restored = Matrix::from_csv(Cursor::new(buf)).expect("own output reads back");

    assert_eq!(restored, original);
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(
                restored.get(i, j).expect("in bounds"),
                original.get(i, j).expect("in bounds")
            );
        }
    }
}

#[test]
fn failed_division_leaves_operand_untouched() {
    let mut m = inc_matrix(4, 3);
    let before = m.clone();

    let mut divisor = Matrix::ones(4, 3).expect("4x3 is a valid shape");
    divisor.set(2, 1, 0.0).expect("in bounds");

    assert!(matches!(m.div(&divisor).unwrap_err(), Error::DivisionByZero));
    assert_eq!(m, before);
}

#[test]
fn fluent_pipeline() {
    // Chained in-place ops followed by reductions, the intended usage style.
    let mut m = Matrix::zeros(3, 3).expect("3x3 is a valid shape");
    m.set_inc().add(1.0).expect("scalar add cannot fail");
    m.scale(2.0);

    assert_eq!(m.sum(), 90.0);
    assert_eq!(m.sum_axis(Axis::Row, -1).expect("last row"), 48.0);
    let filtered = m.filter(|x| x > 10.0).expect("some elements exceed 10");
    assert_eq!(filtered.shape().0, 1);
    assert!(filtered.all(|x| x > 10.0));
}
