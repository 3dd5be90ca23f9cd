// Property tests for the Matrix algebra contracts. Shapes stay small so
// each case is cheap; data is derived from the seed so failures replay.

use super::*;
use proptest::prelude::*;

fn seeded_data(n: usize, seed: u32) -> Vec<f64> {
    (0..n)
        .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_transpose_involution(
        rows in 1..=8usize,
        cols in 1..=8usize,
        seed in 0..500u32,
    ) {
        let a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed))
            .expect("data length matches rows * cols");
        let att = a.transpose().transpose();

        prop_assert_eq!(att.shape(), a.shape());
        prop_assert_eq!(att, a);
    }

    #[test]
    fn prop_identity_matmul(
        n in 1..=6usize,
        seed in 0..500u32,
    ) {
        let a = Matrix::from_vec(n, n, seeded_data(n * n, seed))
            .expect("data length matches n * n");
        let eye = Matrix::eye(n).expect("n >= 1");

        let right = a.matmul(&eye).expect("compatible dims");
        let left = eye.matmul(&a).expect("compatible dims");
        for i in 0..n {
            for j in 0..n {
                let x = a.get(i, j).expect("in bounds");
                prop_assert!((right.get(i, j).expect("in bounds") - x).abs() < 1e-9);
                prop_assert!((left.get(i, j).expect("in bounds") - x).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_matmul_par_equals_sequential(
        m in 1..=7usize,
        k in 1..=7usize,
        n in 1..=7usize,
        seed in 0..500u32,
    ) {
        let a = Matrix::from_vec(m, k, seeded_data(m * k, seed))
            .expect("data length matches m * k");
        let b = Matrix::from_vec(k, n, seeded_data(k * n, seed.wrapping_add(17)))
            .expect("data length matches k * n");

        let seq = a.matmul(&b).expect("compatible dims");
        let par = a.matmul_par(&b).expect("compatible dims");
        // Per-cell accumulation order is identical, so equality is exact.
        prop_assert_eq!(seq, par);
    }

    #[test]
    fn prop_avg_axis_is_sum_over_extent(
        rows in 1..=8usize,
        cols in 1..=8usize,
        seed in 0..500u32,
    ) {
        let a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed))
            .expect("data length matches rows * cols");

        for i in 0..rows {
            let avg = a.avg_axis(Axis::Row, i as isize).expect("row exists");
            let sum = a.sum_axis(Axis::Row, i as isize).expect("row exists");
            prop_assert!((avg - sum / cols as f64).abs() < 1e-9);
        }
        for j in 0..cols {
            let avg = a.avg_axis(Axis::Col, j as isize).expect("column exists");
            let sum = a.sum_axis(Axis::Col, j as isize).expect("column exists");
            prop_assert!((avg - sum / rows as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_negative_axis_index_matches_positive(
        rows in 1..=8usize,
        cols in 1..=8usize,
        seed in 0..500u32,
    ) {
        let a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed))
            .expect("data length matches rows * cols");

        for i in 0..rows {
            let from_end = -((rows - i) as isize);
            prop_assert_eq!(
                a.sum_axis(Axis::Row, i as isize).expect("row exists"),
                a.sum_axis(Axis::Row, from_end).expect("negative form of same row"),
            );
        }
    }

    #[test]
    fn prop_reshape_preserves_flat(
        rows in 1..=6usize,
        cols in 1..=6usize,
        seed in 0..500u32,
    ) {
        let mut a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed))
            .expect("data length matches rows * cols");
        let before = a.to_flat();
        a.reshape(cols, rows).expect("same element count");
        prop_assert_eq!(a.to_flat(), before);
    }

    #[test]
    fn prop_add_zero_is_identity(
        rows in 1..=8usize,
        cols in 1..=8usize,
        seed in 0..500u32,
    ) {
        let mut a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed))
            .expect("data length matches rows * cols");
        let before = a.clone();
        a.add(0.0).expect("scalar add cannot fail");
        prop_assert_eq!(a, before);
    }
}
