use crate::partitions::{ExpectedCurve, ModelError, StirlingTable};

#[test]
fn curve_sums_to_sample_count() {
    // Arrange
    let table = StirlingTable::new(6);

    for samples in [0usize, 1, 7, 203, 10_000, 123_457] {
        // Act
        let curve = ExpectedCurve::from_table(&table, samples).unwrap();

        // Assert
        assert!(
            (curve.total() - samples as f64).abs() < 1e-6,
            "total {} != {samples}",
            curve.total()
        );
    }
}

#[test]
fn curve_is_proportional_to_stirling_values() {
    let table = StirlingTable::new(6);

    let curve = ExpectedCurve::from_table(&table, 203).unwrap();

    let xs: Vec<u32> = curve.points.iter().map(|(k, _)| *k).collect();
    assert_eq!(xs, vec![1, 2, 3, 4, 5, 6]);
    for (k, expected) in [(1, 1.0), (2, 31.0), (3, 90.0), (4, 65.0), (5, 15.0), (6, 1.0)] {
        let actual = curve.at(k).unwrap();
        assert!((actual - expected).abs() < 1e-9, "k={k}: {actual}");
    }
    assert_eq!(curve.at(7), None);
    assert!((curve.max() - 90.0).abs() < 1e-9);
}

#[test]
fn mean_block_count_for_six() {
    // sum k * S(6, k) = B(7) - B(6) = 877 - 203 = 674
    let table = StirlingTable::new(6);

    let curve = ExpectedCurve::from_table(&table, 1).unwrap();

    assert!((curve.mean - 674.0 / 203.0).abs() < 1e-12);
}

#[test]
fn zero_samples_gives_flat_zero_curve() {
    let table = StirlingTable::new(6);

    let curve = ExpectedCurve::from_table(&table, 0).unwrap();

    assert!(curve.points.iter().all(|(_, v)| *v == 0.0));
}

#[test]
fn empty_table_is_rejected() {
    let table = StirlingTable::new(0);

    let err = ExpectedCurve::from_table(&table, 10).unwrap_err();

    assert!(matches!(err, ModelError::EmptyTable { n: 0 }));
}
