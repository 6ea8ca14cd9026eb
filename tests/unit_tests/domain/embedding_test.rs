use pdfqa::domain::Embedding;

#[test]
fn given_identical_vectors_when_measuring_distance_then_is_zero() {
    let a = Embedding::new(vec![0.5, -1.0, 2.0]);

    assert_eq!(a.squared_euclidean_distance(&a.clone()), 0.0);
}

#[test]
fn given_unit_offsets_when_measuring_distance_then_returns_squared_sum() {
    let a = Embedding::new(vec![0.0, 0.0]);
    let b = Embedding::new(vec![3.0, 4.0]);

    assert_eq!(a.squared_euclidean_distance(&b), 25.0);
    assert_eq!(b.dimensions(), 2);
}
