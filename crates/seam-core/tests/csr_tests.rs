use seam_core::{Coo, Csr, Error};

#[test]
fn from_parts_ok() {
    let row_offsets = vec![0usize, 2, 3];
    let col_indices = vec![0usize, 2, 1];
    let values = vec![1.0f64, 2.0, 3.0];
    let csr = Csr::from_parts(2, 3, row_offsets, col_indices, values, true).unwrap();
    assert_eq!(csr.nnz(), 3);
    assert_eq!(csr.shape(), (2, 3));
}

#[test]
fn row_offsets_first_must_be_zero() {
    let csr = Csr::from_parts(1, 3, vec![1, 1], vec![0], vec![1.0f64], true);
    let err = csr.unwrap_err();
    assert!(matches!(err, Error::InvalidMatrix { .. }));
    assert!(err.to_string().contains("must be 0"));
}

#[test]
fn nnz_and_lengths_must_match() {
    let err = Csr::from_parts(1, 3, vec![0, 2], vec![0, 1], vec![1.0f64], true).unwrap_err();
    assert!(err.to_string().contains("col_indices and values"));
}

#[test]
fn last_offset_must_equal_nnz() {
    let err = Csr::from_parts(1, 3, vec![0, 1], vec![0, 1], vec![1.0f64, 2.0], true).unwrap_err();
    assert!(err.to_string().contains("last element"));
}

#[test]
fn row_offsets_must_be_non_decreasing() {
    let err = Csr::from_parts(2, 3, vec![0, 2, 1], vec![0], vec![1.0f64], true).unwrap_err();
    assert!(err.to_string().contains("non-decreasing"));
}

#[test]
fn column_index_out_of_bounds() {
    let err = Csr::from_parts(1, 3, vec![0, 1], vec![3], vec![1.0f64], true).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn unsorted_columns_within_a_row_are_accepted() {
    // [5 7 9] stored back-to-front in row 0
    let csr = Csr::from_parts(
        1,
        3,
        vec![0, 3],
        vec![2, 0, 1],
        vec![9.0f64, 5.0, 7.0],
        true,
    )
    .unwrap();
    assert!(csr.validate().is_ok());
}

#[test]
fn unchecked_then_validate_catches_bad_matrix() {
    let csr = Csr::from_parts_unchecked(2, 2, vec![0, 3, 2], vec![0, 1], vec![1.0f64, 2.0]);
    assert!(csr.validate().is_err());
}

#[test]
fn coo_to_csr_groups_rows_and_keeps_input_order() {
    // Entries deliberately out of row order; row 1 columns arrive as 2, 0.
    let coo = Coo::from_parts(
        3,
        3,
        vec![1, 0, 1, 2],
        vec![2, 1, 0, 2],
        vec![12.0f64, 1.0, 10.0, 22.0],
        true,
    )
    .unwrap();
    let csr = coo.to_csr();
    assert_eq!(csr.row_offsets, vec![0, 1, 3, 4]);
    assert_eq!(csr.col_indices, vec![1, 2, 0, 2]);
    assert_eq!(csr.values, vec![1.0, 12.0, 10.0, 22.0]);
    assert!(csr.validate().is_ok());
}

#[test]
fn coo_rejects_out_of_bounds_entry() {
    let err = Coo::from_parts(2, 2, vec![0, 2], vec![0, 1], vec![1.0f64, 2.0], true).unwrap_err();
    assert!(matches!(err, Error::InvalidMatrix { .. }));
}

#[test]
fn empty_matrix_round_trip() {
    let coo = Coo::<f64>::from_parts(4, 4, vec![], vec![], vec![], true).unwrap();
    let csr = coo.to_csr();
    assert_eq!(csr.nnz(), 0);
    assert_eq!(csr.row_offsets, vec![0, 0, 0, 0, 0]);
    assert!(csr.validate().is_ok());
}
