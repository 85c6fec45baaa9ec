use super::*;

#[test]
fn test_calculate_strides_simple() {
    assert_eq!(calculate_strides(&[2, 3, 4]), vec![12, 4, 1]);
    assert_eq!(calculate_strides(&[5]), vec![1]);
}

#[test]
fn test_calculate_strides_empty() {
    assert_eq!(calculate_strides(&[]), Vec::<usize>::new());
}

#[test]
fn test_broadcast_shapes_equal() {
    assert_eq!(broadcast_shapes(&[2, 3], &[2, 3]).unwrap(), vec![2, 3]);
}

#[test]
fn test_broadcast_shapes_prepend_ones() {
    assert_eq!(broadcast_shapes(&[4, 3], &[3]).unwrap(), vec![4, 3]);
    assert_eq!(broadcast_shapes(&[], &[2, 2]).unwrap(), vec![2, 2]);
    assert_eq!(broadcast_shapes(&[4, 1], &[1, 5]).unwrap(), vec![4, 5]);
}

#[test]
fn test_broadcast_shapes_incompatible() {
    let err = broadcast_shapes(&[2, 3], &[4]).unwrap_err();
    assert!(matches!(err, GradLabError::InvalidShape { .. }));
}

#[test]
fn test_broadcast_index_map_row_vector() {
    // [3] broadcast to [2, 3]
    assert_eq!(broadcast_index_map(&[3], &[2, 3]), vec![0, 1, 2, 0, 1, 2]);
    // [2, 1] broadcast to [2, 3]
    assert_eq!(broadcast_index_map(&[2, 1], &[2, 3]), vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn test_reduce_to_shape_sums_broadcast_axes() {
    let grad = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    assert_eq!(reduce_to_shape(&grad, &[2, 3], &[3]), vec![5.0, 7.0, 9.0]);
    assert_eq!(reduce_to_shape(&grad, &[2, 3], &[2, 1]), vec![6.0, 15.0]);
    assert_eq!(reduce_to_shape(&grad, &[2, 3], &[]), vec![21.0]);
}

#[test]
fn test_split_at_axis() {
    assert_eq!(split_at_axis(&[2, 3, 4], 1), (2, 3, 4));
    assert_eq!(split_at_axis(&[2, 3], 1), (2, 3, 1));
}
