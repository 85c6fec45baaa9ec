//! Assertion helpers shared by unit and integration tests.

use crate::tensor::Tensor;

/// Checks that `actual` has `expected_shape` and that every element is within
/// `tolerance` of `expected_data`.
///
/// Panics with the first mismatching index otherwise.
pub fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_data: &[f32],
    tolerance: f32,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data = actual.to_vec();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data.iter().zip(expected_data).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tensor_near_accepts_close_values() {
        let t = Tensor::new(vec![1.0, 2.0], vec![2]).expect("tensor");
        check_tensor_near(&t, &[2], &[1.0 + 1e-7, 2.0], 1e-6);
    }

    #[test]
    #[should_panic(expected = "Data mismatch at index 1")]
    fn test_check_tensor_near_rejects_nan() {
        let t = Tensor::new(vec![1.0, f32::NAN], vec![2]).expect("tensor");
        check_tensor_near(&t, &[2], &[1.0, 2.0], 1e-3);
    }
}
