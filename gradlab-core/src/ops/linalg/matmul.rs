use crate::autograd::{record, BackwardOp};
use crate::error::GradLabError;
use crate::ops::linalg::matmul_kernel;
use crate::tensor::Tensor;

/// Matrix multiplication of two 2-D tensors: `[m, k] x [k, n] -> [m, n]`.
///
/// # Errors
/// `InvalidShape` if either input is not 2-D or the inner dimensions differ.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, GradLabError> {
    let a_shape = a.shape();
    let b_shape = b.shape();
    if a_shape.len() != 2 || b_shape.len() != 2 {
        return Err(GradLabError::InvalidShape {
            expected: "two 2-D tensors".to_string(),
            actual: format!("{:?} and {:?}", a_shape, b_shape),
            operation: "matmul".to_string(),
        });
    }
    let (m, k) = (a_shape[0], a_shape[1]);
    let (k2, n) = (b_shape[0], b_shape[1]);
    if k != k2 {
        return Err(GradLabError::InvalidShape {
            expected: format!("inner dimensions to match ({} from the left operand)", k),
            actual: format!("{:?} x {:?}", a_shape, b_shape),
            operation: "matmul".to_string(),
        });
    }

    let (a_data, b_data) = (a.to_vec(), b.to_vec());
    let data = matmul_kernel(&a_data, &b_data, m, k, n);
    let output = Tensor::new(data, vec![m, n])?;
    Ok(record(&[a, b], output, || BackwardOp::MatMul {
        a: a_data,
        b: b_data,
    }))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
