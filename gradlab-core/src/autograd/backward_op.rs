use crate::error::GradLabError;
use crate::ops::linalg::{matmul_kernel, transpose_kernel};
use crate::tensor::utils::{broadcast_index_map, reduce_to_shape, split_at_axis};
use crate::tensor::Tensor;
use std::fmt::Debug;

/// The differentiable primitives, each carrying the context its gradient rule needs.
///
/// Shapes are read back from the node's inputs at backward time. Any value a rule
/// depends on (an input or the output) is copied into the variant when the op is
/// recorded, so in-place parameter updates between forward and backward cannot
/// change the gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum BackwardOp {
    Add,
    Sub,
    /// Forward values of both operands, before broadcasting.
    Mul { a: Vec<f32>, b: Vec<f32> },
    Neg,
    AddScalar,
    MulScalar(f32),
    PowScalar { exponent: f32, input: Vec<f32> },
    /// `[m, k] x [k, n]`
    MatMul { a: Vec<f32>, b: Vec<f32> },
    Transpose,
    Reshape,
    Relu { input: Vec<f32> },
    Sigmoid { output: Vec<f32> },
    Tanh { output: Vec<f32> },
    Exp { output: Vec<f32> },
    Ln { input: Vec<f32> },
    Sum,
    SumAxis { axis: usize },
    Mean,
    MeanAxis { axis: usize },
    /// Softmax probabilities over the last axis, cached from the forward pass.
    LogSoftmax { softmax: Vec<f32> },
    Softmax { output: Vec<f32> },
    /// Mean negative log-likelihood over a `[batch, classes]` input.
    NllLoss { targets: Vec<usize> },
}

/// A recorded operation: the rule plus the tensors it consumed.
#[derive(Debug)]
pub struct Node {
    pub(crate) op: BackwardOp,
    pub(crate) inputs: Vec<Tensor>,
}

impl Node {
    pub fn op(&self) -> &BackwardOp {
        &self.op
    }

    pub fn inputs(&self) -> &[Tensor] {
        &self.inputs
    }
}

impl BackwardOp {
    /// Short name used in debug output and logs.
    pub fn name(&self) -> &'static str {
        match self {
            BackwardOp::Add => "AddBackward",
            BackwardOp::Sub => "SubBackward",
            BackwardOp::Mul { .. } => "MulBackward",
            BackwardOp::Neg => "NegBackward",
            BackwardOp::AddScalar => "AddScalarBackward",
            BackwardOp::MulScalar(_) => "MulScalarBackward",
            BackwardOp::PowScalar { .. } => "PowScalarBackward",
            BackwardOp::MatMul { .. } => "MatMulBackward",
            BackwardOp::Transpose => "TransposeBackward",
            BackwardOp::Reshape => "ReshapeBackward",
            BackwardOp::Relu { .. } => "ReluBackward",
            BackwardOp::Sigmoid { .. } => "SigmoidBackward",
            BackwardOp::Tanh { .. } => "TanhBackward",
            BackwardOp::Exp { .. } => "ExpBackward",
            BackwardOp::Ln { .. } => "LnBackward",
            BackwardOp::Sum => "SumBackward",
            BackwardOp::SumAxis { .. } => "SumAxisBackward",
            BackwardOp::Mean => "MeanBackward",
            BackwardOp::MeanAxis { .. } => "MeanAxisBackward",
            BackwardOp::LogSoftmax { .. } => "LogSoftmaxBackward",
            BackwardOp::Softmax { .. } => "SoftmaxBackward",
            BackwardOp::NllLoss { .. } => "NllLossBackward",
        }
    }

    /// Computes dL/dInput for every input given dL/dOutput.
    ///
    /// `grad_output` is laid out like the op's output, whose shape is `output_shape`.
    /// The returned vector has one flat gradient per input, in input order, each
    /// laid out like its input.
    pub fn backward(
        &self,
        inputs: &[Tensor],
        grad_output: &[f32],
        output_shape: &[usize],
    ) -> Result<Vec<Vec<f32>>, GradLabError> {
        let grads = match self {
            BackwardOp::Add => {
                let (a, b) = binary(inputs, self)?;
                vec![
                    reduce_to_shape(grad_output, output_shape, &a.shape()),
                    reduce_to_shape(grad_output, output_shape, &b.shape()),
                ]
            }
            BackwardOp::Sub => {
                let (a, b) = binary(inputs, self)?;
                let neg: Vec<f32> = grad_output.iter().map(|g| -g).collect();
                vec![
                    reduce_to_shape(grad_output, output_shape, &a.shape()),
                    reduce_to_shape(&neg, output_shape, &b.shape()),
                ]
            }
            BackwardOp::Mul {
                a: a_data,
                b: b_data,
            } => {
                let (a, b) = binary(inputs, self)?;
                let (a_shape, b_shape) = (a.shape(), b.shape());
                let a_map = broadcast_index_map(&a_shape, output_shape);
                let b_map = broadcast_index_map(&b_shape, output_shape);
                // d(a*b)/da = b, d(a*b)/db = a, both taken at the broadcast position.
                let grad_a: Vec<f32> = grad_output
                    .iter()
                    .zip(&b_map)
                    .map(|(g, &j)| g * b_data[j])
                    .collect();
                let grad_b: Vec<f32> = grad_output
                    .iter()
                    .zip(&a_map)
                    .map(|(g, &i)| g * a_data[i])
                    .collect();
                vec![
                    reduce_to_shape(&grad_a, output_shape, &a_shape),
                    reduce_to_shape(&grad_b, output_shape, &b_shape),
                ]
            }
            BackwardOp::Neg => vec![grad_output.iter().map(|g| -g).collect()],
            BackwardOp::AddScalar | BackwardOp::Reshape => vec![grad_output.to_vec()],
            BackwardOp::MulScalar(s) => vec![grad_output.iter().map(|g| g * s).collect()],
            BackwardOp::PowScalar { exponent: p, input } => {
                vec![grad_output
                    .iter()
                    .zip(input)
                    .map(|(g, xi)| g * p * xi.powf(p - 1.0))
                    .collect()]
            }
            BackwardOp::MatMul { a: a_data, b: b_data } => {
                let (a, b) = binary(inputs, self)?;
                let (a_shape, b_shape) = (a.shape(), b.shape());
                let (m, k, n) = (a_shape[0], a_shape[1], b_shape[1]);
                // dA = G @ B^T, dB = A^T @ G
                let b_t = transpose_kernel(b_data, k, n);
                let a_t = transpose_kernel(a_data, m, k);
                vec![
                    matmul_kernel(grad_output, &b_t, m, n, k),
                    matmul_kernel(&a_t, grad_output, k, m, n),
                ]
            }
            BackwardOp::Transpose => {
                // Output is [n, m]; transposing the gradient gives back [m, n].
                vec![transpose_kernel(grad_output, output_shape[0], output_shape[1])]
            }
            BackwardOp::Relu { input } => {
                vec![grad_output
                    .iter()
                    .zip(input)
                    .map(|(g, &xi)| if xi > 0.0 { *g } else { 0.0 })
                    .collect()]
            }
            BackwardOp::Sigmoid { output } => vec![grad_output
                .iter()
                .zip(output)
                .map(|(g, s)| g * s * (1.0 - s))
                .collect()],
            BackwardOp::Tanh { output } => vec![grad_output
                .iter()
                .zip(output)
                .map(|(g, t)| g * (1.0 - t * t))
                .collect()],
            BackwardOp::Exp { output } => {
                vec![grad_output.iter().zip(output).map(|(g, e)| g * e).collect()]
            }
            BackwardOp::Ln { input } => {
                vec![grad_output.iter().zip(input).map(|(g, xi)| g / xi).collect()]
            }
            BackwardOp::Sum => {
                let numel = unary(inputs, self)?.numel();
                vec![vec![grad_output[0]; numel]]
            }
            BackwardOp::Mean => {
                let numel = unary(inputs, self)?.numel();
                vec![vec![grad_output[0] / numel as f32; numel]]
            }
            BackwardOp::SumAxis { axis } => {
                let input_shape = unary(inputs, self)?.shape();
                vec![expand_along_axis(grad_output, &input_shape, *axis, 1.0)]
            }
            BackwardOp::MeanAxis { axis } => {
                let input_shape = unary(inputs, self)?.shape();
                let scale = 1.0 / input_shape[*axis] as f32;
                vec![expand_along_axis(grad_output, &input_shape, *axis, scale)]
            }
            BackwardOp::LogSoftmax { softmax } => {
                let classes = last_dim(output_shape);
                let mut grad = vec![0.0; grad_output.len()];
                for (row, (g_row, s_row)) in grad_output
                    .chunks(classes)
                    .zip(softmax.chunks(classes))
                    .enumerate()
                {
                    let g_sum: f32 = g_row.iter().sum();
                    for c in 0..classes {
                        grad[row * classes + c] = g_row[c] - s_row[c] * g_sum;
                    }
                }
                vec![grad]
            }
            BackwardOp::Softmax { output } => {
                let classes = last_dim(output_shape);
                let mut grad = vec![0.0; grad_output.len()];
                for (row, (g_row, s_row)) in grad_output
                    .chunks(classes)
                    .zip(output.chunks(classes))
                    .enumerate()
                {
                    let dot: f32 = g_row.iter().zip(s_row).map(|(g, s)| g * s).sum();
                    for c in 0..classes {
                        grad[row * classes + c] = s_row[c] * (g_row[c] - dot);
                    }
                }
                vec![grad]
            }
            BackwardOp::NllLoss { targets } => {
                let input_shape = unary(inputs, self)?.shape();
                let (batch, classes) = (input_shape[0], input_shape[1]);
                let mut grad = vec![0.0; batch * classes];
                let scale = -grad_output[0] / batch as f32;
                for (row, &target) in targets.iter().enumerate() {
                    grad[row * classes + target] = scale;
                }
                vec![grad]
            }
        };
        Ok(grads)
    }
}

fn unary<'a>(inputs: &'a [Tensor], op: &BackwardOp) -> Result<&'a Tensor, GradLabError> {
    match inputs {
        [a] => Ok(a),
        _ => Err(arity_error(op, 1, inputs.len())),
    }
}

fn binary<'a>(
    inputs: &'a [Tensor],
    op: &BackwardOp,
) -> Result<(&'a Tensor, &'a Tensor), GradLabError> {
    match inputs {
        [a, b] => Ok((a, b)),
        _ => Err(arity_error(op, 2, inputs.len())),
    }
}

fn arity_error(op: &BackwardOp, expected: usize, actual: usize) -> GradLabError {
    GradLabError::InternalError(format!(
        "{} expects {} input(s), node holds {}",
        op.name(),
        expected,
        actual
    ))
}

fn last_dim(shape: &[usize]) -> usize {
    shape.last().copied().unwrap_or(1).max(1)
}

/// Repeats a gradient reduced over `axis` back across that axis, scaled by `scale`.
fn expand_along_axis(grad: &[f32], input_shape: &[usize], axis: usize, scale: f32) -> Vec<f32> {
    let (outer, len, inner) = split_at_axis(input_shape, axis);
    let mut expanded = vec![0.0; outer * len * inner];
    for o in 0..outer {
        for a in 0..len {
            for i in 0..inner {
                expanded[(o * len + a) * inner + i] = grad[o * inner + i] * scale;
            }
        }
    }
    expanded
}
