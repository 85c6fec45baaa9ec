use crate::tensor::Tensor;
use std::collections::HashSet;

/// Builds a topological ordering of the graph rooted at `root`.
///
/// Every tensor appears after all of its tracked inputs, so iterating the result in
/// reverse visits each node only once all of its consumers have been processed.
/// Nodes are identified by their shared allocation, not by handle.
/// Untracked inputs are left out since no gradient flows to them.
pub(crate) fn topological_sort(root: &Tensor) -> Vec<Tensor> {
    let mut visited: HashSet<usize> = HashSet::new();
    let mut order = Vec::new();
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((tensor, children_done)) = stack.pop() {
        if children_done {
            order.push(tensor);
            continue;
        }
        if !visited.insert(tensor.node_id()) {
            continue;
        }
        let grad_fn = tensor.read_data().grad_fn.clone();
        stack.push((tensor, true));
        if let Some(node) = grad_fn {
            for input in node.inputs.iter() {
                if input.requires_grad() && !visited.contains(&input.node_id()) {
                    stack.push((input.clone(), false));
                }
            }
        }
    }
    order
}
