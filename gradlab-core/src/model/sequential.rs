use crate::error::GradLabError;
use crate::nn::module::{check_input_width, Module};
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// An ordered stack of modules applied one after another.
///
/// Parameters are named `"{index}.{name}"` after the position of their layer, e.g.
/// `"0.weight"`.
#[derive(Debug, Default)]
pub struct Sequential {
    layers: Vec<Box<dyn Module>>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential { layers: Vec::new() }
    }

    /// Appends a layer, builder style.
    pub fn add<M: Module + 'static>(mut self, module: M) -> Self {
        self.layers.push(Box::new(module));
        self
    }

    pub fn push(&mut self, module: Box<dyn Module>) {
        self.layers.push(module);
    }

    pub fn layers(&self) -> &[Box<dyn Module>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Module for Sequential {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradLabError> {
        if let Some(width) = self.input_width() {
            check_input_width(input, width, "Sequential::forward")?;
        }
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (index, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("{}.{}", index, name), param));
            }
        }
        params
    }

    fn input_width(&self) -> Option<usize> {
        self.layers.first().and_then(|l| l.input_width())
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
