//! Activation functions used by the two-layer network.
use crate::data::Matrix;

/// Sigmoid: 1 / (1 + exp(-x))
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Elementwise sigmoid over a batch.
pub fn sigmoid_matrix(x: &Matrix) -> Matrix {
    x.iter()
        .map(|row| row.iter().map(|&v| sigmoid(v)).collect())
        .collect()
}

/// Row-wise softmax over a batch of logits.
///
/// Each row is shifted by its maximum before exponentiation so that large
/// logits cannot overflow. Every output row sums to 1.
pub fn softmax_rows(logits: &Matrix) -> Matrix {
    logits
        .iter()
        .map(|row| {
            let max = row.iter().fold(f64::MIN, |a, &b| a.max(b));
            let exps: Vec<f64> = row.iter().map(|&v| (v - max).exp()).collect();
            let sum: f64 = exps.iter().sum();
            exps.into_iter().map(|e| e / sum).collect()
        })
        .collect()
}
