//! Cross-entropy loss over a batch of predictions.
use crate::data::Matrix;
use anyhow::{anyhow, Result};

/// Cross-entropy for a single row (assumes `pred` is a valid probability
/// distribution).
pub fn cross_entropy_row(pred: &[f64], target: &[f64]) -> Result<f64> {
    if pred.len() != target.len() {
        return Err(anyhow!("size mismatch: {} vs {}", pred.len(), target.len()));
    }
    let eps = 1e-12;
    let mut loss = 0.0;
    for (&p, &t) in pred.iter().zip(target) {
        let pp = p.clamp(eps, 1.0 - eps);
        loss -= t * pp.ln();
    }
    Ok(loss)
}

/// Mean cross-entropy over all rows of a batch.
pub fn cross_entropy(pred: &Matrix, target: &Matrix) -> Result<f64> {
    if pred.len() != target.len() {
        return Err(anyhow!(
            "row count mismatch: {} vs {}",
            pred.len(),
            target.len()
        ));
    }
    if pred.is_empty() {
        return Err(anyhow!("empty batch"));
    }
    let mut total = 0.0;
    for (p, t) in pred.iter().zip(target) {
        total += cross_entropy_row(p, t)?;
    }
    Ok(total / pred.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_non_negative() {
        let pred = vec![vec![0.2, 0.5, 0.3], vec![0.9, 0.05, 0.05]];
        let target = vec![vec![0.0, 1.0, 0.0], vec![1.0, 0.0, 0.0]];
        assert!(cross_entropy(&pred, &target).unwrap() >= 0.0);
    }

    #[test]
    fn perfect_prediction_gives_near_zero_loss() {
        let target = vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]];
        let loss = cross_entropy(&target, &target).unwrap();
        // Exactly zero up to the epsilon clamp on log(1).
        assert!(loss.abs() < 1e-9, "loss was {}", loss);
    }

    #[test]
    fn confident_wrong_prediction_is_heavily_penalized() {
        let pred = vec![vec![0.999, 0.0005, 0.0005]];
        let right = vec![vec![1.0, 0.0, 0.0]];
        let wrong = vec![vec![0.0, 1.0, 0.0]];
        let good = cross_entropy(&pred, &right).unwrap();
        let bad = cross_entropy(&pred, &wrong).unwrap();
        assert!(bad > good + 1.0);
    }

    #[test]
    fn loss_is_deterministic() {
        let pred = vec![vec![0.3, 0.3, 0.4]];
        let target = vec![vec![0.0, 0.0, 1.0]];
        let a = cross_entropy(&pred, &target).unwrap();
        let b = cross_entropy(&pred, &target).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mismatched_shapes_are_an_error() {
        let pred = vec![vec![0.5, 0.5]];
        let target = vec![vec![1.0, 0.0, 0.0]];
        assert!(cross_entropy(&pred, &target).is_err());
        assert!(cross_entropy(&pred, &Vec::new()).is_err());
    }
}
