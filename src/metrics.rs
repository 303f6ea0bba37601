//! Classification accuracy.
use crate::data::Matrix;
use anyhow::{anyhow, Result};

/// Index of the largest entry; the FIRST maximal index wins on ties, so
/// scores stay reproducible.
pub fn argmax(row: &[f64]) -> usize {
    row.iter()
        .enumerate()
        .fold(0usize, |max_i, (i, &v)| if v > row[max_i] { i } else { max_i })
}

/// Percentage (0–100) of rows where predicted and labeled argmax agree.
pub fn accuracy(pred: &Matrix, labels: &Matrix) -> Result<f64> {
    if pred.len() != labels.len() {
        return Err(anyhow!(
            "row count mismatch: {} vs {}",
            pred.len(),
            labels.len()
        ));
    }
    if pred.is_empty() {
        return Err(anyhow!("empty batch"));
    }
    let correct = pred
        .iter()
        .zip(labels)
        .filter(|(p, l)| argmax(p) == argmax(l))
        .count();
    Ok(correct as f64 / pred.len() as f64 * 100.0)
}
