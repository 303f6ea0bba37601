//! Fixed-length full-batch training loop.
use crate::data::DatasetSplit;
use crate::loss::cross_entropy;
use crate::metrics::accuracy;
use crate::network::TwoLayerNet;
use crate::optimizer::Sgd;
use anyhow::Result;
use log::debug;

/// Network and training hyperparameters. All fixed; there is no
/// configuration surface.
pub const INPUT_SIZE: usize = 3;
pub const HIDDEN_SIZE: usize = 16;
pub const OUTPUT_SIZE: usize = 3;
pub const LEARNING_RATE: f64 = 0.001;
pub const ITERATIONS: usize = 15000;

/// Per-iteration loss history, kept for plotting. The three vectors grow in
/// lockstep, one entry per iteration.
#[derive(Debug, Default)]
pub struct MetricsHistory {
    pub iterations: Vec<usize>,
    pub train_loss: Vec<f64>,
    pub validation_loss: Vec<f64>,
}

/// No-gradient evaluation of a split: (mean cross-entropy, accuracy %).
pub fn evaluate(net: &TwoLayerNet, split: &DatasetSplit) -> Result<(f64, f64)> {
    let probs = net.forward(&split.features);
    let loss = cross_entropy(&probs, &split.labels)?;
    let acc = accuracy(&probs, &split.labels)?;
    Ok((loss, acc))
}

/// Run the full-batch training loop for a fixed number of iterations.
///
/// Each iteration, in order: zero gradients, forward over the whole training
/// split, mean cross-entropy, backward, one descent step, then a no-gradient
/// evaluation on the validation split. One metrics line is printed per
/// iteration. No early stopping and no convergence check; numeric failures
/// propagate as NaN losses rather than being caught here.
pub fn train(
    net: &mut TwoLayerNet,
    sgd: &Sgd,
    train_split: &DatasetSplit,
    validation_split: &DatasetSplit,
    iterations: usize,
) -> Result<MetricsHistory> {
    debug!(
        "training {} for {} iterations on {} instances",
        net,
        iterations,
        train_split.len()
    );
    let mut history = MetricsHistory::default();
    for iteration in 1..=iterations {
        history.iterations.push(iteration);

        sgd.zero_grad(net);
        let (hidden, train_probs) = net.forward_cached(&train_split.features);
        let train_loss = cross_entropy(&train_probs, &train_split.labels)?;
        history.train_loss.push(train_loss);

        net.backward(
            &train_split.features,
            &hidden,
            &train_probs,
            &train_split.labels,
        );
        sgd.step(net);

        let train_accuracy = accuracy(&train_probs, &train_split.labels)?;
        let (validation_loss, validation_accuracy) = evaluate(net, validation_split)?;
        history.validation_loss.push(validation_loss);

        // The printed label runs one ahead of the loop counter; kept as-is
        // so reported iteration numbers stay comparable with prior runs.
        println!(
            "Iteration : {} - Train Loss {:.4} - Train Accuracy : {:.2} - Validation Loss : {:.4} Validation Accuracy : {:.2}",
            iteration + 1,
            train_loss,
            train_accuracy,
            validation_loss,
            validation_accuracy
        );
    }
    Ok(history)
}
