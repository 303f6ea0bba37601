//! A small neural network crate for one job: train a 3-16-3 feed-forward
//! classifier (sigmoid hidden layer, softmax output) by full-batch gradient
//! descent on pre-split data.
//!
//! - Two-layer network with hand-derived backpropagation
//! - Mean cross-entropy loss and accuracy metric
//! - Gzipped-JSON dataset splits, joint shuffling, synthetic generation
//! - Fixed-length training loop with per-iteration console metrics
//! - Loss-curve PNG rendering

pub mod activations;
pub mod data;
pub mod loss;
pub mod metrics;
pub mod network;
pub mod optimizer;
pub mod plot;
pub mod train;

pub use activations::{sigmoid, sigmoid_matrix, softmax_rows};
pub use data::{
    generate_classification_splits, load_split, one_hot, save_split, shuffle_split, DatasetSplit,
    Matrix,
};
pub use loss::cross_entropy;
pub use metrics::{accuracy, argmax};
pub use network::{Gradients, TwoLayerNet};
pub use optimizer::Sgd;
pub use plot::plot_loss_curves;
pub use train::{
    evaluate, train, MetricsHistory, HIDDEN_SIZE, INPUT_SIZE, ITERATIONS, LEARNING_RATE,
    OUTPUT_SIZE,
};
