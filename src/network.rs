//! The two-layer network: 3 inputs, a sigmoid hidden layer, softmax output.
use crate::activations::{sigmoid_matrix, softmax_rows};
use crate::data::Matrix;
use rand::thread_rng;
use rand_distr::{Distribution, Normal};
use std::fmt;

/// Accumulated gradients for the four trainable parameters.
///
/// `backward` adds into these; they keep growing until the optimizer zeroes
/// them. Both biases are scalars broadcast over their whole layer, so their
/// gradients are scalars too.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub d_w1: Matrix,
    pub d_b1: f64,
    pub d_w2: Matrix,
    pub d_b2: f64,
}

impl Gradients {
    fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        Self {
            d_w1: vec![vec![0.0; hidden_size]; input_size],
            d_b1: 0.0,
            d_w2: vec![vec![0.0; output_size]; hidden_size],
            d_b2: 0.0,
        }
    }

    /// Reset every accumulated gradient to zero.
    pub fn zero(&mut self) {
        for row in &mut self.d_w1 {
            row.fill(0.0);
        }
        for row in &mut self.d_w2 {
            row.fill(0.0);
        }
        self.d_b1 = 0.0;
        self.d_b2 = 0.0;
    }
}

/// Feed-forward classifier with one sigmoid hidden layer and a softmax
/// output layer.
///
/// Weights are stored input-major: `w1[i][j]` connects input i to hidden
/// unit j, so the forward pass is `batch · w1`.
#[derive(Debug, Clone)]
pub struct TwoLayerNet {
    pub w1: Matrix,
    pub b1: f64,
    pub w2: Matrix,
    pub b2: f64,
    pub grads: Gradients,
}

impl TwoLayerNet {
    /// Create a network with every parameter drawn from Normal(0, 1).
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        let mut rng = thread_rng();
        let normal = Normal::new(0.0, 1.0).expect("valid normal parameters");
        let mut draw_matrix = |rows: usize, cols: usize| -> Matrix {
            (0..rows)
                .map(|_| (0..cols).map(|_| normal.sample(&mut rng)).collect())
                .collect()
        };
        let w1 = draw_matrix(input_size, hidden_size);
        let w2 = draw_matrix(hidden_size, output_size);
        let b1 = normal.sample(&mut rng);
        let b2 = normal.sample(&mut rng);
        Self {
            w1,
            b1,
            w2,
            b2,
            grads: Gradients::new(input_size, hidden_size, output_size),
        }
    }

    pub fn input_size(&self) -> usize {
        self.w1.len()
    }

    pub fn hidden_size(&self) -> usize {
        self.w1.first().map_or(0, |r| r.len())
    }

    pub fn output_size(&self) -> usize {
        self.w2.first().map_or(0, |r| r.len())
    }

    /// Forward pass over a whole batch. Pure: no state is touched.
    ///
    /// Returns an N×output row-stochastic probability matrix.
    pub fn forward(&self, batch: &Matrix) -> Matrix {
        let (_, probs) = self.forward_cached(batch);
        probs
    }

    /// Forward pass that also returns the hidden activations, which the
    /// backward pass needs.
    pub fn forward_cached(&self, batch: &Matrix) -> (Matrix, Matrix) {
        let z1 = self.affine(batch, &self.w1, self.b1);
        let hidden = sigmoid_matrix(&z1);
        let z2 = self.affine(&hidden, &self.w2, self.b2);
        let probs = softmax_rows(&z2);
        (hidden, probs)
    }

    /// `batch · w + b` with a scalar bias broadcast over every entry.
    fn affine(&self, batch: &Matrix, w: &Matrix, b: f64) -> Matrix {
        let cols = w.first().map_or(0, |r| r.len());
        batch
            .iter()
            .map(|row| {
                let mut out = vec![b; cols];
                for (i, &x) in row.iter().enumerate() {
                    for (j, &wij) in w[i].iter().enumerate() {
                        out[j] += x * wij;
                    }
                }
                out
            })
            .collect()
    }

    /// Backpropagate the mean cross-entropy loss and ACCUMULATE gradients.
    ///
    /// `hidden` and `probs` must come from `forward_cached` on the same
    /// `batch`. Softmax composed with cross-entropy gives the output delta
    /// `(probs - labels) / N` directly; the hidden delta applies the sigmoid
    /// derivative `h * (1 - h)`.
    pub fn backward(&mut self, batch: &Matrix, hidden: &Matrix, probs: &Matrix, labels: &Matrix) {
        let n = batch.len() as f64;
        let hidden_size = self.hidden_size();
        for ((x, h), (p, t)) in batch
            .iter()
            .zip(hidden)
            .zip(probs.iter().zip(labels))
        {
            let dz2: Vec<f64> = p.iter().zip(t).map(|(&pi, &ti)| (pi - ti) / n).collect();
            for (j, &hj) in h.iter().enumerate() {
                for (k, &d) in dz2.iter().enumerate() {
                    self.grads.d_w2[j][k] += hj * d;
                }
            }
            self.grads.d_b2 += dz2.iter().sum::<f64>();

            // dh = dz2 · w2ᵀ, then through the sigmoid
            let mut dz1 = vec![0.0; hidden_size];
            for (j, w2_row) in self.w2.iter().enumerate() {
                let dh: f64 = w2_row.iter().zip(&dz2).map(|(&w, &d)| w * d).sum();
                dz1[j] = dh * h[j] * (1.0 - h[j]);
            }
            for (i, &xi) in x.iter().enumerate() {
                for (j, &d) in dz1.iter().enumerate() {
                    self.grads.d_w1[i][j] += xi * d;
                }
            }
            self.grads.d_b1 += dz1.iter().sum::<f64>();
        }
    }
}

impl fmt::Display for TwoLayerNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TwoLayerNet: [{}, {}, {}]",
            self.input_size(),
            self.hidden_size(),
            self.output_size()
        )
    }
}
