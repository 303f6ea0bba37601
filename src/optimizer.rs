//! Plain gradient descent over the four network parameters.
use crate::network::TwoLayerNet;

/// Stochastic gradient descent with a fixed learning rate.
///
/// Two operations, mirroring the usual optimizer contract: clear the
/// accumulated gradients, and apply one in-place update.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    /// Zero the gradients accumulated on the network.
    ///
    /// Must run before every backward pass; gradients otherwise keep
    /// accumulating across iterations.
    pub fn zero_grad(&self, net: &mut TwoLayerNet) {
        net.grads.zero();
    }

    /// One descent step: `p -= lr * g` for every parameter.
    pub fn step(&self, net: &mut TwoLayerNet) {
        let lr = self.learning_rate;
        for (row, g_row) in net.w1.iter_mut().zip(&net.grads.d_w1) {
            for (w, &g) in row.iter_mut().zip(g_row) {
                *w -= lr * g;
            }
        }
        for (row, g_row) in net.w2.iter_mut().zip(&net.grads.d_w2) {
            for (w, &g) in row.iter_mut().zip(g_row) {
                *w -= lr * g;
            }
        }
        net.b1 -= lr * net.grads.d_b1;
        net.b2 -= lr * net.grads.d_b2;
    }
}
