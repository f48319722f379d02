use approx::abs_diff_eq;
use ndarray::Array2;

/// True if some cell of `current` differs from `previous` by more than `eps`.
pub fn has_changed(current: &Array2<f32>, previous: &Array2<f32>, eps: f32) -> bool {
    debug_assert_eq!(current.dim(), previous.dim());
    current
        .iter()
        .zip(previous.iter())
        .any(|(&a, &b)| !abs_diff_eq!(a, b, epsilon = eps))
}

/// Decides, before every update step, whether the iteration goes on.
#[derive(Debug, Clone)]
pub struct ConvergenceTracker {
    max_iterations: usize,
    eps: f32,
    iterations: usize,
    converged: bool,
}

impl ConvergenceTracker {
    pub fn new(max_iterations: usize, eps: f32) -> ConvergenceTracker {
        ConvergenceTracker {
            max_iterations,
            eps,
            iterations: 0,
            converged: false,
        }
    }

    /// Checks both matrix pairs jointly. Returns false once both are within
    /// `eps` of their previous snapshot, or once the budget is used up.
    pub fn should_continue(
        &mut self,
        nodes: (&Array2<f32>, &Array2<f32>),
        edges: (&Array2<f32>, &Array2<f32>),
    ) -> bool {
        self.converged = !has_changed(nodes.0, nodes.1, self.eps)
            && !has_changed(edges.0, edges.1, self.eps);
        !self.converged && self.iterations < self.max_iterations
    }

    /// Records a completed update step.
    pub fn advance(&mut self) {
        self.iterations += 1;
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn eps(&self) -> f32 {
        self.eps
    }
}
