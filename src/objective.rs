use auto_impl::auto_impl;

/// Objective is a trait that defines a single-variable problem to be solved
/// by the annealer.
///
/// Implementations decide what "better" means through [`prefers`], so the
/// same engine drives both maximization and minimization problems.
///
/// [`prefers`]: Objective::prefers
#[auto_impl(&, Box, Rc, Arc)]
pub trait Objective {
    /// Score a domain value.
    ///
    /// Must be deterministic and side-effect free. The engine may evaluate
    /// it in any order, including repeatedly for the same `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Whether quality `a` is strictly better than quality `b`.
    ///
    /// Must be a strict total order over the qualities the objective can
    /// produce, and must not change within a run.
    fn prefers(&self, a: f64, b: f64) -> bool;
}

/// Maximization problem defined by a plain scoring function.
#[derive(Clone, Copy, Debug)]
pub struct Maximize<F>(pub F);

impl<F: Fn(f64) -> f64> Objective for Maximize<F> {
    fn evaluate(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn prefers(&self, a: f64, b: f64) -> bool {
        a > b
    }
}

/// Minimization problem defined by a plain scoring function.
#[derive(Clone, Copy, Debug)]
pub struct Minimize<F>(pub F);

impl<F: Fn(f64) -> f64> Objective for Minimize<F> {
    fn evaluate(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn prefers(&self, a: f64, b: f64) -> bool {
        a < b
    }
}
