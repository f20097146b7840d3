//! Core trait for the annealing engine.

use rand::Rng;

/// A problem the annealing loop can search over.
///
/// The implementor supplies the solution representation, the energy
/// function, and a neighbor move; the engine owns temperature decay
/// and the Metropolis acceptance test.
///
/// # Minimization
///
/// The engine minimizes energy. For maximization, negate the energy.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use tsp_anneal::anneal::AnnealProblem;
///
/// struct Quadratic;
///
/// impl AnnealProblem for Quadratic {
///     type Solution = f64;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> f64 {
///         rng.random_range(-10.0..10.0)
///     }
///
///     fn energy(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
pub trait AnnealProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the energy of a solution. Lower is better.
    fn energy(&self, solution: &Self::Solution) -> f64;

    /// Proposes a neighbor of the current solution.
    ///
    /// Moves should be small perturbations. A proposal equal to the
    /// current solution is allowed; it carries zero energy delta and
    /// is accepted as a no-op.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
