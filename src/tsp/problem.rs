//! Swap-move annealing adapter.

use rand::Rng;

use crate::anneal::AnnealProblem;

use super::instance::Instance;
use super::tour::Tour;

/// The travelling-salesman problem under random pairwise swaps of the
/// visiting order.
///
/// The starting tour is the identity permutation; the neighbor move
/// swaps two uniformly chosen positions. The two positions may
/// coincide, in which case the proposal is a zero-delta no-op.
#[derive(Debug, Clone, Copy)]
pub struct SwapTsp<'a> {
    instance: &'a Instance,
}

impl<'a> SwapTsp<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &Instance {
        self.instance
    }
}

impl AnnealProblem for SwapTsp<'_> {
    type Solution = Tour;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Tour {
        Tour::identity(self.instance.len())
    }

    fn energy(&self, tour: &Tour) -> f64 {
        tour.energy(self.instance)
    }

    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let n = tour.len();
        if n < 2 {
            return tour.clone();
        }
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        tour.swapped(i, j)
    }
}
