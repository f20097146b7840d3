//! Tour permutations and their energy.

use super::instance::Instance;

/// A visiting order over an instance's points.
///
/// The tour is closed: after the last point it returns to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// The identity tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Builds a tour from an explicit visiting order.
    ///
    /// The order is trusted to be a permutation of `0..len`; use
    /// [`Tour::is_permutation`] to check.
    pub fn from_order(order: Vec<usize>) -> Self {
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Swaps the visiting positions `i` and `j` in place.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
    }

    /// Returns a copy with visiting positions `i` and `j` swapped.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut tour = self.clone();
        tour.swap(i, j);
        tour
    }

    /// Total Euclidean length of the closed tour, including the edge
    /// from the last point back to the first.
    ///
    /// Zero for tours over fewer than two points.
    pub fn energy(&self, instance: &Instance) -> f64 {
        if self.order.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for leg in self.order.windows(2) {
            total += instance.distance(leg[0], leg[1]);
        }
        total + instance.distance(self.order[self.order.len() - 1], self.order[0])
    }

    /// True if the tour visits every index below its length exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.order.len()];
        for &i in &self.order {
            if i >= seen.len() || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::Point;
    use proptest::prelude::*;

    fn instance_from(raw: &[(f64, f64)]) -> Instance {
        Instance::from_points(raw.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn test_identity_tour() {
        let tour = Tour::identity(4);
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        assert!(tour.is_permutation());
    }

    #[test]
    fn test_unit_square_energy() {
        let instance = instance_from(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let tour = Tour::identity(4);
        assert!((tour.energy(&instance) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_energy_includes_closing_edge() {
        // Two points: out and back along the same edge.
        let instance = instance_from(&[(0.0, 0.0), (3.0, 4.0)]);
        let tour = Tour::identity(2);
        assert!((tour.energy(&instance) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_energy_degenerate_tours() {
        assert_eq!(Tour::identity(0).energy(&instance_from(&[])), 0.0);
        assert_eq!(Tour::identity(1).energy(&instance_from(&[(0.5, 0.5)])), 0.0);
    }

    #[test]
    fn test_swapped_leaves_original_untouched() {
        let tour = Tour::identity(5);
        let swapped = tour.swapped(1, 3);
        assert_eq!(tour.order(), &[0, 1, 2, 3, 4]);
        assert_eq!(swapped.order(), &[0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_is_permutation_rejects_duplicates() {
        assert!(!Tour::from_order(vec![0, 1, 1]).is_permutation());
        assert!(!Tour::from_order(vec![0, 3]).is_permutation());
    }

    proptest! {
        #[test]
        fn prop_swapped_stays_permutation(n in 2usize..40, i in 0usize..40, j in 0usize..40) {
            let tour = Tour::identity(n).swapped(i % n, j % n);
            prop_assert!(tour.is_permutation());
        }

        #[test]
        fn prop_energy_rotation_invariant(
            raw in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 2..16),
        ) {
            let instance = instance_from(&raw);
            let n = instance.len();
            let mut rotated: Vec<usize> = (0..n).collect();
            rotated.rotate_left(1);

            let base = Tour::identity(n).energy(&instance);
            let turned = Tour::from_order(rotated).energy(&instance);
            prop_assert!((base - turned).abs() < 1e-9);
        }

        #[test]
        fn prop_energy_reversal_invariant(
            raw in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 2..16),
        ) {
            let instance = instance_from(&raw);
            let n = instance.len();
            let mut reversed: Vec<usize> = (0..n).collect();
            reversed.reverse();

            let base = Tour::identity(n).energy(&instance);
            let back = Tour::from_order(reversed).energy(&instance);
            prop_assert!((base - back).abs() < 1e-9);
        }
    }
}
