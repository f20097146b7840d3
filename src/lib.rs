//! Simulated annealing on the travelling salesman problem, with an
//! animated tour and energy plot.
//!
//! The demo generates random 2D points, anneals a visiting order by
//! proposing random pairwise swaps under a linearly decaying
//! temperature, and renders the evolving tour next to a running
//! energy (tour length) curve.
//!
//! - [`anneal`]: the generic Metropolis annealing loop — problem
//!   trait, temperature schedules, and a per-step observer hook.
//! - [`tsp`]: the problem domain — points, tours, closed-loop energy,
//!   and the swap-move adapter.
//! - [`plot`]: plotters-based frame drawing, GIF animation, and PNG
//!   snapshots.

pub mod anneal;
pub mod plot;
pub mod tsp;
