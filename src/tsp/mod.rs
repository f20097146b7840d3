//! Travelling-salesman domain: points, tours, and the swap-move
//! annealing adapter.

mod instance;
mod problem;
mod tour;

pub use instance::{Instance, Point};
pub use problem::SwapTsp;
pub use tour::Tour;
