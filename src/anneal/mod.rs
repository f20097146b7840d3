//! Simulated annealing.
//!
//! A single-solution trajectory search inspired by the physical
//! annealing process: worsening moves are accepted with probability
//! `exp(-dE/T)`, and the temperature `T` decays over a fixed number
//! of steps, freezing the search into a (hopefully good) minimum.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::{AnnealConfig, TemperatureSchedule};
pub use runner::{AnnealResult, AnnealRunner, StepEvent};
pub use types::AnnealProblem;
