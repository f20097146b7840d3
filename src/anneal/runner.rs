//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use super::types::AnnealProblem;

/// Per-step observation handed to the observer callback, together
/// with a borrow of the current solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    /// Zero-based step index.
    pub step: usize,

    /// Temperature used for the acceptance test at this step.
    pub temperature: f64,

    /// Whether the proposal was accepted.
    pub accepted: bool,

    /// Energy of the current solution after the acceptance decision.
    pub energy: f64,

    /// Best energy seen so far.
    pub best_energy: f64,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Energy of the best solution.
    pub best_energy: f64,

    /// Energy of the starting solution.
    pub initial_energy: f64,

    /// Number of proposals evaluated.
    pub steps: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Current energy after every step; entry 0 is the initial energy,
    /// so the vector holds `steps + 1` values.
    pub energy_history: Vec<f64>,
}

/// Executes the annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the configured number of annealing steps.
    pub fn run<P: AnnealProblem>(problem: &P, config: &AnnealConfig) -> AnnealResult<P::Solution> {
        Self::run_with_observer(problem, config, |_, _| {})
    }

    /// Runs the loop, invoking `observer` after every step with the
    /// current solution and the step's outcome.
    ///
    /// The observer sees the post-decision state; an animation draws
    /// one frame per call (or per stride of calls).
    pub fn run_with_observer<P, F>(
        problem: &P,
        config: &AnnealConfig,
        mut observer: F,
    ) -> AnnealResult<P::Solution>
    where
        P: AnnealProblem,
        F: FnMut(&P::Solution, StepEvent),
    {
        config.validate().expect("invalid AnnealConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Initialize
        let mut current = problem.initial_solution(&mut rng);
        let mut current_energy = problem.energy(&current);
        let mut best = current.clone();
        let mut best_energy = current_energy;
        let initial_energy = current_energy;

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut energy_history = Vec::with_capacity(config.steps + 1);
        energy_history.push(current_energy);

        for step in 0..config.steps {
            let temperature =
                config
                    .schedule
                    .temperature(config.initial_temperature, step, config.steps);

            let candidate = problem.neighbor(&current, &mut rng);
            let candidate_energy = problem.energy(&candidate);
            let delta = candidate_energy - current_energy;

            // Metropolis acceptance criterion
            let accepted = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                rng.random_range(0.0..1.0) <= (-delta / temperature).exp()
            } else {
                false
            };

            if accepted {
                current = candidate;
                current_energy = candidate_energy;
                accepted_moves += 1;

                if current_energy < best_energy {
                    best = current.clone();
                    best_energy = current_energy;
                }
            }

            energy_history.push(current_energy);
            observer(
                &current,
                StepEvent {
                    step,
                    temperature,
                    accepted,
                    energy: current_energy,
                    best_energy,
                },
            );
        }

        AnnealResult {
            best,
            best_energy,
            initial_energy,
            steps: config.steps,
            accepted_moves,
            improving_moves,
            energy_history,
        }
    }
}
