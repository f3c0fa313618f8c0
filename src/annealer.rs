use ordered_float::NotNan;
use rand::Rng;

use crate::{
    bounds::Bounds,
    callback::{Progress, ProgressFn},
    error::AnnealError,
    history::History,
    objective::Objective,
};

/// Outcome of one annealing run.
///
/// The walk itself may end anywhere; `best_x` is the best point ever
/// visited under the objective's preference order, initial point included.
#[derive(Debug, Clone)]
pub struct Run {
    /// Best domain value visited.
    pub best_x: f64,
    /// Quality of `best_x`.
    pub best_quality: NotNan<f64>,
    /// Point the walk occupied when the budget ran out.
    pub final_x: f64,
    /// Temperature after the last cooling step.
    pub final_temperature: f64,
    /// Number of accepted moves across the whole run.
    pub accepted: usize,
    /// Accepted domain values, in visit order.
    pub history: History,
}

/// Optimizer that implements simulated annealing over a closed interval
/// with a geometric cooling schedule.
///
/// Candidates are proposed by perturbing the current point with a uniform
/// offset and clamping into bounds. Improving moves are always accepted;
/// worsening moves are accepted with the Metropolis probability
/// `exp(-|dq| / T)`, which decays as the temperature cools.
#[derive(Clone, Copy, Debug)]
pub struct Annealer {
    /// Temperature the first level runs at
    initial_temperature: f64,
    /// Number of temperature levels before the run stops
    n_levels: usize,
    /// Half-width of the proposal window, as a fraction of the bound span
    step_fraction: f64,
}

impl Default for Annealer {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            n_levels: 100,
            step_fraction: 0.1,
        }
    }
}

impl Annealer {
    /// Constructor of Annealer
    ///
    /// - `initial_temperature` : temperature the first level runs at. Must
    ///   be positive and finite.
    /// - `n_levels` : number of temperature levels. The run always exhausts
    ///   this budget; there is no convergence detection.
    pub fn new(initial_temperature: f64, n_levels: usize) -> Result<Self, AnnealError> {
        if !initial_temperature.is_finite() || initial_temperature <= 0.0 {
            return Err(AnnealError::InvalidTemperature(initial_temperature));
        }
        if n_levels == 0 {
            return Err(AnnealError::InvalidLevels);
        }
        Ok(Self {
            initial_temperature,
            n_levels,
            ..Self::default()
        })
    }

    /// Set the half-width of the proposal window as a fraction of the bound
    /// span. Must be positive and finite.
    pub fn with_step_fraction(self, step_fraction: f64) -> Result<Self, AnnealError> {
        if !step_fraction.is_finite() || step_fraction <= 0.0 {
            return Err(AnnealError::InvalidStepFraction(step_fraction));
        }
        Ok(Self {
            step_fraction,
            ..self
        })
    }

    /// Start a run
    ///
    /// - `objective` : the problem to solve
    /// - `n_iter` : number of candidate moves attempted at each temperature
    ///   level. Must be positive.
    /// - `cooling_rate` : multiplicative temperature decay applied after
    ///   each level. Must be in (0, 1).
    /// - `initial_x` : starting point, clamped into `bounds`
    /// - `bounds` : closed search interval
    /// - `rng` : random source; seed it for reproducible runs
    pub fn solve<O, R>(
        &self,
        objective: &O,
        n_iter: usize,
        cooling_rate: f64,
        initial_x: f64,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Run, AnnealError>
    where
        O: Objective,
        R: Rng + ?Sized,
    {
        self.solve_with(
            objective,
            n_iter,
            cooling_rate,
            initial_x,
            bounds,
            rng,
            &mut |_: Progress| {},
        )
    }

    /// Start a run, invoking `callback` after each completed temperature
    /// level
    pub fn solve_with<O, R>(
        &self,
        objective: &O,
        n_iter: usize,
        cooling_rate: f64,
        initial_x: f64,
        bounds: Bounds,
        rng: &mut R,
        callback: &mut dyn ProgressFn,
    ) -> Result<Run, AnnealError>
    where
        O: Objective,
        R: Rng + ?Sized,
    {
        if n_iter == 0 {
            return Err(AnnealError::InvalidIterations);
        }
        if !(cooling_rate > 0.0 && cooling_rate < 1.0) {
            return Err(AnnealError::InvalidCoolingRate(cooling_rate));
        }

        let step = self.step_fraction * bounds.span();
        let mut history = History::new();
        let mut x = bounds.clamp(initial_x);
        let mut fx = quality(objective, x)?;
        let mut best_x = x;
        let mut best_fx = fx;
        let mut temperature = self.initial_temperature;
        let mut accepted = 0;

        for level in 0..self.n_levels {
            for _ in 0..n_iter {
                let candidate = bounds.clamp(x + rng.random_range(-step..=step));
                let f_candidate = quality(objective, candidate)?;

                let accept = if objective.prefers(f_candidate.into_inner(), fx.into_inner()) {
                    true
                } else {
                    // equal qualities give exp(0) = 1, so ties are always
                    // accepted
                    let dq = (f_candidate.into_inner() - fx.into_inner()).abs();
                    let p = (-dq / temperature).exp();
                    let r: f64 = rng.random();
                    r < p
                };

                if accept {
                    x = candidate;
                    fx = f_candidate;
                    history.push(x);
                    accepted += 1;

                    if objective.prefers(fx.into_inner(), best_fx.into_inner()) {
                        best_x = x;
                        best_fx = fx;
                    }
                }
            }

            let progress = Progress {
                level,
                temperature,
                accepted_count: accepted,
                best_x,
                best_quality: best_fx,
            };
            callback(progress);

            temperature *= cooling_rate;
        }

        Ok(Run {
            best_x,
            best_quality: best_fx,
            final_x: x,
            final_temperature: temperature,
            accepted,
            history,
        })
    }
}

fn quality<O: Objective>(objective: &O, x: f64) -> Result<NotNan<f64>, AnnealError> {
    NotNan::new(objective.evaluate(x)).map_err(|_| AnnealError::NanQuality { x })
}
