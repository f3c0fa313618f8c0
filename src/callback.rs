//! Callback of the annealing loop

use ordered_float::NotNan;

/// Progress expresses the state of a run that is passed to a [`ProgressFn`]
/// after each completed temperature level
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// completed temperature level, counted from 0
    pub level: usize,
    /// temperature the level ran at
    pub temperature: f64,
    /// accepted moves so far across the whole run
    pub accepted_count: usize,
    /// best domain value found so far
    pub best_x: f64,
    /// quality of `best_x`
    pub best_quality: NotNan<f64>,
}

/// ProgressFn is a trait of a callback function for the annealing loop.
/// Typical usage is to show a progress bar or record the cooling trace.
///
/// Example
///
/// ```rust
/// let pb = ProgressBar::new(n_levels as u64);
/// pb.set_style(
///     ProgressStyle::default_bar()
///         .template(
///             "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg} ",
///         ).unwrap()
///         .progress_chars("#>-")
/// );
/// let mut callback = |p: Progress| {
///     pb.set_message(format!(
///         "best {:.4} (quality {:.4e}), T = {:.2e}",
///         p.best_x,
///         p.best_quality.into_inner(),
///         p.temperature
///     ));
///     pb.set_position(p.level as u64 + 1);
/// };
/// ```
pub trait ProgressFn: FnMut(Progress) {}

impl<T: FnMut(Progress)> ProgressFn for T {}
