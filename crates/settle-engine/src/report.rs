//! Outcome of a convergence run.

/// What a [`run`](fn@crate::run) did and how it ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    /// Absolute change in the grid total over the last sweep.
    pub final_diff: f64,
    /// Number of real sweeps performed (the baseline pass not counted).
    pub sweeps: u32,
    /// Whether `final_diff` is within the configured tolerance, as
    /// opposed to the run stopping at the sweep cap.
    pub converged: bool,
}
