//! Run configuration for the convergence controller.

use settle_space::BoundaryMode;

/// Which values same-sweep neighbor reads observe.
///
/// The two orders are **not** numerically equivalent and are never
/// substituted for each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpdateOrder {
    /// Commit each update immediately; later cells in the sweep read
    /// already-updated earlier neighbors (Gauss–Seidel). Traversal is
    /// row-major, row ascending then column ascending. This is the
    /// default.
    #[default]
    InPlace,
    /// Snapshot the grid at sweep start and read neighbors only from
    /// the snapshot (Jacobi double-buffer).
    Buffered,
}

/// Parameters governing one [`run`](fn@crate::run).
///
/// # Caller contract
///
/// `tolerance` must be non-negative and `max_sweeps` sensible; the
/// solver core does not validate them (malformed values produce
/// undefined numerical behavior, per the boundary-layer contract).
/// With `max_sweeps == 0` only the tolerance terminates the run: a
/// stencil that never stabilizes the total then never returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunConfig {
    /// Minimum meaningful change in the grid total; a sweep whose
    /// absolute change is within this value converges the run.
    pub tolerance: f64,
    /// Maximum number of real sweeps, `0` = unbounded.
    pub max_sweeps: u32,
    /// Edge behavior for neighbor lookups.
    pub boundary: BoundaryMode,
    /// Same-sweep read semantics.
    pub order: UpdateOrder,
}

impl RunConfig {
    /// Create a config with the default in-place (Gauss–Seidel) order.
    pub fn new(tolerance: f64, max_sweeps: u32, boundary: BoundaryMode) -> Self {
        Self {
            tolerance,
            max_sweeps,
            boundary,
            order: UpdateOrder::InPlace,
        }
    }

    /// Switch to the buffered (Jacobi) update order.
    pub fn with_order(mut self, order: UpdateOrder) -> Self {
        self.order = order;
        self
    }
}
