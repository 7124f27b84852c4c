//! Edge behavior for neighbor lookups at the grid boundary.

/// How a grid handles neighbor lookups that step off an edge.
///
/// # Examples
///
/// ```
/// use settle_space::{resolve_axis, BoundaryMode};
///
/// // Cyclic: indices wrap modulo the axis length (torus topology).
/// assert_eq!(resolve_axis(-1, 5, BoundaryMode::Cyclic), Some(4));
/// assert_eq!(resolve_axis(5, 5, BoundaryMode::Cyclic), Some(0));
///
/// // Bounded: off-grid indices have no cell.
/// assert_eq!(resolve_axis(-1, 5, BoundaryMode::Bounded), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Off-grid neighbors do not exist; their value reads as zero
    /// (a fixed, cold boundary).
    Bounded,
    /// Off-grid neighbors wrap to the opposite edge (periodic boundary).
    Cyclic,
}

/// Resolve a single axis index under the given boundary mode.
///
/// Returns `Some(index)` for a reachable cell, or `None` when the index
/// falls off a `Bounded` edge. In `Cyclic` mode the result is always
/// defined, regardless of position.
pub fn resolve_axis(val: i32, len: u32, mode: BoundaryMode) -> Option<u32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val as u32);
    }
    match mode {
        BoundaryMode::Bounded => None,
        BoundaryMode::Cyclic => Some((((val % n) + n) % n) as u32),
    }
}
