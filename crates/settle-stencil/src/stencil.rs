//! The [`Stencil`] trait: a caller-supplied local update rule.

use crate::neighborhood::Neighborhood;

/// A pure local update rule for one grid cell.
///
/// Given the cell's current value and its four neighbors, produce the
/// cell's new value. Distinct stencils define distinct physical models;
/// the solver is agnostic to which one is used.
///
/// # Contract
///
/// - `apply()` MUST be pure: no side effects, same inputs produce the
///   same output.
/// - `&self` — stencils are stateless; run parameters belong in the
///   stencil's own fields, fixed at construction.
///
/// # Object safety
///
/// This trait is object-safe; a driver may hold `Box<dyn Stencil>`.
///
/// Any `Fn(f64, &Neighborhood) -> f64` closure is a stencil:
///
/// ```
/// use settle_stencil::{Neighborhood, Stencil};
///
/// let damped = |center: f64, nbs: &Neighborhood| 0.5 * center + 0.5 * nbs.mean();
/// let nbs = Neighborhood { right: 4.0, up: 4.0, left: 4.0, down: 4.0 };
/// assert_eq!(damped.apply(2.0, &nbs), 3.0);
/// ```
pub trait Stencil {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Compute the new value of a cell from its current value and its
    /// four axis-aligned neighbors.
    fn apply(&self, center: f64, neighbors: &Neighborhood) -> f64;
}

impl<F> Stencil for F
where
    F: Fn(f64, &Neighborhood) -> f64,
{
    fn name(&self) -> &str {
        "closure"
    }

    fn apply(&self, center: f64, neighbors: &Neighborhood) -> f64 {
        self(center, neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_stencils() {
        let sum_all = |center: f64, nbs: &Neighborhood| center + nbs.values().iter().sum::<f64>();
        let nbs = Neighborhood {
            right: 1.0,
            up: 2.0,
            left: 3.0,
            down: 4.0,
        };
        assert_eq!(sum_all.apply(10.0, &nbs), 20.0);
        assert_eq!(sum_all.name(), "closure");
    }

    #[test]
    fn trait_is_object_safe() {
        let boxed: Box<dyn Stencil> = Box::new(|center: f64, _: &Neighborhood| center * 2.0);
        assert_eq!(boxed.apply(3.0, &Neighborhood::default()), 6.0);
    }
}
