//! Reference stencils: the identity rule and the four-point blend.

use crate::neighborhood::Neighborhood;
use crate::stencil::Stencil;
use std::error::Error;
use std::fmt;

/// Errors from stencil construction.
#[derive(Clone, Debug, PartialEq)]
pub enum StencilError {
    /// Blend weight is NaN, infinite, or outside `[0, 1]`.
    InvalidWeight {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for StencilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight { value } => {
                write!(f, "blend weight must be finite and in [0, 1], got {value}")
            }
        }
    }
}

impl Error for StencilError {}

/// The identity stencil: returns the cell unchanged.
///
/// Used by the convergence controller for its baseline pass; any number
/// of identity sweeps leaves every cell, source or not, untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Stencil for Identity {
    fn name(&self) -> &str {
        "identity"
    }

    fn apply(&self, center: f64, _neighbors: &Neighborhood) -> f64 {
        center
    }
}

/// The four-point blend stencil: a heat-equation update rule.
///
/// Computes `(1 - weight) * center + weight * mean(neighbors)`. A weight
/// of `1.0` is the pure four-neighbor average; smaller weights relax
/// more cautiously toward the neighbor mean.
///
/// # Examples
///
/// ```
/// use settle_stencil::{FourPointBlend, Neighborhood, Stencil};
///
/// let blend = FourPointBlend::new(0.5).unwrap();
/// let nbs = Neighborhood { right: 8.0, up: 8.0, left: 8.0, down: 8.0 };
/// assert_eq!(blend.apply(0.0, &nbs), 4.0);
///
/// assert!(FourPointBlend::new(1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourPointBlend {
    weight: f64,
}

impl FourPointBlend {
    /// Create a blend stencil with the given neighbor weight.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::InvalidWeight`] unless `weight` is finite
    /// and within `[0, 1]`.
    pub fn new(weight: f64) -> Result<Self, StencilError> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(StencilError::InvalidWeight { value: weight });
        }
        Ok(Self { weight })
    }

    /// The neighbor weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Stencil for FourPointBlend {
    fn name(&self) -> &str {
        "four_point_blend"
    }

    fn apply(&self, center: f64, neighbors: &Neighborhood) -> f64 {
        (1.0 - self.weight) * center + self.weight * neighbors.mean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identity_ignores_neighbors() {
        let nbs = Neighborhood {
            right: 100.0,
            up: -3.0,
            left: 7.5,
            down: 0.25,
        };
        assert_eq!(Identity.apply(42.0, &nbs), 42.0);
        assert_eq!(Identity.name(), "identity");
    }

    #[test]
    fn blend_weight_one_is_pure_neighbor_mean() {
        let blend = FourPointBlend::new(1.0).unwrap();
        let nbs = Neighborhood {
            right: 1.0,
            up: 2.0,
            left: 3.0,
            down: 6.0,
        };
        assert_eq!(blend.apply(99.0, &nbs), 3.0);
    }

    #[test]
    fn blend_weight_zero_is_identity() {
        let blend = FourPointBlend::new(0.0).unwrap();
        let nbs = Neighborhood {
            right: 1.0,
            up: 2.0,
            left: 3.0,
            down: 6.0,
        };
        assert_eq!(blend.apply(99.0, &nbs), 99.0);
    }

    #[test]
    fn new_rejects_bad_weights() {
        assert!(FourPointBlend::new(-0.1).is_err());
        assert!(FourPointBlend::new(1.01).is_err());
        assert!(FourPointBlend::new(f64::NAN).is_err());
        assert!(FourPointBlend::new(f64::INFINITY).is_err());
        assert!(FourPointBlend::new(0.0).is_ok());
        assert!(FourPointBlend::new(1.0).is_ok());
    }

    proptest! {
        // The blend output lies between the center and the neighbor mean.
        #[test]
        fn blend_is_a_convex_combination(
            weight in 0.0f64..=1.0,
            center in -100.0f64..100.0,
            nb in -100.0f64..100.0,
        ) {
            let blend = FourPointBlend::new(weight).unwrap();
            let nbs = Neighborhood { right: nb, up: nb, left: nb, down: nb };
            let out = blend.apply(center, &nbs);
            let lo = center.min(nb) - 1e-9;
            let hi = center.max(nb) + 1e-9;
            prop_assert!(out >= lo && out <= hi);
        }
    }
}
