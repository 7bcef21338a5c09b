use std::fmt;

use serde::{Deserialize, Serialize};

/// A single labeled measurement of the reconciled quantity.
///
/// Produced by an upstream fit (one per calibration anchor, or one per
/// alternative fit of the same relation) and consumed read-only by the merge
/// engine. The engine requires `sigma > 0` and both fields finite; it rejects
/// anything else at the point of computation rather than coercing it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Central value, in the native units of the quantity.
    pub value: f64,
    /// One-sigma uncertainty, same units as `value`.
    pub sigma: f64,
    /// Anchor or fit identifier (e.g. `"MilkyWay"`, `"LMC"`).
    pub label: String,
}

impl Measurement {
    /// Create a measurement with the given label.
    pub fn new(label: impl Into<String>, value: f64, sigma: f64) -> Self {
        Self {
            value,
            sigma,
            label: label.into(),
        }
    }

    /// Returns `true` if value and sigma are finite and `sigma > 0`.
    ///
    /// This is the structural invariant the engine enforces; callers can use
    /// it to pre-screen inputs without triggering a hard error.
    pub fn is_well_formed(&self) -> bool {
        self.value.is_finite() && self.sigma.is_finite() && self.sigma > 0.0
    }

    /// Inverse-variance weight `1 / sigma²`.
    ///
    /// Only meaningful for well-formed measurements.
    pub fn weight(&self) -> f64 {
        1.0 / (self.sigma * self.sigma)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ± {}", self.label, self.value, self.sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_measurement() {
        let m = Measurement::new("MilkyWay", 76.13, 0.99);
        assert!(m.is_well_formed());
        assert_eq!(m.label, "MilkyWay");
    }

    #[test]
    fn zero_sigma_is_malformed() {
        assert!(!Measurement::new("x", 70.0, 0.0).is_well_formed());
    }

    #[test]
    fn negative_sigma_is_malformed() {
        assert!(!Measurement::new("x", 70.0, -0.5).is_well_formed());
    }

    #[test]
    fn non_finite_fields_are_malformed() {
        assert!(!Measurement::new("x", f64::NAN, 0.5).is_well_formed());
        assert!(!Measurement::new("x", 70.0, f64::INFINITY).is_well_formed());
        assert!(!Measurement::new("x", f64::NEG_INFINITY, 0.5).is_well_formed());
    }

    #[test]
    fn weight_is_inverse_variance() {
        let m = Measurement::new("ref", 67.4, 0.5);
        assert!((m.weight() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn display_format() {
        let m = Measurement::new("LMC", 72.29, 0.8);
        assert_eq!(format!("{m}"), "LMC: 72.29 ± 0.8");
    }

    #[test]
    fn serde_roundtrip() {
        let m = Measurement::new("NGC4258", 72.51, 0.83);
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(m, parsed);
    }
}
