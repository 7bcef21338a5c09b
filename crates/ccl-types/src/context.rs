use serde::{Deserialize, Serialize};

/// Observer domain tensor encoding a measurement's provenance regime.
///
/// Four fixed components: measurement maturity (`p_m`), temporal regime
/// (`o_t`, 0 = early universe, 1 = late), matter-density context (`o_m`),
/// and statistical-vs-systematic balance (`o_a`).
///
/// The tensor is diagnostic. Its distance between two measurement sources
/// informs the choice of the `delta_t` penalty scale but is never itself a
/// term inside the merge arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    /// Measurement confidence / maturity.
    pub p_m: f64,
    /// Time domain (0 = early, 1 = late).
    pub o_t: f64,
    /// Matter density context.
    pub o_m: f64,
    /// Statistical vs systematic dominance.
    pub o_a: f64,
}

impl ObserverContext {
    pub fn new(p_m: f64, o_t: f64, o_m: f64, o_a: f64) -> Self {
        Self { p_m, o_t, o_m, o_a }
    }

    /// The four components in declaration order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.p_m, self.o_t, self.o_m, self.o_a]
    }

    /// Euclidean distance to another observer context.
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let ctx = ObserverContext::new(0.9648, 0.01, -0.136, 0.5);
        assert_eq!(ctx.distance_to(&ctx), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = ObserverContext::new(0.9669, 0.01, -0.2162, 0.5);
        let b = ObserverContext::new(0.9620, 0.01, -0.1307, 0.5);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn distance_matches_euclidean_norm() {
        let a = ObserverContext::new(0.0, 0.0, 0.0, 0.0);
        let b = ObserverContext::new(3.0, 4.0, 0.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn as_array_preserves_order() {
        let ctx = ObserverContext::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(ctx.as_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn serde_roundtrip() {
        let ctx = ObserverContext::new(0.9648, 0.01, -0.136, 0.5);
        let json = serde_json::to_string(&ctx).unwrap();
        let parsed: ObserverContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, parsed);
    }
}
