use std::fmt;

use serde::{Deserialize, Serialize};

/// Universal Horizon Address (UHA) for a calibration anchor.
///
/// A human-readable provenance address naming the physical object an anchor's
/// calibration is tied to, rendered as
/// `UHA::<anchor>::<object>::RA<ra>_DEC<±dec>::<frame>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HorizonAddress {
    /// Anchor name (e.g. `"NGC4258"`).
    pub anchor: String,
    /// Physical object the calibration is tied to (e.g. `"Maser_Nucleus"`).
    pub object: String,
    /// Right ascension, degrees.
    pub ra_deg: f64,
    /// Declination, degrees.
    pub dec_deg: f64,
    /// Coordinate frame (e.g. `"ICRS2000"`).
    pub frame: String,
}

impl HorizonAddress {
    pub fn new(
        anchor: impl Into<String>,
        object: impl Into<String>,
        ra_deg: f64,
        dec_deg: f64,
        frame: impl Into<String>,
    ) -> Self {
        Self {
            anchor: anchor.into(),
            object: object.into(),
            ra_deg,
            dec_deg,
            frame: frame.into(),
        }
    }
}

impl fmt::Display for HorizonAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Positive declinations carry an explicit sign.
        let dec_sign = if self.dec_deg >= 0.0 { "+" } else { "" };
        write!(
            f,
            "UHA::{}::{}::RA{:.3}_DEC{}{:.3}::{}",
            self.anchor, self.object, self.ra_deg, dec_sign, self.dec_deg, self.frame
        )
    }
}
