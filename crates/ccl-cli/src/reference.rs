//! Built-in reference anchor dataset.
//!
//! Anchor statistics come from the empirical analysis of the Riess et al.
//! 2016 systematic grid (VizieR J/ApJ/826/56); the baseline is Planck 2018.

use ccl_ledger::{AnchorEntry, BaselineEntry};
use ccl_types::{HorizonAddress, Measurement, ObserverContext};

/// Gaia EDR3 parallax zero-point offset, milliarcseconds
/// (Lindegren et al. 2021, A&A 649, A4). Applies to the Milky Way anchor.
pub const GAIA_ZP_OFFSET_MAS: f64 = -0.017;

pub const PLANCK_CITATION: &str = "Planck 2018 (doi: 10.1051/0004-6361/201833910)";

/// One reference anchor with its full provenance.
pub struct ReferenceAnchor {
    pub measurement: Measurement,
    pub n_configurations: u32,
    pub tensor: ObserverContext,
    pub address: HorizonAddress,
    pub gaia_zp_correction_mas: Option<f64>,
    pub systematic_notes: &'static str,
}

/// The three calibration anchors of the reference deployment, in grid order.
pub fn reference_anchors() -> Vec<ReferenceAnchor> {
    vec![
        ReferenceAnchor {
            measurement: Measurement::new("MilkyWay", 76.13, 0.99),
            n_configurations: 23,
            tensor: ObserverContext::new(0.9669, 0.0100, -0.2162, 0.5),
            address: HorizonAddress::new("MilkyWay", "Cepheid_DeltaCep", 337.742, 58.415, "ICRS2000"),
            gaia_zp_correction_mas: Some(GAIA_ZP_OFFSET_MAS),
            systematic_notes: "Gaia EDR3 parallaxes; ZP corrected; higher metallicity than external",
        },
        ReferenceAnchor {
            measurement: Measurement::new("LMC", 72.29, 0.80),
            n_configurations: 23,
            tensor: ObserverContext::new(0.9620, 0.0100, -0.1307, 0.5),
            address: HorizonAddress::new("LMC", "DEB_Field", 80.894, -69.756, "ICRS2000"),
            gaia_zp_correction_mas: None,
            systematic_notes: "Detached eclipsing binary distance; eclipsing binary parallaxes",
        },
        ReferenceAnchor {
            measurement: Measurement::new("NGC4258", 72.51, 0.83),
            n_configurations: 24,
            tensor: ObserverContext::new(0.9648, 0.0100, -0.1360, 0.5),
            address: HorizonAddress::new("NGC4258", "Maser_Nucleus", 184.733, 47.304, "ICRS2000"),
            gaia_zp_correction_mas: None,
            systematic_notes: "Megamaser distance anchor; geometric distance measurement",
        },
    ]
}

/// The Planck baseline as a measurement, with overridable numbers.
pub fn baseline_measurement(h0: f64, sigma: f64) -> Measurement {
    Measurement::new("Planck2018", h0, sigma)
}

/// Ledger baseline entry for the given numbers.
pub fn baseline_entry(h0: f64, sigma: f64) -> BaselineEntry {
    BaselineEntry {
        label: "Planck2018".into(),
        h0,
        sigma,
        citation: PLANCK_CITATION.into(),
    }
}

/// Ledger entries for the reference anchors.
///
/// All grid configurations include the metallicity correction.
pub fn anchor_entries(anchors: &[ReferenceAnchor]) -> Vec<AnchorEntry> {
    anchors
        .iter()
        .map(|a| {
            AnchorEntry::new(
                a.measurement.label.clone(),
                &a.address,
                a.measurement.value,
                a.measurement.sigma,
                a.n_configurations,
                a.tensor,
                a.gaia_zp_correction_mas,
                true,
                a.systematic_notes,
            )
        })
        .collect()
}
