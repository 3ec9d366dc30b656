#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::constants::{ANTENNA_CORRECTION_FACTOR, CARRIER_FREQ_MHZ, MOBILE_ANTENNA_HEIGHT_M};

fn default_carrier_freq() -> f64 {
    CARRIER_FREQ_MHZ
}

fn default_correction_factor() -> f64 {
    ANTENNA_CORRECTION_FACTOR
}

fn default_mobile_antenna_height() -> f64 {
    MOBILE_ANTENNA_HEIGHT_M
}

fn default_signed_hemispheres() -> bool {
    false
}

/// Estimation parametrization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Carrier frequency [MHz]. The path loss model is only
    /// meaningful within the 150 to 1500 MHz band.
    #[cfg_attr(feature = "serde", serde(default = "default_carrier_freq"))]
    pub carrier_freq_mhz: f64,

    /// Mobile antenna correction factor [dB]. Precalculated for
    /// [Config::mobile_antenna_height_m] at [Config::carrier_freq_mhz]:
    /// rerun [crate::prelude::correction_factor] when customizing either.
    #[cfg_attr(feature = "serde", serde(default = "default_correction_factor"))]
    pub antenna_correction_factor: f64,

    /// User equipment antenna height [m]. Not used by the estimation
    /// itself, only when recalibrating the correction factor.
    #[cfg_attr(feature = "serde", serde(default = "default_mobile_antenna_height"))]
    pub mobile_antenna_height_m: f64,

    /// Apply southern/western signing when parsing GPS strings.
    /// The historical chain never signed hemispheres (all catalogs
    /// being north-eastern): this remains the default.
    #[cfg_attr(feature = "serde", serde(default = "default_signed_hemispheres"))]
    pub signed_hemispheres: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::gsm900()
    }
}

impl Config {
    /// GSM 900 preset: the parametrization all historical catalogs
    /// were recorded with.
    pub fn gsm900() -> Self {
        Self {
            carrier_freq_mhz: default_carrier_freq(),
            antenna_correction_factor: default_correction_factor(),
            mobile_antenna_height_m: default_mobile_antenna_height(),
            signed_hemispheres: default_signed_hemispheres(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn gsm900_preset() {
        let cfg = Config::default();
        assert_eq!(cfg, Config::gsm900());
        assert_eq!(cfg.carrier_freq_mhz, 900.0);
        assert_eq!(cfg.antenna_correction_factor, -0.749018);
        assert_eq!(cfg.mobile_antenna_height_m, 1.2);
        assert!(!cfg.signed_hemispheres);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize() {
        let cfg: Config = serde_json::from_str(r#"{"signed_hemispheres": true}"#).unwrap();
        assert_eq!(cfg.carrier_freq_mhz, 900.0);
        assert!(cfg.signed_hemispheres);
    }
}
