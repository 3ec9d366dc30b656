/// GSM carrier frequency, in MHz
pub const CARRIER_FREQ_MHZ: f64 = 900.0;

/// Mobile antenna correction factor, in dB, precalculated
/// for [MOBILE_ANTENNA_HEIGHT_M] at [CARRIER_FREQ_MHZ].
/// See [crate::prelude::correction_factor].
pub const ANTENNA_CORRECTION_FACTOR: f64 = -0.749018;

/// User equipment antenna height, in meters
pub const MOBILE_ANTENNA_HEIGHT_M: f64 = 1.2;

/// Base URL the resolved fix is appended to
pub const MAPS_URL_BASE: &str = "maps.google.com/maps?q=";
