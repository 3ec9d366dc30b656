//! Okumura-Hata propagation model
use log::debug;

use crate::cfg::Config;
use crate::error::Error;

/// Estimates the distance between the user equipment and a BTS,
/// from the signal power it received.
/// ## Inputs
/// - antenna_height_m: BTS antenna height [m]
/// - transmit_power_w: transmitted power [W]
/// - received_signal_dbm: power received by the user equipment [dBm]
/// - cfg: [Config], for the carrier frequency and correction factor
/// ## Returns
/// - estimated distance [km]
///
/// Errors out for a null or negative antenna height (the model takes
/// its logarithm), or when the height degenerates the path loss
/// denominator.
pub fn estimate_distance_km(
    antenna_height_m: f64,
    transmit_power_w: f64,
    received_signal_dbm: f64,
    cfg: &Config,
) -> Result<f64, Error> {
    if antenna_height_m <= 0.0 {
        return Err(Error::NonPositiveAntennaHeight);
    }

    let log10_height = antenna_height_m.log10();

    let denominator = 44.9 - 6.55 * log10_height;
    if denominator.abs() < f64::EPSILON {
        return Err(Error::DegenerateAntennaHeight);
    }

    // W to dBm
    let tx_dbm = 10.0 * (transmit_power_w * 1000.0).log10();

    // Lu = power transmitted - power received
    let path_loss = tx_dbm - received_signal_dbm;

    let exponent = (-69.55 - 26.16 * cfg.carrier_freq_mhz.log10()
        + 13.82 * log10_height
        + cfg.antenna_correction_factor
        + path_loss)
        / denominator;

    let distance_km = 10.0_f64.powf(exponent);

    debug!(
        "h={:.1}[m] p={:.1}[W] s={:.1}[dBm]: Lu={:.3}[dB] d={:.6}[km]",
        antenna_height_m, transmit_power_w, received_signal_dbm, path_loss, distance_km
    );

    Ok(distance_km)
}

/// Recalculates the mobile antenna correction factor, from the carrier
/// frequency [MHz] and user equipment antenna height [m] (small or
/// medium sized city formulation). Calibration helper: the estimation
/// chain runs on the precalculated
/// [crate::constants::ANTENNA_CORRECTION_FACTOR].
pub fn correction_factor(freq_mhz: f64, mobile_antenna_height_m: f64) -> f64 {
    let log10_freq = freq_mhz.log10();
    0.8 + (1.1 * log10_freq - 0.7) * mobile_antenna_height_m - 1.56 * log10_freq
}
