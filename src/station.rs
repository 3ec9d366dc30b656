//! Station records
use crate::coordinates::{ArcDegrees, Coordinate};

/// (area code, cell id): uniquely identifies a BTS,
/// in both input files and in the matcher output.
pub type StationKey = (u32, u32);

/// Reference catalog entry: one known tower and its surveyed location.
/// Immutable once loaded, owned by the catalog collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerRecord {
    /// Cell identifier
    pub cell_id: u32,
    /// Location area code
    pub area_code: u32,
    /// Surveyed location, raw degrees/minutes/seconds text.
    /// Parsed at matching time only.
    pub gps_text: String,
}

impl TowerRecord {
    /// Builds a new catalog entry.
    pub fn new(cell_id: u32, area_code: u32, gps_text: &str) -> Self {
        Self {
            cell_id,
            area_code,
            gps_text: gps_text.to_string(),
        }
    }

    /// Identity key
    pub fn key(&self) -> StationKey {
        (self.area_code, self.cell_id)
    }
}

/// One tower detected nearby in a single scan.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ObservationRecord {
    /// Location area code
    pub area_code: u32,
    /// Cell identifier
    pub cell_id: u32,
    /// Power received by the user equipment [dBm]
    pub received_signal_dbm: f64,
    /// BTS antenna height [m]
    pub antenna_height_m: f64,
    /// Transmitted power [W]
    pub transmit_power_w: f64,
}

impl ObservationRecord {
    /// Builds a new scan record.
    pub fn new(
        area_code: u32,
        cell_id: u32,
        received_signal_dbm: f64,
        antenna_height_m: f64,
        transmit_power_w: f64,
    ) -> Self {
        Self {
            area_code,
            cell_id,
            received_signal_dbm,
            antenna_height_m,
            transmit_power_w,
        }
    }

    /// Identity key
    pub fn key(&self) -> StationKey {
        (self.area_code, self.cell_id)
    }
}

/// Tower present in both the scan and the reference catalog,
/// annotated with its resolved location and distance estimate.
/// One instance per unique [StationKey] in the matcher output.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedStation {
    /// Cell identifier
    pub cell_id: u32,
    /// Location area code
    pub area_code: u32,
    /// Raw catalog location text
    pub gps_text: String,
    /// Resolved location [ddeg]
    pub coordinate: Coordinate,
    /// Estimated distance to the user equipment [km].
    /// Mean of all estimates when the tower was reported
    /// more than once.
    pub distance_km: f64,
}

impl MatchedStation {
    /// Identity key
    pub fn key(&self) -> StationKey {
        (self.area_code, self.cell_id)
    }

    /// Converts the distance estimate to its degree equivalents,
    /// at this station's own latitude.
    pub fn arc_degrees(&self) -> ArcDegrees {
        ArcDegrees::from_km(self.distance_km, self.coordinate.latitude)
    }
}
