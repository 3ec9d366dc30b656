//! Input file loaders
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::Error;
use crate::station::{ObservationRecord, TowerRecord};

/// Loads the reference tower catalog from a semicolon delimited file,
/// column layout `cellId;areaCode;broadcastChannel;locality;gps`.
/// The first line is a header and is discarded; the broadcast channel
/// and locality columns are not retained.
///
/// A missing or unreadable file errors out with
/// [Error::InputUnavailable]. Rows that do not parse are logged and
/// skipped: a file of unparsable rows loads as an empty catalog,
/// not an error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<TowerRecord>, Error> {
    let mut catalog = Vec::new();
    for (nth, line) in read_rows(path.as_ref())? {
        match parse_catalog_row(&line) {
            Some(record) => catalog.push(record),
            None => warn!("dropped catalog row {}: \"{}\"", nth, line),
        }
    }
    Ok(catalog)
}

/// Loads one scan of nearby towers from a semicolon delimited file,
/// column layout `areaCode;cellId;rssi;signal;antennaHeight;power`
/// (signal in dBm, height in meters, power in W). The first line is a
/// header and is discarded; the RSSI column is not retained.
///
/// Same failure contract as [load_catalog].
pub fn load_observations<P: AsRef<Path>>(path: P) -> Result<Vec<ObservationRecord>, Error> {
    let mut observations = Vec::new();
    for (nth, line) in read_rows(path.as_ref())? {
        match parse_observation_row(&line) {
            Some(record) => observations.push(record),
            None => warn!("dropped observation row {}: \"{}\"", nth, line),
        }
    }
    Ok(observations)
}

/// Reads all data rows: header and blank lines are discarded,
/// row numbers are kept for reporting.
fn read_rows(path: &Path) -> Result<Vec<(usize, String)>, Error> {
    let unavailable = |_| Error::InputUnavailable(path.display().to_string());
    let file = File::open(path).map_err(unavailable)?;

    let mut rows = Vec::new();
    for (nth, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(unavailable)?;
        if nth == 0 || line.trim().is_empty() {
            continue;
        }
        rows.push((nth, line));
    }
    Ok(rows)
}

fn parse_catalog_row(line: &str) -> Option<TowerRecord> {
    let mut columns = line.split(';');
    let cell_id = columns.next()?.trim().parse().ok()?;
    let area_code = columns.next()?.trim().parse().ok()?;
    let _broadcast_channel = columns.next()?;
    let _locality = columns.next()?;
    let gps_text = columns.next()?.trim();
    Some(TowerRecord::new(cell_id, area_code, gps_text))
}

fn parse_observation_row(line: &str) -> Option<ObservationRecord> {
    let mut columns = line.split(';');
    let area_code = columns.next()?.trim().parse().ok()?;
    let cell_id = columns.next()?.trim().parse().ok()?;
    let _rssi = columns.next()?;
    let received_signal_dbm = columns.next()?.trim().parse().ok()?;
    let antenna_height_m = columns.next()?.trim().parse().ok()?;
    let transmit_power_w = columns.next()?.trim().parse().ok()?;
    Some(ObservationRecord::new(
        area_code,
        cell_id,
        received_signal_dbm,
        antenna_height_m,
        transmit_power_w,
    ))
}
