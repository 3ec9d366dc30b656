//! Observation to catalog matching
use std::collections::HashMap;

use log::{debug, warn};

use crate::cfg::Config;
use crate::coordinates::Coordinate;
use crate::propagation::estimate_distance_km;
use crate::station::{MatchedStation, ObservationRecord, StationKey, TowerRecord};

/// Joins the scan against the tower catalog on the (area code, cell id)
/// key, resolving each matched tower's location and distance estimate.
/// ## Inputs
/// - observations: towers detected nearby, one record per report
/// - catalog: reference tower catalog
/// - cfg: [Config]
/// ## Returns
/// - one [MatchedStation] per unique key, in catalog order.
///
/// A tower reported several times (sector scans) is folded into a
/// single station: its distance becomes the mean of the previous and
/// new estimate. Records that fail location parsing or violate the
/// propagation model domain are logged and dropped: one bad record
/// never aborts the rest of the batch.
pub fn match_stations(
    observations: &[ObservationRecord],
    catalog: &[TowerRecord],
    cfg: &Config,
) -> Vec<MatchedStation> {
    // key to reports map, built once
    let mut reports: HashMap<StationKey, Vec<&ObservationRecord>> = HashMap::new();
    for observation in observations {
        reports.entry(observation.key()).or_default().push(observation);
    }

    let mut matched: Vec<MatchedStation> = Vec::new();
    let mut indexes: HashMap<StationKey, usize> = HashMap::new();

    for tower in catalog {
        let key = tower.key();

        let Some(scans) = reports.get(&key) else {
            continue;
        };

        for observation in scans {
            let coordinate = match Coordinate::from_dms(&tower.gps_text, cfg.signed_hemispheres) {
                Ok(coordinate) => coordinate,
                Err(e) => {
                    warn!("BTS {}-{}: dropped ({})", key.0, key.1, e);
                    continue;
                },
            };

            let distance_km = match estimate_distance_km(
                observation.antenna_height_m,
                observation.transmit_power_w,
                observation.received_signal_dbm,
                cfg,
            ) {
                Ok(distance_km) => distance_km,
                Err(e) => {
                    warn!("BTS {}-{}: dropped ({})", key.0, key.1, e);
                    continue;
                },
            };

            match indexes.get(&key) {
                Some(&index) => {
                    // already reported: average the estimates in
                    let previous = matched[index].distance_km;
                    matched[index].distance_km = (previous + distance_km) / 2.0;
                    debug!(
                        "BTS {}-{}: {:.6}[km] averaged into {:.6}[km]",
                        key.0, key.1, distance_km, matched[index].distance_km
                    );
                },
                None => {
                    debug!("BTS {}-{}: matched at {:.6}[km]", key.0, key.1, distance_km);
                    indexes.insert(key, matched.len());
                    matched.push(MatchedStation {
                        cell_id: tower.cell_id,
                        area_code: tower.area_code,
                        gps_text: tower.gps_text.clone(),
                        coordinate,
                        distance_km,
                    });
                },
            }
        }
    }

    matched
}
