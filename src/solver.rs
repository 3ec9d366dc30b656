//! Trilateration heuristic
use itertools::Itertools;
use log::{debug, warn};

use crate::ellipse::BoundingEllipse;
use crate::solutions::Fix;
use crate::station::MatchedStation;

/// Minimum matched stations for an estimation attempt
const MIN_STATIONS: usize = 3;

/// Approximates the user equipment position from the matched stations'
/// distance constraints.
/// ## Input
/// - stations: matched, distance annotated stations
/// ## Returns
/// - estimated [Fix], or [Fix::INSUFFICIENT] when less than three
///   stations were proposed.
///
/// Exactly the first three stations contribute, in input order:
/// selection is positional, not quality based (historical limitation,
/// kept as is). One bounding ellipse is built per station and the
/// three pairwise overlap midpoints are averaged. A heuristic, not an
/// exact trilateration solve: no least squares, no circle
/// intersection.
pub fn estimate_fix(stations: &[MatchedStation]) -> Fix {
    if stations.len() < MIN_STATIONS {
        warn!(
            "{} matched station(s): not enough to resolve a fix",
            stations.len()
        );
        return Fix::INSUFFICIENT;
    }

    let ellipses = stations
        .iter()
        .take(MIN_STATIONS)
        .map(BoundingEllipse::new)
        .collect::<Vec<_>>();

    let midpoints = ellipses
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.overlap_midpoint(b))
        .collect::<Vec<_>>();

    let k = midpoints.len() as f64;
    let latitude = midpoints.iter().map(|mid| mid.latitude).sum::<f64>() / k;
    let longitude = midpoints.iter().map(|mid| mid.longitude).sum::<f64>() / k;

    let fix = Fix::new(latitude, longitude);
    debug!("resolved fix: {}", fix);
    fix
}
