//! Geodetic coordinates and degree distance conversions
use crate::error::Error;

/// Decimal degrees coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Coordinate {
    /// Latitude [ddeg]
    pub latitude: f64,
    /// Longitude [ddeg]
    pub longitude: f64,
}

/// Metric distance converted to its local degree equivalents.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ArcDegrees {
    /// Along the local parallel (east-west) [deg]
    pub horizontal: f64,
    /// Along the local meridian (north-south) [deg]
    pub vertical: f64,
}

/// Merges a degrees/minutes/seconds triplet into decimal degrees.
fn merge_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Extracts all numeric fields contained in a GPS string,
/// in reading order. Separators are free: any character that
/// cannot belong to a number delimits a field.
fn numeric_fields(text: &str) -> Vec<f64> {
    let mut fields = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' {
            current.push(c);
        } else if !current.is_empty() {
            if let Ok(value) = current.parse::<f64>() {
                fields.push(value);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(value) = current.parse::<f64>() {
            fields.push(value);
        }
    }
    fields
}

impl Coordinate {
    /// Builds a new [Coordinate] from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a [Coordinate] from a degrees/minutes/seconds GPS string,
    /// like `"49 13 32.95N,16 34 13.32E"`: three numeric fields and a
    /// hemisphere letter per axis, comma in between.
    /// Errors out when less than six numeric fields can be extracted.
    ///
    /// Hemisphere letters are accepted but NOT applied unless
    /// `signed_hemispheres` is requested: the historical chain always
    /// resolved north-eastern (positive) coordinates, whatever the
    /// letters said. Set [crate::prelude::Config::signed_hemispheres]
    /// to negate southern latitudes and western longitudes.
    pub fn from_dms(text: &str, signed_hemispheres: bool) -> Result<Self, Error> {
        let fields = numeric_fields(text);
        if fields.len() < 6 {
            return Err(Error::DmsFormat(text.to_string()));
        }

        let mut latitude = merge_degrees(fields[0], fields[1], fields[2]);
        let mut longitude = merge_degrees(fields[3], fields[4], fields[5]);

        if signed_hemispheres {
            // letters trail each axis, comma splits the axes
            let (lat_txt, lon_txt) = text.split_once(',').unwrap_or((text, ""));
            if lat_txt.contains(['S', 's']) {
                latitude = -latitude;
            }
            if lon_txt.contains(['W', 'w']) {
                longitude = -longitude;
            }
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Formats self back to a degrees/minutes/seconds GPS string,
    /// parsable by [Coordinate::from_dms].
    pub fn to_dms(&self) -> String {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        let (lat_d, lat_m, lat_s) = split_degrees(self.latitude.abs());
        let (lon_d, lon_m, lon_s) = split_degrees(self.longitude.abs());
        format!(
            "{} {} {:.7}{},{} {} {:.7}{}",
            lat_d, lat_m, lat_s, ns, lon_d, lon_m, lon_s, ew
        )
    }
}

/// Splits decimal degrees into a degrees/minutes/seconds triplet.
fn split_degrees(value: f64) -> (u64, u64, f64) {
    let degrees = value.trunc();
    let minutes = ((value - degrees) * 60.0).trunc();
    let seconds = ((value - degrees) * 60.0 - minutes) * 60.0;
    (degrees as u64, minutes as u64, seconds)
}

impl ArcDegrees {
    /// Converts a metric distance to its local degree equivalents,
    /// at given latitude [ddeg]. Uses the WGS84 meridian and parallel
    /// arc length series.
    ///
    /// The parallel arc length tends to zero towards the poles and the
    /// horizontal component diverges there: the quotient is returned
    /// as is, not clamped.
    pub fn from_km(distance_km: f64, at_latitude: f64) -> Self {
        let phi = at_latitude.to_radians();

        let vertical_m_per_deg = 111132.92 - 559.82 * (2.0 * phi).cos()
            + 1.175 * (4.0 * phi).cos()
            - 0.0023 * (6.0 * phi).cos();

        let horizontal_m_per_deg =
            111412.84 * phi.cos() - 93.5 * (3.0 * phi).cos() + 0.118 * (5.0 * phi).cos();

        Self {
            horizontal: distance_km * 1000.0 / horizontal_m_per_deg,
            vertical: distance_km * 1000.0 / vertical_m_per_deg,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ArcDegrees, Coordinate};
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    #[case("49 13 32.95N,16 34 13.32E", 49.22581944444445, 16.570366666666665)]
    #[case("50 10 12.3N,14 23 45.6E", 50.170083333333336, 14.395999999999999)]
    #[case("0 30 0.0N,120 0 36.0E", 0.5, 120.01)]
    fn dms_parsing(#[case] text: &str, #[case] latitude: f64, #[case] longitude: f64) {
        let coord = Coordinate::from_dms(text, false).unwrap();
        assert!((coord.latitude - latitude).abs() < 1.0E-9);
        assert!((coord.longitude - longitude).abs() < 1.0E-9);
    }

    #[rstest]
    #[case("")]
    #[case("not a coordinate")]
    #[case("49 13N,16 34E")]
    #[case("5010.123N,01423.456E")]
    fn dms_parsing_failures(#[case] text: &str) {
        assert_eq!(
            Coordinate::from_dms(text, false),
            Err(Error::DmsFormat(text.to_string())),
        );
    }

    #[test]
    fn hemisphere_signing() {
        let text = "33 51 54.5S,151 12 33.7W";

        // historical behavior: letters are ignored
        let unsigned = Coordinate::from_dms(text, false).unwrap();
        assert!(unsigned.latitude > 0.0);
        assert!(unsigned.longitude > 0.0);

        let signed = Coordinate::from_dms(text, true).unwrap();
        assert_eq!(signed.latitude, -unsigned.latitude);
        assert_eq!(signed.longitude, -unsigned.longitude);
    }

    #[test]
    fn dms_roundtrip() {
        for coord in [
            Coordinate::new(49.22581944444445, 16.570366666666665),
            Coordinate::new(0.5, 120.01),
            Coordinate::new(89.9, 0.25),
        ] {
            let parsed = Coordinate::from_dms(&coord.to_dms(), false).unwrap();
            assert!((parsed.latitude - coord.latitude).abs() < 1.0E-9);
            assert!((parsed.longitude - coord.longitude).abs() < 1.0E-9);
        }

        // southern/western round trip requires signed parsing
        let coord = Coordinate::new(-33.865139, -151.209334);
        let parsed = Coordinate::from_dms(&coord.to_dms(), true).unwrap();
        assert!((parsed.latitude - coord.latitude).abs() < 1.0E-9);
        assert!((parsed.longitude - coord.longitude).abs() < 1.0E-9);
    }

    #[test]
    fn arc_degrees() {
        // 1 km at 50N
        let arc = ArcDegrees::from_km(1.0, 50.0);
        assert!((arc.horizontal - 0.013947832792746969).abs() < 1.0E-12);
        assert!((arc.vertical - 0.00899045898413434).abs() < 1.0E-12);

        // 1 km on the equator
        let arc = ArcDegrees::from_km(1.0, 0.0);
        assert!((arc.horizontal - 0.008983155487515939).abs() < 1.0E-12);
        assert!((arc.vertical - 0.009043695025814083).abs() < 1.0E-12);

        // null distance
        let arc = ArcDegrees::from_km(0.0, 45.0);
        assert_eq!(arc.horizontal, 0.0);
        assert_eq!(arc.vertical, 0.0);
    }
}
