//! Bounding ellipse heuristic
use crate::coordinates::Coordinate;
use crate::station::MatchedStation;

/// Axis aligned extremities of the area a station's distance estimate
/// allows the user equipment to be in. Built on demand from one
/// [MatchedStation], never persisted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingEllipse {
    /// Western extremity
    pub most_left: Coordinate,
    /// Eastern extremity
    pub most_right: Coordinate,
    /// Northern extremity
    pub most_top: Coordinate,
    /// Southern extremity
    pub most_bottom: Coordinate,
    /// The station's own location
    pub mid_point: Coordinate,
}

impl BoundingEllipse {
    /// Builds the bounding extremities around one matched station,
    /// from its distance estimate converted to degrees at the
    /// station's own latitude.
    pub fn new(station: &MatchedStation) -> Self {
        let mid_point = station.coordinate;
        let arc = station.arc_degrees();
        Self {
            most_left: Coordinate::new(mid_point.latitude, mid_point.longitude - arc.horizontal),
            most_right: Coordinate::new(mid_point.latitude, mid_point.longitude + arc.horizontal),
            most_top: Coordinate::new(mid_point.latitude + arc.vertical, mid_point.longitude),
            most_bottom: Coordinate::new(mid_point.latitude - arc.vertical, mid_point.longitude),
            mid_point,
        }
    }

    /// Midpoint of the overlap between two ellipses, each axis resolved
    /// independently: the inner bound comes from whichever ellipse lies
    /// further along that axis.
    pub(crate) fn overlap_midpoint(&self, rhs: &Self) -> Coordinate {
        let longitude = if self.mid_point.longitude < rhs.mid_point.longitude {
            (rhs.most_left.longitude + self.most_right.longitude) / 2.0
        } else {
            (self.most_left.longitude + rhs.most_right.longitude) / 2.0
        };

        let latitude = if self.mid_point.latitude < rhs.mid_point.latitude {
            (rhs.most_bottom.latitude + self.most_top.latitude) / 2.0
        } else {
            (self.most_bottom.latitude + rhs.most_top.latitude) / 2.0
        };

        Coordinate::new(latitude, longitude)
    }
}
