#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod constants;
mod coordinates;
mod ellipse;
mod error;
mod loader;
mod matcher;
mod propagation;
mod solutions;
mod solver;
mod station;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::coordinates::{ArcDegrees, Coordinate};
    pub use crate::ellipse::BoundingEllipse;
    pub use crate::loader::{load_catalog, load_observations};
    pub use crate::matcher::match_stations;
    pub use crate::propagation::{correction_factor, estimate_distance_km};
    pub use crate::solutions::Fix;
    pub use crate::solver::estimate_fix;
    pub use crate::station::{MatchedStation, ObservationRecord, StationKey, TowerRecord};
}

// pub export
pub use error::Error;
