//! Standalone city generation and traffic simulation module
//!
//! This module contains all the core layout and simulation logic. It can be
//! driven from the console or from tests without booting up a renderer: a
//! frontend only ever reads `CityData` and `TrafficData` snapshots.

mod config;
mod generator;
mod geometry;
mod layout;
mod placement;
mod raster;
mod roads;
mod save;
mod traffic;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use config::{CityConfig, RoadPattern, SkylineType, TextureTheme};
#[allow(unused_imports)]
pub use generator::CityGenerator;
#[allow(unused_imports)]
pub use geometry::{
    bbox_metrics, centroid_metrics, inside_circle_bbox, inside_circle_centroid, CircleMetrics,
};
#[allow(unused_imports)]
pub use placement::{
    validate_placement, PlacementRejection, BUILDING_BUFFER, EDGE_MARGIN, PARK_BUFFER, ROAD_BUFFER,
};
#[allow(unused_imports)]
pub use raster::{bresenham_line, midpoint_circle};
#[allow(unused_imports)]
pub use roads::RoadGenerator;
#[allow(unused_imports)]
pub use save::{load_city, save_city};
#[allow(unused_imports)]
pub use traffic::{Car, TrafficData, TrafficGenerator};
#[allow(unused_imports)]
pub use types::{Bounds, Building, BuildingType, CityData, Point, Road};
