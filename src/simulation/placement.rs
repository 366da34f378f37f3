//! Strict placement validation
//!
//! The single source of truth for "is this footprint legal here", used by
//! interactive building placement. Checks run in a fixed order and
//! short-circuit on the first failure, each with its own rejection reason.
//! Note this is a different, stricter policy than the clearance check used
//! during automatic generation in [`super::layout`].

use std::fmt;

use super::geometry::centroid_metrics;
use super::types::{Bounds, Building, Point, Road};

/// Clearance required between a footprint and any road point.
pub const ROAD_BUFFER: f32 = 20.0;

/// Clearance required between a footprint and a park or fountain circle.
pub const PARK_BUFFER: f32 = 35.0;

/// Clearance required between two building footprints.
pub const BUILDING_BUFFER: f32 = 25.0;

/// Margin a footprint must keep from the canvas edge.
pub const EDGE_MARGIN: f32 = 60.0;

/// Why a placement was rejected. Checks run in declaration order and stop
/// at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRejection {
    TooCloseToEdge,
    OverlapsRoad,
    OverlapsPark,
    OverlapsFountain,
    OverlapsBuilding,
}

impl fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            PlacementRejection::TooCloseToEdge => "too close to screen edge",
            PlacementRejection::OverlapsRoad => "overlaps with road",
            PlacementRejection::OverlapsPark => "overlaps with park",
            PlacementRejection::OverlapsFountain => "overlaps with fountain",
            PlacementRejection::OverlapsBuilding => "overlaps with existing building",
        };
        write!(f, "cannot place building: {}", reason)
    }
}

impl std::error::Error for PlacementRejection {}

/// Validate a footprint centered at (x, y) against the whole city.
///
/// Pure function: nothing is mutated either way. On `Ok(())` the caller is
/// free to append the building.
pub fn validate_placement(
    x: f32,
    y: f32,
    width: f32,
    depth: f32,
    roads: &[Road],
    parks: &[Vec<Point>],
    fountain: &[Point],
    buildings: &[Building],
    bounds: Bounds,
) -> Result<(), PlacementRejection> {
    let half_width = width / 2.0;
    let half_depth = depth / 2.0;

    if x - half_width < EDGE_MARGIN
        || x + half_width > bounds.width as f32 - EDGE_MARGIN
        || y - half_depth < EDGE_MARGIN
        || y + half_depth > bounds.height as f32 - EDGE_MARGIN
    {
        return Err(PlacementRejection::TooCloseToEdge);
    }

    if collides_with_roads(x, y, half_width, half_depth, roads) {
        return Err(PlacementRejection::OverlapsRoad);
    }

    for park in parks {
        if collides_with_circle(x, y, half_width, half_depth, park) {
            return Err(PlacementRejection::OverlapsPark);
        }
    }

    if collides_with_circle(x, y, half_width, half_depth, fountain) {
        return Err(PlacementRejection::OverlapsFountain);
    }

    if collides_with_buildings(x, y, half_width, half_depth, buildings) {
        return Err(PlacementRejection::OverlapsBuilding);
    }

    Ok(())
}

/// Any road point inside the footprint expanded by [`ROAD_BUFFER`] is a
/// collision.
fn collides_with_roads(x: f32, y: f32, half_width: f32, half_depth: f32, roads: &[Road]) -> bool {
    let left = x - half_width - ROAD_BUFFER;
    let right = x + half_width + ROAD_BUFFER;
    let top = y - half_depth - ROAD_BUFFER;
    let bottom = y + half_depth + ROAD_BUFFER;

    for road in roads {
        for point in &road.points {
            let px = point.x as f32;
            let py = point.y as f32;
            if px >= left && px <= right && py >= top && py <= bottom {
                return true;
            }
        }
    }

    false
}

/// Closest-point test between the footprint expanded by [`PARK_BUFFER`]
/// and the circle recovered from the boundary under the centroid policy.
fn collides_with_circle(
    x: f32,
    y: f32,
    half_width: f32,
    half_depth: f32,
    boundary: &[Point],
) -> bool {
    let Some(circle) = centroid_metrics(boundary) else {
        return false;
    };

    let closest_x =
        (x - half_width - PARK_BUFFER).max(circle.center_x.min(x + half_width + PARK_BUFFER));
    let closest_y =
        (y - half_depth - PARK_BUFFER).max(circle.center_y.min(y + half_depth + PARK_BUFFER));

    let dx = closest_x - circle.center_x;
    let dy = closest_y - circle.center_y;
    let reach = circle.radius + PARK_BUFFER;

    dx * dx + dy * dy < reach * reach
}

/// AABB overlap test with both boxes grown by [`BUILDING_BUFFER`].
fn collides_with_buildings(
    x: f32,
    y: f32,
    half_width: f32,
    half_depth: f32,
    buildings: &[Building],
) -> bool {
    let left = x - half_width;
    let right = x + half_width;
    let top = y - half_depth;
    let bottom = y + half_depth;

    for existing in buildings {
        let e_left = existing.x - existing.width / 2.0;
        let e_right = existing.x + existing.width / 2.0;
        let e_top = existing.y - existing.depth / 2.0;
        let e_bottom = existing.y + existing.depth / 2.0;

        let separated = right + BUILDING_BUFFER < e_left
            || left - BUILDING_BUFFER > e_right
            || bottom + BUILDING_BUFFER < e_top
            || top - BUILDING_BUFFER > e_bottom;
        if !separated {
            return true;
        }
    }

    false
}
