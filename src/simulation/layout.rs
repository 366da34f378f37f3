//! Park, fountain, and building layout
//!
//! Automatic placement during a generation cycle. Parks are dropped
//! without any collision checks (they may legally overlap roads, each
//! other, or the fountain). Buildings use the loose distance check below,
//! which is intentionally weaker than the strict validator in
//! [`super::placement`] used for interactive placement - the two policies
//! stay separate so call sites behave differently.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use super::config::{CityConfig, SkylineType};
use super::raster::midpoint_circle;
use super::types::{Bounds, Building, BuildingType, Point};

/// Distance kept between park centers and the canvas edge.
const PARK_MARGIN: i32 = 100;

/// Distance kept between building centers and the canvas edge.
const BUILDING_MARGIN: i32 = 50;

/// Minimum distance from a candidate building center to each park's
/// reference point (its first boundary point).
const PARK_CLEARANCE: f32 = 80.0;

/// Generate the park list plus the fountain boundary.
///
/// The fountain, when its radius is positive, is appended to the park list
/// as the last element and also returned separately; nothing in the list
/// itself marks it as the fountain.
pub fn generate_parks(
    rng: &mut StdRng,
    bounds: Bounds,
    config: &CityConfig,
) -> (Vec<Vec<Point>>, Vec<Point>) {
    let mut parks = Vec::with_capacity(config.num_parks + 1);

    if config.num_parks == 0 {
        debug!("No parks requested");
    } else {
        info!("Generating {} parks", config.num_parks);
        for i in 0..config.num_parks {
            let center = random_interior_point(rng, bounds, PARK_MARGIN);
            debug!(
                "Park {} at ({}, {}) with radius {}",
                i + 1,
                center.x,
                center.y,
                config.park_radius
            );
            parks.push(midpoint_circle(center.x, center.y, config.park_radius));
        }
    }

    let mut fountain = Vec::new();
    if config.fountain_radius > 0 {
        let (cx, cy) = bounds.center();
        info!(
            "Central fountain at ({}, {}) with radius {}",
            cx, cy, config.fountain_radius
        );
        fountain = midpoint_circle(cx, cy, config.fountain_radius);
        parks.push(fountain.clone());
    }

    (parks, fountain)
}

/// Generate buildings under the approximate clearance policy.
///
/// Up to 10x the requested count of random placements are attempted; a
/// candidate is accepted if its center is at least [`PARK_CLEARANCE`] away
/// from every park's first boundary point. Exhausting the attempt budget
/// short of the requested count is accepted as the final result, not an
/// error.
pub fn generate_buildings(
    rng: &mut StdRng,
    bounds: Bounds,
    config: &CityConfig,
    parks: &[Vec<Point>],
) -> Vec<Building> {
    if config.num_buildings == 0 {
        debug!("No buildings requested");
        return Vec::new();
    }

    info!("Generating {} buildings", config.num_buildings);

    let mut buildings = Vec::with_capacity(config.num_buildings);
    let max_attempts = config.num_buildings * 10;
    let mut attempts = 0;

    while buildings.len() < config.num_buildings && attempts < max_attempts {
        attempts += 1;

        let center = random_interior_point(rng, bounds, BUILDING_MARGIN);
        let x = center.x as f32;
        let y = center.y as f32;
        let width = rng.random_range(20.0..60.0f32);
        let depth = rng.random_range(20.0..60.0f32);

        if !clears_park_reference_points(x, y, parks) {
            continue;
        }

        let (kind, height) = roll_skyline(rng, config.skyline_type);
        buildings.push(Building::new(x, y, width, depth, height, kind));

        if buildings.len() % 5 == 0 {
            debug!("Generated {} buildings so far", buildings.len());
        }
    }

    if buildings.len() < config.num_buildings {
        warn!(
            "Placed {} of {} requested buildings ({} attempts exhausted)",
            buildings.len(),
            config.num_buildings,
            max_attempts
        );
    }

    let low = buildings
        .iter()
        .filter(|b| b.kind == BuildingType::LowRise)
        .count();
    let mid = buildings
        .iter()
        .filter(|b| b.kind == BuildingType::MidRise)
        .count();
    let high = buildings
        .iter()
        .filter(|b| b.kind == BuildingType::HighRise)
        .count();
    info!(
        "Completed {} buildings (low-rise: {} | mid-rise: {} | high-rise: {})",
        buildings.len(),
        low,
        mid,
        high
    );

    buildings
}

/// Straight-line distance check against each park's first boundary point.
/// This is not a true center/radius test; it reproduces the approximate
/// policy used only during automatic generation.
fn clears_park_reference_points(x: f32, y: f32, parks: &[Vec<Point>]) -> bool {
    for park in parks {
        if let Some(reference) = park.first() {
            let dx = x - reference.x as f32;
            let dy = y - reference.y as f32;
            if (dx * dx + dy * dy).sqrt() < PARK_CLEARANCE {
                return false;
            }
        }
    }
    true
}

/// Pick a building type and height according to the skyline policy.
fn roll_skyline(rng: &mut StdRng, skyline: SkylineType) -> (BuildingType, f32) {
    match skyline {
        SkylineType::LowRise => (BuildingType::LowRise, rng.random_range(10.0..30.0)),
        SkylineType::MidRise => (BuildingType::MidRise, rng.random_range(40.0..100.0)),
        SkylineType::Mixed => match rng.random_range(0..3) {
            0 => (BuildingType::LowRise, rng.random_range(10.0..30.0)),
            1 => (BuildingType::MidRise, rng.random_range(40.0..100.0)),
            _ => (BuildingType::HighRise, rng.random_range(120.0..250.0)),
        },
        // Two of three rolls come up high-rise.
        SkylineType::Skyscraper => match rng.random_range(0..3) {
            0 | 1 => (BuildingType::HighRise, rng.random_range(120.0..250.0)),
            _ => (BuildingType::MidRise, rng.random_range(40.0..100.0)),
        },
    }
}

fn random_interior_point(rng: &mut StdRng, bounds: Bounds, margin: i32) -> Point {
    let x = if bounds.width > 2 * margin {
        rng.random_range(margin..=bounds.width - margin)
    } else {
        bounds.width / 2
    };
    let y = if bounds.height > 2 * margin {
        rng.random_range(margin..=bounds.height - margin)
    } else {
        bounds.height / 2
    };
    Point::new(x, y)
}
