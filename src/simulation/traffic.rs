//! Traffic simulation
//!
//! Spawns a population of cars onto road points and advances them every
//! tick. Cars avoid parks and the fountain, and recover when their road
//! runs out. Obstacle tests here use the bounding-box circle policy from
//! [`super::geometry`], not the centroid policy the placement validator
//! uses.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::geometry::inside_circle_bbox;
use super::types::{Bounds, Point, Road};

/// Margin cars must keep from the canvas edge.
const SCREEN_MARGIN: f32 = 50.0;

/// Car speed range in pixels per second.
const MIN_SPEED: f32 = 20.0;
const MAX_SPEED: f32 = 50.0;

/// Progress added when a proposed move lands inside an obstacle. This is
/// an escape heuristic, not collision response: the car holds position and
/// skips ahead along the road parameter instead.
const OBSTACLE_SKIP: f32 = 0.1;

/// Divisor converting speed into normalized road progress per second.
const PROGRESS_RATE: f32 = 500.0;

/// Chance of switching to a random road when a car finishes its road.
const ROAD_SWITCH_CHANCE: f32 = 0.2;

/// Candidate points probed along a road when relocating a car.
const RELOCATE_ATTEMPTS: usize = 5;

const CAR_COLORS: [[f32; 3]; 8] = [
    [1.0, 0.0, 0.0], // red
    [0.0, 0.0, 1.0], // blue
    [1.0, 1.0, 0.0], // yellow
    [0.0, 1.0, 0.0], // green
    [1.0, 0.5, 0.0], // orange
    [0.8, 0.8, 0.8], // silver
    [0.2, 0.2, 0.2], // dark gray
    [1.0, 1.0, 1.0], // white
];

/// A single vehicle.
///
/// `road_index` is only valid against the road list the population was
/// generated with. Regenerating the road network without regenerating
/// traffic leaves it stale; that ordering is a caller precondition, not
/// something the simulation guards against.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub speed: f32,
    pub road_index: usize,
    /// Normalized progress in [0, 1] along the current road.
    pub road_progress: f32,
    pub color: [f32; 3],
}

/// The whole vehicle population.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficData {
    pub cars: Vec<Car>,
}

/// Spawns and advances the vehicle population.
///
/// Captures the park and fountain boundaries at spawn time so ticks don't
/// need the city passed back in. Population size is fixed per
/// [`TrafficGenerator::generate_traffic`] call; cars never despawn.
pub struct TrafficGenerator {
    traffic: TrafficData,
    rng: StdRng,
    park_areas: Vec<Vec<Point>>,
    fountain_area: Vec<Point>,
    bounds: Bounds,
}

impl Default for TrafficGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficGenerator {
    pub fn new() -> Self {
        Self {
            traffic: TrafficData::default(),
            rng: StdRng::from_os_rng(),
            park_areas: Vec::new(),
            fountain_area: Vec::new(),
            bounds: Bounds::default(),
        }
    }

    /// Create a generator with deterministic randomness for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Replace the population with `num_cars` freshly spawned cars.
    ///
    /// Each car gets a random road, a random progress along it, and a
    /// velocity pointed at the next road point. Spawn points outside the
    /// screen margin or inside a park/fountain are rejected and retried;
    /// the overall attempt budget is 3x the requested count, so the final
    /// population may be smaller than requested.
    pub fn generate_traffic(
        &mut self,
        roads: &[Road],
        num_cars: usize,
        parks: &[Vec<Point>],
        fountain: &[Point],
        bounds: Bounds,
    ) {
        self.traffic.cars.clear();
        self.park_areas = parks.to_vec();
        self.fountain_area = fountain.to_vec();
        self.bounds = bounds;

        if roads.is_empty() || num_cars == 0 {
            return;
        }

        info!("Generating {} cars on roads", num_cars);

        let min_x = SCREEN_MARGIN;
        let max_x = bounds.width as f32 - SCREEN_MARGIN;
        let min_y = SCREEN_MARGIN;
        let max_y = bounds.height as f32 - SCREEN_MARGIN;

        let mut attempts = 0;
        while self.traffic.cars.len() < num_cars && attempts < num_cars * 3 {
            attempts += 1;

            let road_index = self.rng.random_range(0..roads.len());
            let road = &roads[road_index];
            if road.points.is_empty() {
                continue;
            }

            let road_progress: f32 = self.rng.random_range(0.0..1.0);
            let point_index = ((road_progress * (road.points.len() - 1) as f32) as usize)
                .min(road.points.len() - 1);
            let pt = road.points[point_index];
            let x = pt.x as f32;
            let y = pt.y as f32;

            if x < min_x || x > max_x || y < min_y || y > max_y {
                continue;
            }

            if is_inside_obstacle(&self.park_areas, &self.fountain_area, x, y) {
                continue;
            }

            let speed = self.rng.random_range(MIN_SPEED..MAX_SPEED);
            let (vx, vy, speed) = match road.points.get(point_index + 1) {
                Some(next) => {
                    let dx = (next.x - pt.x) as f32;
                    let dy = (next.y - pt.y) as f32;
                    let length = (dx * dx + dy * dy).sqrt();
                    if length > 0.0 {
                        (dx / length * speed, dy / length * speed, speed)
                    } else {
                        (0.0, 0.0, 0.0)
                    }
                }
                // Last point of the road: nowhere to head until transition.
                None => (0.0, 0.0, 0.0),
            };

            let color = CAR_COLORS.choose(&mut self.rng).copied().unwrap_or(CAR_COLORS[0]);

            self.traffic.cars.push(Car {
                x,
                y,
                vx,
                vy,
                speed,
                road_index,
                road_progress,
                color,
            });
        }

        info!("Spawned {} cars", self.traffic.cars.len());
    }

    /// Advance every car by `delta` seconds.
    ///
    /// Moves that would land inside a park or the fountain are dropped and
    /// the car's progress is bumped instead (see [`OBSTACLE_SKIP`]).
    /// Progress advances every tick regardless. At the end of a road the
    /// car relocates onto a fresh point of the same or a randomly switched
    /// road; if no valid point is found among the probed candidates, it is
    /// reassigned to the next road index with its position left stale for
    /// this tick.
    pub fn update_traffic(&mut self, delta: f32, roads: &[Road]) {
        if roads.is_empty() {
            return;
        }

        let min_x = SCREEN_MARGIN;
        let max_x = self.bounds.width as f32 - SCREEN_MARGIN;
        let min_y = SCREEN_MARGIN;
        let max_y = self.bounds.height as f32 - SCREEN_MARGIN;

        for car in self.traffic.cars.iter_mut() {
            let new_x = car.x + car.vx * delta;
            let new_y = car.y + car.vy * delta;

            if is_inside_obstacle(&self.park_areas, &self.fountain_area, new_x, new_y) {
                car.road_progress += OBSTACLE_SKIP;
            } else {
                car.x = new_x;
                car.y = new_y;
            }

            car.road_progress += car.speed / PROGRESS_RATE * delta;

            if car.road_progress < 1.0 {
                continue;
            }

            // End of road: reset progress, maybe switch roads, then look
            // for a fresh in-bounds, obstacle-free point to continue from.
            car.road_progress = 0.0;

            if self.rng.random_range(0.0..1.0f32) < ROAD_SWITCH_CHANCE {
                car.road_index = self.rng.random_range(0..roads.len());
            }

            let road = &roads[car.road_index];
            if road.points.is_empty() {
                continue;
            }

            let mut relocated = false;
            for attempt in 0..RELOCATE_ATTEMPTS {
                let test_progress = attempt as f32 / RELOCATE_ATTEMPTS as f32;
                let point_index = ((test_progress * (road.points.len() - 1) as f32) as usize)
                    .min(road.points.len() - 1);
                let pt = road.points[point_index];
                let px = pt.x as f32;
                let py = pt.y as f32;

                if px < min_x || px > max_x || py < min_y || py > max_y {
                    continue;
                }
                if is_inside_obstacle(&self.park_areas, &self.fountain_area, px, py) {
                    continue;
                }

                car.x = px;
                car.y = py;
                car.road_progress = test_progress;
                relocated = true;

                if let Some(next) = road.points.get(point_index + 1) {
                    let dx = (next.x - pt.x) as f32;
                    let dy = (next.y - pt.y) as f32;
                    let length = (dx * dx + dy * dy).sqrt();
                    if length > 0.0 {
                        car.vx = dx / length * car.speed;
                        car.vy = dy / length * car.speed;
                    }
                }
                break;
            }

            if !relocated {
                // No usable point on this road; move on to the next one
                // and leave the position stale for this tick.
                car.road_index = (car.road_index + 1) % roads.len();
                car.road_progress = 0.0;
                debug!("Car found no valid point, advanced to road {}", car.road_index);
            }
        }
    }

    pub fn traffic_data(&self) -> &TrafficData {
        &self.traffic
    }

    pub fn has_traffic(&self) -> bool {
        !self.traffic.cars.is_empty()
    }

    pub fn clear(&mut self) {
        self.traffic.cars.clear();
    }
}

fn is_inside_obstacle(parks: &[Vec<Point>], fountain: &[Point], x: f32, y: f32) -> bool {
    for park in parks {
        if inside_circle_bbox(x, y, park) {
            return true;
        }
    }
    inside_circle_bbox(x, y, fountain)
}
