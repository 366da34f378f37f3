//! Road network generation
//!
//! Builds the road list for one of three patterns. Every road is a single
//! Bresenham segment; the radial pattern approximates its rings as chains
//! of short straight roads rather than one circular road object.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use super::config::{CityConfig, RoadPattern};
use super::raster::{bresenham_line, midpoint_circle};
use super::types::{Bounds, Point, Road};

/// Distance kept between the road network and the canvas edge.
const ROAD_MARGIN: i32 = 50;

/// Generates road networks in grid, radial, or random patterns.
///
/// Each generator instance owns its RNG, reseeded from the OS on
/// construction. Use [`RoadGenerator::with_seed`] when tests need
/// reproducible output.
pub struct RoadGenerator {
    bounds: Bounds,
    rng: StdRng,
}

impl RoadGenerator {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a deterministic RNG.
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate the road list for the configured pattern.
    ///
    /// Generation never fails; degenerate parameters (layout size zero,
    /// tiny canvas) degrade to the smallest well-defined network.
    pub fn generate(&mut self, config: &CityConfig) -> Vec<Road> {
        info!(
            "Generating roads ({} pattern, layout size {})",
            config.road_pattern.label(),
            config.layout_size
        );

        let roads = match config.road_pattern {
            RoadPattern::Grid => self.generate_grid(config),
            RoadPattern::Radial => self.generate_radial(config),
            RoadPattern::Random => self.generate_random(config),
        };

        info!("Generated {} road segments", roads.len());
        roads
    }

    /// Grid pattern: (layout_size + 1) horizontal and (layout_size + 1)
    /// vertical roads, evenly spaced inside the margin.
    fn generate_grid(&mut self, config: &CityConfig) -> Vec<Road> {
        let n = config.layout_size.max(0);
        let spacing = if n == 0 {
            0
        } else {
            (self.bounds.width - 2 * ROAD_MARGIN) / n
        };

        debug!("Creating {}x{} grid, spacing {}", n, n, spacing);

        let mut roads = Vec::with_capacity(2 * (n as usize + 1));

        for i in 0..=n {
            let y = ROAD_MARGIN + i * spacing;
            roads.push(create_road(
                ROAD_MARGIN,
                y,
                self.bounds.width - ROAD_MARGIN,
                y,
                config.road_width,
            ));
        }

        for i in 0..=n {
            let x = ROAD_MARGIN + i * spacing;
            roads.push(create_road(
                x,
                ROAD_MARGIN,
                x,
                self.bounds.height - ROAD_MARGIN,
                config.road_width,
            ));
        }

        roads
    }

    /// Radial pattern: layout_size spokes from the center plus
    /// (layout_size / 2) rings, each ring re-segmented into short straight
    /// roads by connecting every 8th boundary point to the next.
    fn generate_radial(&mut self, config: &CityConfig) -> Vec<Road> {
        let (center_x, center_y) = self.bounds.center();
        let num_spokes = config.layout_size.max(0);
        let max_radius = self.bounds.width.min(self.bounds.height) / 2 - ROAD_MARGIN;

        debug!("Creating {} radial spokes", num_spokes);

        let mut roads = Vec::new();

        for i in 0..num_spokes {
            let angle = 2.0 * PI * i as f64 / num_spokes as f64;
            let end_x = center_x + (max_radius as f64 * angle.cos()) as i32;
            let end_y = center_y + (max_radius as f64 * angle.sin()) as i32;
            roads.push(create_road(
                center_x,
                center_y,
                end_x,
                end_y,
                config.road_width,
            ));
        }

        let num_rings = num_spokes / 2;
        debug!("Creating {} circular rings", num_rings);

        for ring in 1..=num_rings {
            let radius = max_radius * ring / num_rings;
            let circle_points = midpoint_circle(center_x, center_y, radius);

            // Sample every 8th boundary point so each ring becomes a chain
            // of straight segments approximating a polygon.
            for i in (0..circle_points.len()).step_by(8) {
                let next = (i + 8) % circle_points.len();
                roads.push(create_road(
                    circle_points[i].x,
                    circle_points[i].y,
                    circle_points[next].x,
                    circle_points[next].y,
                    config.road_width,
                ));
            }
        }

        roads
    }

    /// Random pattern: 2 * layout_size interior nodes plus the four
    /// corners, connected by 3 * layout_size roads between random distinct
    /// node pairs. Pairs may repeat; the network is not deduplicated.
    fn generate_random(&mut self, config: &CityConfig) -> Vec<Road> {
        let n = config.layout_size.max(0);
        let num_roads = n as usize * 3;

        debug!("Creating {} random roads", num_roads);

        let mut nodes = Vec::with_capacity(n as usize * 2 + 4);
        for _ in 0..n * 2 {
            nodes.push(self.random_point(ROAD_MARGIN));
        }

        // Corner nodes keep the network reaching the canvas edges.
        nodes.push(Point::new(100, 100));
        nodes.push(Point::new(self.bounds.width - 100, 100));
        nodes.push(Point::new(100, self.bounds.height - 100));
        nodes.push(Point::new(
            self.bounds.width - 100,
            self.bounds.height - 100,
        ));

        let mut roads = Vec::with_capacity(num_roads);
        for _ in 0..num_roads {
            let a = self.rng.random_range(0..nodes.len());
            let mut b = self.rng.random_range(0..nodes.len());
            while b == a {
                b = self.rng.random_range(0..nodes.len());
            }
            roads.push(create_road(
                nodes[a].x,
                nodes[a].y,
                nodes[b].x,
                nodes[b].y,
                config.road_width,
            ));
        }

        roads
    }

    /// Random interior point keeping the given margin from the edges.
    fn random_point(&mut self, margin: i32) -> Point {
        let x = if self.bounds.width > 2 * margin {
            self.rng.random_range(margin..=self.bounds.width - margin)
        } else {
            self.bounds.width / 2
        };
        let y = if self.bounds.height > 2 * margin {
            self.rng.random_range(margin..=self.bounds.height - margin)
        } else {
            self.bounds.height / 2
        };
        Point::new(x, y)
    }
}

fn create_road(x0: i32, y0: i32, x1: i32, y1: i32, width: i32) -> Road {
    Road::new(bresenham_line(x0, y0, x1, y1), width)
}
