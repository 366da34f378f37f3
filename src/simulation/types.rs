//! Core data types for the city simulation
//!
//! These are standalone types that don't depend on any rendering layer.

use serde::{Deserialize, Serialize};

/// An integer pixel coordinate on the city canvas.
///
/// Points are only ever produced by the rasterization primitives in
/// [`crate::simulation::raster`]; everything downstream treats them as
/// immutable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single road segment.
///
/// A road is an ordered sequence of rasterized points (first-to-last along
/// the path) plus a cosmetic width. After a successful generation every
/// road holds at least one point. Roads are never mutated in place; a
/// regeneration replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub points: Vec<Point>,
    pub width: i32,
}

impl Road {
    pub fn new(points: Vec<Point>, width: i32) -> Self {
        Self { points, width }
    }
}

/// Classification of buildings by height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildingType {
    /// 1-3 floors (residential)
    LowRise,
    /// 4-10 floors (commercial)
    MidRise,
    /// 11+ floors (skyscrapers)
    HighRise,
}

/// A single building footprint.
///
/// Buildings are axis-aligned rectangles centered at (x, y). The height is
/// only meaningful to a renderer; it carries no collision meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    #[serde(rename = "type")]
    pub kind: BuildingType,
}

impl Building {
    pub fn new(x: f32, y: f32, width: f32, depth: f32, height: f32, kind: BuildingType) -> Self {
        Self {
            x,
            y,
            width,
            depth,
            height,
            kind,
        }
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Canvas center, used for the fountain and radial road patterns.
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Container for all generated city elements.
///
/// Parks are stored as raw circle boundaries. When a fountain is requested
/// it is appended to the park list as the last element *and* mirrored in
/// the `fountain` field; there is no per-entry flag distinguishing it.
/// Center and radius of a circular region are never stored - consumers
/// recompute them from the boundary (see [`crate::simulation::geometry`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityData {
    pub roads: Vec<Road>,
    pub parks: Vec<Vec<Point>>,
    pub fountain: Vec<Point>,
    pub buildings: Vec<Building>,
    /// True once a generation cycle (or a load) has completed.
    #[serde(skip)]
    pub is_generated: bool,
}

impl CityData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty state, ready for a new generation cycle.
    pub fn clear(&mut self) {
        self.roads.clear();
        self.parks.clear();
        self.fountain.clear();
        self.buildings.clear();
        self.is_generated = false;
    }
}
