//! Circle metrics recovered from boundary point lists
//!
//! Circular regions are stored only as their rasterized boundaries, so
//! every consumer has to recover a center and radius before testing
//! against them. Two distinct recoveries are in use and are deliberately
//! kept separate:
//!
//! - the *centroid* policy (mean of the boundary, radius = max distance),
//!   used by the strict placement validator, and
//! - the *bounding-box* policy (box midpoint, radius = half the x extent),
//!   used by the traffic simulation.
//!
//! The two disagree slightly on rasterized circles. Callers pick one by
//! call site; do not swap them without rechecking collision behavior.

use super::types::Point;

/// A center and radius recovered from a boundary point list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMetrics {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

/// Centroid policy: center is the mean of all boundary points, radius is
/// the maximum distance from that center to any boundary point.
pub fn centroid_metrics(points: &[Point]) -> Option<CircleMetrics> {
    if points.is_empty() {
        return None;
    }

    let mut center_x = 0.0f32;
    let mut center_y = 0.0f32;
    for p in points {
        center_x += p.x as f32;
        center_y += p.y as f32;
    }
    center_x /= points.len() as f32;
    center_y /= points.len() as f32;

    let mut radius = 0.0f32;
    for p in points {
        let dx = p.x as f32 - center_x;
        let dy = p.y as f32 - center_y;
        radius = radius.max((dx * dx + dy * dy).sqrt());
    }

    Some(CircleMetrics {
        center_x,
        center_y,
        radius,
    })
}

/// Bounding-box policy: center is the box midpoint, radius is half the
/// horizontal extent.
pub fn bbox_metrics(points: &[Point]) -> Option<CircleMetrics> {
    let first = points.first()?;
    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;

    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Some(CircleMetrics {
        center_x: (min_x + max_x) as f32 / 2.0,
        center_y: (min_y + max_y) as f32 / 2.0,
        radius: (max_x - min_x) as f32 / 2.0,
    })
}

/// Point-in-circle test under the centroid policy. An empty boundary
/// contains nothing.
pub fn inside_circle_centroid(x: f32, y: f32, boundary: &[Point]) -> bool {
    match centroid_metrics(boundary) {
        Some(m) => inside(x, y, m),
        None => false,
    }
}

/// Point-in-circle test under the bounding-box policy. An empty boundary
/// contains nothing.
pub fn inside_circle_bbox(x: f32, y: f32, boundary: &[Point]) -> bool {
    match bbox_metrics(boundary) {
        Some(m) => inside(x, y, m),
        None => false,
    }
}

fn inside(x: f32, y: f32, m: CircleMetrics) -> bool {
    let dx = x - m.center_x;
    let dy = y - m.center_y;
    dx * dx + dy * dy <= m.radius * m.radius
}
