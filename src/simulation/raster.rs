//! Rasterization primitives
//!
//! Integer-only line and circle rasterization. These two functions are the
//! source of every `Point` in the city: roads are Bresenham lines, parks
//! and the fountain are midpoint circles.

use super::types::Point;

/// Rasterize the segment from (x0, y0) to (x1, y1) with Bresenham's
/// algorithm.
///
/// The output is 8-connected, contains both endpoints, and uses only
/// integer arithmetic (accumulated error term). All octants are handled,
/// including vertical, horizontal, and degenerate single-point segments.
pub fn bresenham_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut err = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        points.push(Point::new(x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Rasterize a circle boundary with the midpoint circle algorithm.
///
/// One octant is walked with an incremental decision variable and
/// reflected into the other seven, so the boundary is symmetric under 90
/// and 180 degree rotations about the center. A radius of zero or less
/// degenerates to the center point alone.
pub fn midpoint_circle(center_x: i32, center_y: i32, radius: i32) -> Vec<Point> {
    if radius <= 0 {
        return vec![Point::new(center_x, center_y)];
    }

    let mut points = Vec::new();
    let mut x = radius;
    let mut y = 0;
    let mut decision = 1 - radius;

    while x >= y {
        points.push(Point::new(center_x + x, center_y + y));
        points.push(Point::new(center_x - x, center_y + y));
        points.push(Point::new(center_x + x, center_y - y));
        points.push(Point::new(center_x - x, center_y - y));
        points.push(Point::new(center_x + y, center_y + x));
        points.push(Point::new(center_x - y, center_y + x));
        points.push(Point::new(center_x + y, center_y - x));
        points.push(Point::new(center_x - y, center_y - x));

        y += 1;
        if decision <= 0 {
            decision += 2 * y + 1;
        } else {
            x -= 1;
            decision += 2 * (y - x) + 1;
        }
    }

    points
}
