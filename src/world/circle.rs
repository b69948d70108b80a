//! Circle rasterization
//!
//! Midpoint (Bresenham) circle. Integer arithmetic only, so every point is an
//! exact grid coordinate.

use crate::ecs::Position;

/// Points of a discrete circle of `radius` around `center`.
///
/// Symmetric points that coincide (the axes, the diagonals, radius 0) are
/// collapsed, so the result is a set. It is returned sorted.
pub fn circle(center: Position, radius: u32) -> Vec<Position> {
    let mut x = radius as i32;
    let mut y = 0;
    let mut err = 0;
    let mut points = Vec::with_capacity(8 * (radius as usize + 1));

    while x >= y {
        for octant in 0..8 {
            let (dx, dy) = transform_octant(x, y, octant);
            points.push(center.offset(dx, dy));
        }

        if err <= 0 {
            y += 1;
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }

    points.sort_unstable();
    points.dedup();
    points
}

/// Reflect a first-octant offset into the given octant
fn transform_octant(col: i32, row: i32, octant: u8) -> (i32, i32) {
    match octant {
        0 => (col, row),
        1 => (row, col),
        2 => (row, -col),
        3 => (col, -row),
        4 => (-col, -row),
        5 => (-row, -col),
        6 => (-row, col),
        7 => (-col, row),
        _ => (col, row),
    }
}
