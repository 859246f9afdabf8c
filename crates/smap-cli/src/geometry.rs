//! Distance and overlap helpers for the neighbor-search demo.

use crate::world::Rect;

/// Correction factor for the manhattan-sum distance approximation.
const MAGIC_NUMBER: f64 = 1.0 - 1.0 / (std::f64::consts::SQRT_2 * 3.14);

/// `distance` is the exact euclidean distance, truncated to an integer.
#[must_use]
pub fn distance(dx: i64, dy: i64) -> i64 {
    let squared = (dx * dx + dy * dy) as f64;
    squared.sqrt() as i64
}

/// `quick_distance` approximates euclidean distance from the manhattan sum,
/// cheap enough to run as a prefilter on every candidate pair.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn quick_distance(dx: i64, dy: i64) -> i64 {
    let manhattan = dx.abs() + dy.abs();
    (manhattan as f64 * MAGIC_NUMBER) as i64
}

/// `overlaps_radius` reports whether two rectangles sit within each other's
/// radius: a quick approximate rejection first, then the exact distance
/// against the summed half-widths.
#[must_use]
pub fn overlaps_radius(a: &Rect, b: &Rect) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let both_sizes = a.w + b.w;
    if quick_distance(dx, dy) > both_sizes {
        return false;
    }

    let both_halves = a.w / 2 + b.w / 2;
    distance(dx, dy) <= both_halves
}

/// `overlaps_square` is the axis-aligned bounding-box variant: the centers
/// must sit strictly closer than the summed half-extents on both axes.
#[must_use]
pub fn overlaps_square(a: &Rect, b: &Rect) -> bool {
    let half_w = a.w / 2 + b.w / 2;
    let half_h = a.h / 2 + b.h / 2;

    (b.x - a.x).abs() < half_w && (b.y - a.y).abs() < half_h
}
