//! Synthetic 2D world of rectangles for the neighbor-search demo.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::cli::{Placement, WorldArgs};

const CLUSTER_HOTSPOTS: usize = 8;

/// Rect is an axis-aligned rectangle positioned by its `x`/`y` corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// World holds the populated rectangles and the depth-axis extent they were
/// placed in.
pub struct World {
    pub rects: Vec<Rect>,
    pub width: usize,
}

/// `build` populates a world from the CLI arguments.
///
/// A zero seed draws one from the OS; any other value makes the run
/// reproducible.
pub fn build(args: &WorldArgs) -> World {
    let mut rng = if args.seed == 0 {
        StdRng::from_os_rng()
    } else {
        StdRng::seed_from_u64(args.seed)
    };

    let rects = match args.placement {
        Placement::Uniform => place_uniform(&mut rng, args),
        Placement::Clustered => place_clustered(&mut rng, args),
    };

    World {
        rects,
        width: args.map_width,
    }
}

fn place_uniform(rng: &mut StdRng, args: &WorldArgs) -> Vec<Rect> {
    (0..args.entities)
        .map(|_| Rect {
            x: rng.random_range(0..args.map_width as i64),
            y: rng.random_range(0..args.map_height as i64),
            w: args.rect_size,
            h: args.rect_size,
        })
        .collect()
}

/// Clustered placement piles rectangles around a few hotspots, which skews
/// stripe occupancy and forces repeated re-stripes of the hot buckets.
fn place_clustered(rng: &mut StdRng, args: &WorldArgs) -> Vec<Rect> {
    let spread = (args.map_width / 64).max(1) as f64;
    let hotspots: Vec<(f64, f64)> = (0..CLUSTER_HOTSPOTS)
        .map(|_| {
            (
                rng.random_range(0..args.map_width as i64) as f64,
                rng.random_range(0..args.map_height as i64) as f64,
            )
        })
        .collect();

    (0..args.entities)
        .map(|_| {
            let (cx, cy) = hotspots[rng.random_range(0..hotspots.len())];
            let dist_x = Normal::new(cx, spread).expect("finite spread");
            let dist_y = Normal::new(cy, spread).expect("finite spread");

            Rect {
                x: clamp_axis(dist_x.sample(rng), args.map_width),
                y: clamp_axis(dist_y.sample(rng), args.map_height),
                w: args.rect_size,
                h: args.rect_size,
            }
        })
        .collect()
}

fn clamp_axis(value: f64, extent: usize) -> i64 {
    (value as i64).clamp(0, extent as i64 - 1)
}
