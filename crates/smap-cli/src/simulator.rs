//! Demo runs over the stripe map: a broad-phase neighbor-search benchmark
//! and a mutation-heavy churn exercise.

use std::time::Instant;

use anyhow::{Result, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smap_rs::map::{Entry, StripeMap};
use tracing::info;

use crate::cli::{BenchArgs, CheckMode, ChurnArgs};
use crate::geometry;
use crate::world::{self, World};

/// `run_bench` populates the map from the world, shrinks it, then scans a
/// depth window around every rectangle and counts overlaps. Each pass
/// reloads the map from scratch.
pub fn run_bench(args: &BenchArgs) -> Result<()> {
    ensure!(args.world.entities > 0, "bench needs at least one entity");
    ensure!(args.passes > 0, "bench needs at least one pass");
    ensure!(args.radius > 0, "bench needs a positive scan radius");
    ensure!(
        args.world.map_width > 0 && args.world.map_height > 0,
        "world extents must be positive"
    );

    let build_start = Instant::now();
    let world = world::build(&args.world);
    info!(
        "built {} rectangles in {:?}",
        world.rects.len(),
        build_start.elapsed()
    );

    let mut map: StripeMap<usize> =
        StripeMap::with_shape(args.world.map_width, args.stripes, args.slot_width);

    let mut checked_total = 0u64;
    let mut collisions_total = 0u64;

    for pass in 0..args.passes {
        let load_start = Instant::now();
        map.reset();
        for (index, rect) in world.rects.iter().enumerate() {
            map.add(Entry::new(rect.x as usize, index));
        }
        map.shrink();
        let load_time = load_start.elapsed();

        let scan_start = Instant::now();
        let (checked, collisions) = scan_world(&map, &world, args.radius, args.check);
        let scan_time = scan_start.elapsed();

        checked_total += checked;
        collisions_total += collisions;

        info!(
            "pass {pass}: load {load_time:?} (slots={}), scan {scan_time:?}, checked={checked}, collisions={collisions}",
            map.slots()
        );
    }

    info!(
        "bench done: passes={}, checked={checked_total}, collisions={collisions_total}",
        args.passes
    );
    Ok(())
}

/// `scan_world` walks every rectangle's depth window and counts candidate
/// pairs within the scan radius plus the subset that actually overlaps.
fn scan_world(map: &StripeMap<usize>, world: &World, radius: usize, check: CheckMode) -> (u64, u64) {
    let radius = radius as i64;
    let width = world.width as i64;

    let mut checked = 0u64;
    let mut collisions = 0u64;

    for (index, probe) in world.rects.iter().enumerate() {
        let lo = (probe.x - radius).max(0) as usize;
        let hi = (probe.x + radius).min(width - 1) as usize;

        for entry in map.depth_range(lo, hi) {
            if entry.value == index {
                continue;
            }

            let candidate = &world.rects[entry.value];
            if (candidate.x - probe.x).abs() > radius {
                continue;
            }

            checked += 1;
            let overlap = match check {
                CheckMode::Radius => geometry::overlaps_radius(probe, candidate),
                CheckMode::Square => geometry::overlaps_square(probe, candidate),
            };
            if overlap {
                collisions += 1;
            }
        }
    }

    (checked, collisions)
}

/// `run_churn` hammers the mutating surface the benchmark leaves alone:
/// cursor erases, keyed and windowed removals, per-depth clears, and
/// periodic shrinks, checking the entry count after every round.
pub fn run_churn(args: &ChurnArgs) -> Result<()> {
    ensure!(args.world.entities > 0, "churn needs at least one entity");
    ensure!(args.rounds > 0, "churn needs at least one round");
    ensure!(
        args.world.map_width > 0 && args.world.map_height > 0,
        "world extents must be positive"
    );

    let world = world::build(&args.world);
    let mut rng = if args.world.seed == 0 {
        StdRng::from_os_rng()
    } else {
        StdRng::seed_from_u64(args.world.seed)
    };

    let mut map: StripeMap<usize> =
        StripeMap::with_shape(args.world.map_width, args.stripes, args.slot_width);

    let batch = (args.world.entities / args.rounds).max(1);
    let mut next_rect = 0;
    let mut expected = 0usize;

    for round in 0..args.rounds {
        for _ in 0..batch {
            let rect = &world.rects[next_rect % world.rects.len()];
            next_rect += 1;

            ensure!(
                map.add(Entry::new(rect.x as usize, next_rect)),
                "add refused at round {round}"
            );
            expected += 1;
        }

        if map.size() > 0 {
            let (_, remaining) = map.erase(map.begin());
            expected = remaining;
        }

        if map.size() > 0 {
            let key = map[map.begin()].depth;
            let (_, remaining) = map.remove_key(map.begin(), map.end(), key);
            expected = remaining;
        }

        if round % 3 == 0 {
            let depth = rng.random_range(0..args.world.map_width);
            let (_, remaining) = map.clear_depth(depth);
            expected = remaining;
        }

        if round % 5 == 0 {
            map.shrink();
            ensure!(
                map.slots() == map.size(),
                "shrink left spare slots at round {round}"
            );
        }

        ensure!(
            map.size() == expected,
            "count drifted at round {round}: size={} expected={expected}",
            map.size()
        );

        info!(
            "round {round}: size={}, slots={}, shrunk={}",
            map.size(),
            map.slots(),
            map.is_shrunk()
        );
    }

    let before = map.size();
    let (_, cleared) = map.clear();
    ensure!(
        cleared == before,
        "final clear freed {cleared} of {before} entries"
    );
    ensure!(map.size() == 0, "map not empty after final clear");

    info!("churn done: rounds={}, final clear freed {cleared}", args.rounds);
    Ok(())
}
