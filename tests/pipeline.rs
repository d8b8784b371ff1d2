//! Сквозные проверки конвейера генерации на публичном API.

use std::collections::VecDeque;

use tileworld::biome::assign_biomes;
use tileworld::direction::CARDINAL;
use tileworld::{GenerationParams, Grid, RiverCount, TileKind, generate_world};

fn params(seed: &str, rivers: u32) -> GenerationParams {
    GenerationParams {
        seed: Some(seed.to_string()),
        width: 60,
        height: 45,
        landmass_steppers: 30,
        landmass_steps: 100,
        rivers: RiverCount::Fixed(rivers),
    }
}

#[test]
fn same_seed_same_world() {
    let a = generate_world(params("determinism", 2)).unwrap();
    let b = generate_world(params("determinism", 2)).unwrap();
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.rivers, b.rivers);
    assert_eq!(a.grid.to_json().unwrap(), b.grid.to_json().unwrap());
}

#[test]
fn different_seeds_differ() {
    let a = generate_world(params("first", 1)).unwrap();
    let b = generate_world(params("second", 1)).unwrap();
    assert_ne!(a.grid, b.grid);
}

#[test]
fn every_tile_is_classified() {
    let world = generate_world(params("coverage", 2)).unwrap();
    assert_eq!(world.grid.count(TileKind::Void), 0);
    assert_eq!(world.grid.count(TileKind::Placeholder), 0);
    assert!(world.grid.count(TileKind::Biome) > 0);
}

#[test]
fn biome_values_stay_in_range() {
    let world = generate_world(params("ranges", 1)).unwrap();
    for tile in &world.grid.tiles {
        if tile.is(TileKind::Biome) {
            assert!((1..=4).contains(&tile.elevation()), "{tile:?}");
            assert!((1..=6).contains(&tile.moisture()), "{tile:?}");
        }
    }
}

#[test]
fn beaches_touch_the_sea() {
    let world = generate_world(params("beaches", 1)).unwrap();
    let grid = &world.grid;
    for idx in grid.indices_of(TileKind::Beach) {
        let (x, y) = grid.coords(idx);
        assert_eq!(grid.tiles[idx].elevation(), 1);
        assert!(grid.count_neighbours(x, y, Some(TileKind::Sea), true) > 0);
    }
}

/// Всё море образует одну связную область, достижимую из угла карты
#[test]
fn sea_is_one_region_from_the_corner() {
    let world = generate_world(params("reach", 2)).unwrap();
    let grid = &world.grid;

    let mut seen = vec![false; grid.tiles.len()];
    let mut queue = VecDeque::from([(0usize, 0usize)]);
    seen[0] = true;
    let mut reached = 0;
    while let Some((x, y)) = queue.pop_front() {
        reached += 1;
        for dir in CARDINAL {
            if let Some((nx, ny)) = grid.step(x, y, dir) {
                let nidx = grid.index(nx, ny);
                if !seen[nidx] && grid.tiles[nidx].is(TileKind::Sea) {
                    seen[nidx] = true;
                    queue.push_back((nx, ny));
                }
            }
        }
    }
    assert_eq!(reached, grid.count(TileKind::Sea));
}

#[test]
fn single_river_is_connected_fresh_water() {
    let world = generate_world(params("river", 1)).unwrap();
    let grid = &world.grid;
    let river = &world.rivers[0];

    for &idx in &river.tiles {
        assert!(grid.tiles[idx].is(TileKind::FreshWater));
    }
    for pair in river.tiles.windows(2) {
        let (ax, ay) = grid.coords(pair[0]);
        let (bx, by) = grid.coords(pair[1]);
        assert_eq!(ax.abs_diff(bx) + ay.abs_diff(by), 1);
    }
}

#[test]
fn classification_is_idempotent() {
    let world = generate_world(params("idempotent", 1)).unwrap();
    let mut grid: Grid = world.grid.clone();
    assert_eq!(assign_biomes(&mut grid).unwrap(), 0);
    assert_eq!(grid, world.grid);
}

#[test]
fn tiny_map_scenario() {
    let params = GenerationParams {
        seed: Some("abc123".to_string()),
        width: 10,
        height: 10,
        landmass_steppers: 1,
        landmass_steps: 20,
        rivers: RiverCount::Fixed(0),
    };
    let world = generate_world(params).unwrap();
    assert_eq!(world.seed, "abc123");
    assert!(world.grid.count(TileKind::Sea) >= 1);
    assert_eq!(world.grid.count(TileKind::Void), 0);
    assert!(world.rivers.is_empty());
}

#[test]
fn degenerate_sizes_still_generate() {
    for (w, h) in [(1, 1), (2, 3), (3, 2), (5, 1)] {
        let params = GenerationParams {
            seed: Some("tiny".to_string()),
            width: w,
            height: h,
            landmass_steppers: 2,
            landmass_steps: 10,
            rivers: RiverCount::Fixed(1),
        };
        let world = generate_world(params).unwrap();
        assert_eq!(world.grid.tiles.len(), w * h);
        assert_eq!(world.grid.count(TileKind::Void), 0);
        assert_eq!(world.grid.count(TileKind::Placeholder), 0);
    }
}

#[test]
fn scanline_export_matches_grid() {
    let world = generate_world(params("scanline", 0)).unwrap();
    let rows = world.grid.to_scanline();
    assert_eq!(rows.len(), world.grid.height);
    assert_eq!(rows[0].len(), world.grid.width);
    assert_eq!(rows[7][11], *world.grid.get(11, 7));
    assert_eq!(Grid::from_scanline(&rows).unwrap(), world.grid);
}
