//! Высота и влажность суши
//!
//! Высота растёт с удалением от моря, влажность падает с удалением от пресной воды.
//! Оба значения являются корзинами относительно максимального расстояния на текущей карте,
//! а не абсолютные пороги: на картах другого размера разбиение будет другим.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::nearest_distance;
use crate::grid::Grid;
use crate::tile::{Tile, TileKind};

pub const MAX_ELEVATION: u8 = 4;
pub const MAX_MOISTURE: u8 = 6;

/// Итог одного прохода: сколько тайлов обработано и максимальное расстояние
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimateStats {
    pub tiles: usize,
    pub unreachable: usize,
    pub max_distance: f64,
}

/// Расстояние от каждой заготовки суши до ближайшего тайла `kind` (в порядке индексов).
///
/// Поиски только читают сетку, поэтому с фичей `parallel` выполняются через rayon.
fn distances_to(grid: &Grid, kind: TileKind) -> Vec<(usize, Option<f64>)> {
    let land = grid.indices_of(TileKind::Placeholder);
    let measure = |&idx: &usize| {
        let (x, y) = grid.coords(idx);
        (idx, nearest_distance(grid, x, y, kind))
    };

    #[cfg(feature = "parallel")]
    let distances = land.par_iter().map(measure).collect();
    #[cfg(not(feature = "parallel"))]
    let distances = land.iter().map(measure).collect();

    distances
}

/// `floor(d / floor(max / 4))`, ограниченное диапазоном 1..=4
#[must_use]
pub fn elevation_bucket(distance: f64, max_distance: f64) -> u8 {
    let per_level = (max_distance / f64::from(MAX_ELEVATION)).floor().max(1.0);
    (distance / per_level).floor().clamp(1.0, f64::from(MAX_ELEVATION)) as u8
}

/// `6 - ceil(d / (max / 6)) + 1`, ограниченное диапазоном 1..=6
#[must_use]
pub fn moisture_bucket(distance: f64, max_distance: f64) -> u8 {
    let per_level = max_distance / f64::from(MAX_MOISTURE);
    if per_level <= 0.0 {
        return MAX_MOISTURE;
    }
    let moisture = f64::from(MAX_MOISTURE) - (distance / per_level).ceil() + 1.0;
    moisture.clamp(1.0, f64::from(MAX_MOISTURE)) as u8
}

fn assign<F>(grid: &mut Grid, kind: TileKind, unreachable_value: u8, mut apply: F) -> ClimateStats
where
    F: FnMut(&mut Tile, Option<f64>, f64, u8),
{
    let distances = distances_to(grid, kind);
    let max_distance = distances
        .iter()
        .filter_map(|(_, d)| *d)
        .fold(0.0_f64, f64::max);

    let mut stats = ClimateStats {
        tiles: distances.len(),
        unreachable: 0,
        max_distance,
    };
    for (idx, distance) in distances {
        if distance.is_none() {
            stats.unreachable += 1;
        }
        apply(&mut grid.tiles[idx], distance, max_distance, unreachable_value);
    }

    if stats.unreachable > 0 {
        tracing::warn!(
            target: "mapgen::climate",
            kind = ?kind,
            unreachable = stats.unreachable,
            "mapgen.climate.no_target_tiles"
        );
    }
    stats
}

/// Назначает высоту каждой заготовке суши по расстоянию до моря.
///
/// Если моря нет вовсе, тайл получает максимальную высоту.
pub fn assign_elevation(grid: &mut Grid) -> ClimateStats {
    let stats = assign(grid, TileKind::Sea, MAX_ELEVATION, |tile, distance, max, fallback| {
        if let Tile::Placeholder { elevation, .. } = tile {
            *elevation = distance.map_or(fallback, |d| elevation_bucket(d, max));
        }
    });
    tracing::debug!(
        target: "mapgen::climate",
        tiles = stats.tiles,
        max_distance = stats.max_distance,
        "mapgen.climate.elevation"
    );
    stats
}

/// Назначает влажность каждой заготовке суши по расстоянию до пресной воды.
///
/// Если пресной воды нет вовсе, тайл считается самым сухим.
pub fn assign_moisture(grid: &mut Grid) -> ClimateStats {
    let stats = assign(grid, TileKind::FreshWater, 1, |tile, distance, max, fallback| {
        if let Tile::Placeholder { moisture, .. } = tile {
            *moisture = distance.map_or(fallback, |d| moisture_bucket(d, max));
        }
    });
    tracing::debug!(
        target: "mapgen::climate",
        tiles = stats.tiles,
        max_distance = stats.max_distance,
        "mapgen.climate.moisture"
    );
    stats
}
