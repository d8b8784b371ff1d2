//! Конвейер генерации
//!
//! Все стохастические стадии идут последовательно по одному генератору случайных чисел и
//! одной сетке. Порядок стадий и порядок запуска генераторов суши входят в контракт:
//! только так одинаковый сид даёт одинаковую карту.

use std::time::{Duration, Instant};

use crate::beach::generate_beaches;
use crate::biome::assign_biomes;
use crate::cleanup::{post_process, post_process_path};
use crate::climate::{assign_elevation, assign_moisture};
use crate::config::GenerationParams;
use crate::error::Result;
use crate::grid::Grid;
use crate::landmass::LandmassGenerator;
use crate::rivers::{RiverPath, carve_river};
use crate::rng::SeededRng;
use crate::tile::{Tile, TileKind};
use crate::water::{fill_remaining_void, flood_fill};

/// Точка начала заливки моря. После полной чистки край сетки всегда `Void`,
/// поэтому из угла достижим весь внешний контур.
const OCEAN_SEED: (usize, usize) = (0, 0);

/// Результат генерации
#[derive(Debug, Clone)]
pub struct GeneratedWorld {
    pub grid: Grid,
    /// Итоговый сид для воспроизведения
    pub seed: String,
    pub rivers: Vec<RiverPath>,
    pub duration: Duration,
}

#[derive(Debug)]
pub struct Generator {
    params: GenerationParams,
    rng: SeededRng,
    grid: Grid,
    river_count: u32,
}

impl Generator {
    /// Проверяет параметры, создаёт генератор случайных чисел и разрешает число рек.
    ///
    /// Число рек из диапазона берётся из генератора сразу, до генерации суши.
    pub fn new(params: GenerationParams) -> Result<Self> {
        params.validate()?;
        let mut rng = SeededRng::new(params.seed.as_deref())?;
        let river_count = params.rivers.resolve(&mut rng);
        let grid = Grid::new(params.width, params.height);

        Ok(Self {
            params,
            rng,
            grid,
            river_count,
        })
    }

    #[must_use]
    pub fn seed(&self) -> &str {
        self.rng.seed()
    }

    #[must_use]
    pub fn river_count(&self) -> u32 {
        self.river_count
    }

    /// Запускает все стадии и возвращает готовую карту
    pub fn generate(self) -> Result<GeneratedWorld> {
        let Self {
            params,
            mut rng,
            mut grid,
            river_count,
        } = self;
        let started = Instant::now();
        let _span = tracing::info_span!(
            target: "mapgen::generator",
            "mapgen.generate",
            seed = %rng.seed(),
            width = grid.width,
            height = grid.height
        )
        .entered();

        // === 1. Суша: генераторы строго по порядку запуска ===
        for index in 0..params.landmass_steppers {
            LandmassGenerator::new(&grid, index).generate(
                &mut grid,
                &mut rng,
                params.landmass_steps,
            )?;
        }
        tracing::debug!(
            target: "mapgen::generator",
            land = grid.count(TileKind::Placeholder),
            "mapgen.landmass.done"
        );

        // === 2. Чистка артефактов блуждания ===
        post_process(&mut grid);

        // === 3. Море и озёра ===
        let ocean_start = grid.index(OCEAN_SEED.0, OCEAN_SEED.1);
        let sea = flood_fill(&mut grid, ocean_start, Tile::Sea);
        let lakes = fill_remaining_void(&mut grid);
        tracing::debug!(target: "mapgen::generator", sea, lakes, "mapgen.water.done");

        // === 4. Высота ===
        assign_elevation(&mut grid);

        // === 5. Реки, каждая с чисткой вдоль русла ===
        let mut rivers = Vec::with_capacity(river_count as usize);
        for _ in 0..river_count {
            let river = carve_river(&mut grid, &mut rng);
            post_process_path(&mut grid, &river.tiles);
            rivers.push(river);
        }

        // === 6. Влажность, пляжи, биомы ===
        assign_moisture(&mut grid);
        let beaches = generate_beaches(&mut grid);
        let biomes = assign_biomes(&mut grid)?;

        let duration = started.elapsed();
        tracing::info!(
            target: "mapgen::generator",
            sea = grid.count(TileKind::Sea),
            fresh_water = grid.count(TileKind::FreshWater),
            beaches,
            biomes,
            rivers = rivers.len(),
            duration_ms = duration.as_millis() as u64,
            "mapgen.generate.done"
        );

        Ok(GeneratedWorld {
            grid,
            seed: rng.seed().to_string(),
            rivers,
            duration,
        })
    }
}

/// Проверяет параметры и генерирует карту за один вызов
pub fn generate_world(params: GenerationParams) -> Result<GeneratedWorld> {
    Generator::new(params)?.generate()
}
