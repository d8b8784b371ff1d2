use serde::{Deserialize, Serialize};

use crate::climate::{MAX_ELEVATION, MAX_MOISTURE};
use crate::error::{GenerationError, Result};
use crate::grid::Grid;
use crate::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Bare,
    Grassland,
    Scorched,
    Shrubland,
    Snow,
    SubtropicalDesert,
    Taiga,
    TemperateDeciduousForest,
    TemperateDesert,
    TemperateRainForest,
    TropicalRainForest,
    TropicalSeasonalForest,
    Tundra,
}

/// Диаграмма Уиттекера: по строкам высота 1..=4, по столбцам влажность 1..=6
const WHITTAKER: [[Biome; 6]; 4] = {
    use Biome::*;
    [
        [
            SubtropicalDesert,
            Grassland,
            TropicalSeasonalForest,
            TropicalSeasonalForest,
            TropicalRainForest,
            TropicalRainForest,
        ],
        [
            TemperateDesert,
            Grassland,
            Grassland,
            TemperateDeciduousForest,
            TemperateDeciduousForest,
            TemperateRainForest,
        ],
        [
            TemperateDesert,
            TemperateDesert,
            Shrubland,
            Shrubland,
            Taiga,
            Taiga,
        ],
        [Scorched, Bare, Tundra, Snow, Snow, Snow],
    ]
};

impl Biome {
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Bare => "Bare",
            Biome::Grassland => "Grassland",
            Biome::Scorched => "Scorched",
            Biome::Shrubland => "Shrubland",
            Biome::Snow => "Snow",
            Biome::SubtropicalDesert => "Subtropical Desert",
            Biome::Taiga => "Taiga",
            Biome::TemperateDeciduousForest => "Temperate Deciduous Forest",
            Biome::TemperateDesert => "Temperate Desert",
            Biome::TemperateRainForest => "Temperate Rain Forest",
            Biome::TropicalRainForest => "Tropical Rain Forest",
            Biome::TropicalSeasonalForest => "Tropical Seasonal Forest",
            Biome::Tundra => "Tundra",
        }
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        match self {
            Biome::Bare => [0xBB, 0xBB, 0xBB],
            Biome::Grassland => [0xC4, 0xD3, 0xAA],
            Biome::Scorched => [0x99, 0x99, 0x99],
            Biome::Shrubland => [0xC3, 0xCC, 0xBA],
            Biome::Snow => [0xFF, 0xFF, 0xFF],
            Biome::SubtropicalDesert => [0xE9, 0xDC, 0xC6],
            Biome::Taiga => [0xCB, 0xD4, 0xBB],
            Biome::TemperateDeciduousForest => [0xB4, 0xC8, 0xA9],
            Biome::TemperateDesert => [0xE4, 0xE8, 0xCA],
            Biome::TemperateRainForest => [0xA3, 0xC4, 0xA8],
            Biome::TropicalRainForest => [0x9C, 0xBB, 0xA9],
            Biome::TropicalSeasonalForest => [0xA9, 0xCC, 0xA3],
            Biome::Tundra => [0xDD, 0xDD, 0xBA],
        }
    }

    /// Множитель сложности прохода; у всех биомов суши он единичный
    pub fn path_scale(&self) -> u32 {
        1
    }
}

/// Биом по высоте (1..=4) и влажности (1..=6).
///
/// # Ошибки
/// `RangeError`, если значение вне диапазона.
pub fn classify(elevation: u8, moisture: u8) -> Result<Biome> {
    if !(1..=MAX_ELEVATION).contains(&elevation) {
        return Err(GenerationError::RangeError {
            name: "elevation",
            min: 1,
            max: MAX_ELEVATION,
            value: elevation,
        });
    }
    if !(1..=MAX_MOISTURE).contains(&moisture) {
        return Err(GenerationError::RangeError {
            name: "moisture",
            min: 1,
            max: MAX_MOISTURE,
            value: moisture,
        });
    }
    Ok(WHITTAKER[usize::from(elevation - 1)][usize::from(moisture - 1)])
}

/// Переписывает каждую заготовку суши в её биом. Остальные тайлы не трогаются,
/// поэтому повторный вызов ничего не меняет. Возвращает число переписанных тайлов.
pub fn assign_biomes(grid: &mut Grid) -> Result<usize> {
    let mut assigned = 0;
    for tile in &mut grid.tiles {
        if let Tile::Placeholder {
            elevation,
            moisture,
        } = *tile
        {
            *tile = Tile::Biome {
                biome: classify(elevation, moisture)?,
                elevation,
                moisture,
            };
            assigned += 1;
        }
    }
    Ok(assigned)
}
