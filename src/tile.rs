//! Типы тайлов
//!
//! Закрытое перечисление вместо иерархии классов: каждый вариант знает свой цвет,
//! базовый множитель сложности прохода и производную стоимость пути.

use serde::{Deserialize, Serialize};

use crate::biome::Biome;

/// Тип тайла без данных, используется для поиска соседей и сравнения "тот же тип"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Void,
    Placeholder,
    Sea,
    FreshWater,
    Beach,
    Biome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum Tile {
    /// Неклассифицированный тайл, состояние сетки по умолчанию
    #[default]
    Void,
    /// Суша без назначенного биома; хранит рабочие высоту и влажность
    Placeholder { elevation: u8, moisture: u8 },
    Sea,
    FreshWater,
    Beach,
    Biome {
        biome: Biome,
        elevation: u8,
        moisture: u8,
    },
}

impl Tile {
    /// Новая "заготовка" суши с высотой и влажностью по умолчанию (1 и 1)
    #[must_use]
    pub fn placeholder() -> Self {
        Tile::Placeholder {
            elevation: 1,
            moisture: 1,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Void => TileKind::Void,
            Tile::Placeholder { .. } => TileKind::Placeholder,
            Tile::Sea => TileKind::Sea,
            Tile::FreshWater => TileKind::FreshWater,
            Tile::Beach => TileKind::Beach,
            Tile::Biome { .. } => TileKind::Biome,
        }
    }

    #[must_use]
    pub fn is(&self, kind: TileKind) -> bool {
        self.kind() == kind
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Tile::Void => "Void",
            Tile::Placeholder { .. } => "Placeholder",
            Tile::Sea => "Sea",
            Tile::FreshWater => "Fresh Water",
            Tile::Beach => "Beach",
            Tile::Biome { biome, .. } => biome.name(),
        }
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        match self {
            Tile::Void | Tile::Placeholder { .. } => [0x00, 0x00, 0x00],
            Tile::Sea => [0x36, 0x36, 0x61],
            Tile::FreshWater => [0x55, 0x7D, 0xA5],
            Tile::Beach => [0xFF, 0xED, 0xAF],
            Tile::Biome { biome, .. } => biome.to_rgb(),
        }
    }

    /// Цвет в формате "#RRGGBB"
    #[must_use]
    pub fn hex_color(&self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Базовый множитель сложности прохода
    #[must_use]
    pub fn path_scale(&self) -> u32 {
        match self {
            Tile::Sea => 50,
            Tile::FreshWater => 10,
            Tile::Beach => 2,
            Tile::Biome { biome, .. } => biome.path_scale(),
            Tile::Void | Tile::Placeholder { .. } => 1,
        }
    }

    /// Высота тайла. Варианты без собственной высоты считаются равнинными (1).
    #[must_use]
    pub fn elevation(&self) -> u8 {
        match self {
            Tile::Placeholder { elevation, .. } | Tile::Biome { elevation, .. } => *elevation,
            _ => 1,
        }
    }

    #[must_use]
    pub fn moisture(&self) -> u8 {
        match self {
            Tile::Placeholder { moisture, .. } | Tile::Biome { moisture, .. } => *moisture,
            _ => 1,
        }
    }

    /// Стоимость прохода: высота × множитель (множитель можно игнорировать)
    #[must_use]
    pub fn path_cost(&self, ignore_scale: bool) -> u32 {
        let scale = if ignore_scale { 1 } else { self.path_scale() };
        u32::from(self.elevation()) * scale
    }
}
