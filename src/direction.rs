//! Направления сетки
//!
//! Восемь единичных векторов (4 основных и 4 диагональных). Экранная система координат:
//! север соответствует `y - 1`, восток `x + 1`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    West,
    South,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Основные направления в порядке обхода: север, запад, юг, восток
pub const CARDINAL: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

/// Диагональные направления
pub const DIAGONAL: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

/// Все восемь направлений: сначала основные, затем диагональные
pub const ALL: [Direction; 8] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

impl Direction {
    /// Человекочитаемая метка направления
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::West => "west",
            Direction::South => "south",
            Direction::East => "east",
            Direction::NorthWest => "north west",
            Direction::NorthEast => "north east",
            Direction::SouthWest => "south west",
            Direction::SouthEast => "south east",
        }
    }

    /// Смещение `(dx, dy)` единичного шага
    #[must_use]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthWest => (-1, 1),
            Direction::SouthEast => (1, 1),
        }
    }

    #[must_use]
    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    /// Противоположное направление (смещение с обратным знаком)
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// Основные направления на перпендикулярной оси.
    ///
    /// Для диагоналей перпендикулярной оси нет, возвращается пустой срез.
    #[must_use]
    pub fn perpendicular(self) -> &'static [Direction] {
        match self {
            Direction::North | Direction::South => &[Direction::West, Direction::East],
            Direction::West | Direction::East => &[Direction::North, Direction::South],
            _ => &[],
        }
    }
}
