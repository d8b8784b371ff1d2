use serde::{Deserialize, Serialize};

use crate::direction::{ALL, CARDINAL, Direction};
use crate::error::{GenerationError, Result};
use crate::tile::{Tile, TileKind};

/// Плоское хранилище тайлов фиксированного размера.
///
/// Основная ось X: `index(x, y) = height * x + y`. Сетка хранится по столбцам,
/// а не построчно; все вычисления соседей и расстояний опираются на эту раскладку.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Void; width * height],
        }
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        self.height * x + y
    }

    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.height, index % self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        let idx = self.index(x, y);
        self.tiles[idx] = tile;
    }

    /// Лежит ли точка (возможно, с отрицательными координатами) внутри сетки
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    /// Сдвигает точку на одну клетку в направлении `dir`, если результат внутри сетки
    pub fn step(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.offset();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        self.contains(nx, ny).then_some((nx as usize, ny as usize))
    }

    /// Соседи клетки заданного типа.
    ///
    /// `kind = None` означает тот же тип, что и у самой клетки. `diagonal` добавляет
    /// диагональных соседей к четырём основным. Порядок: С, З, Ю, В, затем СЗ, СВ, ЮЗ, ЮВ.
    pub fn neighbours(
        &self,
        x: usize,
        y: usize,
        kind: Option<TileKind>,
        diagonal: bool,
    ) -> Vec<(usize, usize)> {
        let kind = kind.unwrap_or_else(|| self.get(x, y).kind());
        let directions: &[Direction] = if diagonal { &ALL } else { &CARDINAL };

        directions
            .iter()
            .filter_map(|&dir| self.step(x, y, dir))
            .filter(|&(nx, ny)| self.get(nx, ny).is(kind))
            .collect()
    }

    pub fn count_neighbours(
        &self,
        x: usize,
        y: usize,
        kind: Option<TileKind>,
        diagonal: bool,
    ) -> usize {
        self.neighbours(x, y, kind, diagonal).len()
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.is(kind)).count()
    }

    /// Индексы всех тайлов заданного типа в порядке хранения
    pub fn indices_of(&self, kind: TileKind) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is(kind))
            .map(|(i, _)| i)
            .collect()
    }

    /// Построчное представление (`rows[y][x]`) для рендеринга и экспорта
    pub fn to_scanline(&self) -> Vec<Vec<Tile>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| *self.get(x, y)).collect())
            .collect()
    }

    /// Обратное преобразование из построчного представления.
    ///
    /// Все строки должны быть одинаковой длины.
    pub fn from_scanline(rows: &[Vec<Tile>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GenerationError::invalid("scanline grid must not be empty"));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(GenerationError::invalid(
                "scanline rows must all have the same length",
            ));
        }

        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                grid.set(x, y, tile);
            }
        }
        Ok(grid)
    }
}
