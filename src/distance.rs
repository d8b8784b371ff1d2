//! Поиск ближайшего тайла заданного типа расширяющимися кольцами
//!
//! Квадрат вокруг точки расширяется на клетку в каждую сторону, пока на его границе
//! (кольцо Чебышёва) не найдётся хотя бы один тайл нужного типа.

use crate::error::{GenerationError, Result};
use crate::grid::Grid;
use crate::tile::TileKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub x: usize,
    pub y: usize,
    /// Евклидово расстояние до исходной точки
    pub distance: f64,
}

/// Все тайлы типа `kind` на первом непустом кольце вокруг `(x, y)`, от ближнего к дальнему.
///
/// # Ошибки
/// `EmptySearch`, если кольца вышли за пределы сетки, а тайл так и не найден.
pub fn find_nearest(grid: &Grid, x: usize, y: usize, kind: TileKind) -> Result<Vec<Nearest>> {
    let (cx, cy) = (x as i64, y as i64);
    let (w, h) = (grid.width as i64, grid.height as i64);
    let mut radius = 0i64;

    loop {
        radius += 1;
        let (x0, y0, x1, y1) = (cx - radius, cy - radius, cx + radius, cy + radius);
        if x0 < 0 && y0 < 0 && x1 >= w && y1 >= h {
            return Err(GenerationError::EmptySearch { kind, x, y });
        }

        let mut found: Vec<Nearest> = ring(x0, y0, x1, y1)
            .filter(|&(nx, ny)| grid.contains(nx, ny))
            .filter(|&(nx, ny)| grid.get(nx as usize, ny as usize).is(kind))
            .map(|(nx, ny)| Nearest {
                x: nx as usize,
                y: ny as usize,
                distance: ((nx - cx) as f64).hypot((ny - cy) as f64),
            })
            .collect();

        if !found.is_empty() {
            found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
            return Ok(found);
        }
    }
}

/// Расстояние до ближайшего тайла типа `kind`; `None`, если таких тайлов нет
#[must_use]
pub fn nearest_distance(grid: &Grid, x: usize, y: usize, kind: TileKind) -> Option<f64> {
    find_nearest(grid, x, y, kind)
        .ok()
        .and_then(|found| found.first().map(|n| n.distance))
}

/// Клетки на границе прямоугольника `[x0, x1] × [y0, y1]`, по столбцам
fn ring(x0: i64, y0: i64, x1: i64, y1: i64) -> impl Iterator<Item = (i64, i64)> {
    (x0..=x1).flat_map(move |nx| {
        let edge = nx == x0 || nx == x1;
        let ys: Box<dyn Iterator<Item = i64>> = if edge {
            Box::new(y0..=y1)
        } else {
            Box::new([y0, y1].into_iter())
        };
        ys.map(move |ny| (nx, ny))
    })
}
