use crate::direction::CARDINAL;
use crate::grid::Grid;
use crate::tile::{Tile, TileKind};

/// Заливка: превращает `Void`-клетку `start` и все `Void`-клетки, достижимые через
/// четырёх соседей, в `target`. Возвращает число залитых клеток.
///
/// Обход в глубину на явном стеке: глубина рекурсии не зависит от размера сетки.
/// Если стартовая клетка не `Void`, ничего не происходит.
#[must_use]
pub fn flood_fill(grid: &mut Grid, start: usize, target: Tile) -> usize {
    if start >= grid.tiles.len() || !grid.tiles[start].is(TileKind::Void) {
        return 0;
    }

    let mut visited = vec![false; grid.tiles.len()];
    let mut stack = vec![start];
    visited[start] = true;
    let mut filled = 0;

    while let Some(idx) = stack.pop() {
        grid.tiles[idx] = target;
        filled += 1;

        let (x, y) = grid.coords(idx);
        // обратный порядок, чтобы первым снимался северный сосед
        for &dir in CARDINAL.iter().rev() {
            let Some((nx, ny)) = grid.step(x, y, dir) else {
                continue;
            };
            let nidx = grid.index(nx, ny);
            if !visited[nidx] && grid.tiles[nidx].is(TileKind::Void) {
                visited[nidx] = true;
                stack.push(nidx);
            }
        }
    }

    filled
}

/// Все оставшиеся `Void` становятся пресной водой (озёра, отрезанные от моря)
pub fn fill_remaining_void(grid: &mut Grid) -> usize {
    let mut lakes = 0;
    for tile in grid.tiles.iter_mut().filter(|t| t.is(TileKind::Void)) {
        *tile = Tile::FreshWater;
        lakes += 1;
    }
    lakes
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Кольцо суши вокруг внутренней полости 3×3
    fn ring_grid() -> Grid {
        let mut grid = Grid::new(9, 9);
        for x in 2..=6 {
            for y in 2..=6 {
                if x == 2 || x == 6 || y == 2 || y == 6 {
                    grid.set(x, y, Tile::placeholder());
                }
            }
        }
        grid
    }

    #[test]
    fn fills_only_reachable_void() {
        let mut grid = ring_grid();
        let start = grid.index(0, 0);
        let filled = flood_fill(&mut grid, start, Tile::Sea);

        assert_eq!(filled, 81 - 16 - 9);
        assert_eq!(grid.count(TileKind::Sea), filled);
        // полость внутри кольца не достижима
        assert!(grid.get(4, 4).is(TileKind::Void));
        assert_eq!(grid.count(TileKind::Void), 9);
        assert_eq!(grid.count(TileKind::Placeholder), 16);
    }

    #[test]
    fn non_void_start_is_a_no_op() {
        let mut grid = ring_grid();
        let start = grid.index(2, 2);
        assert_eq!(flood_fill(&mut grid, start, Tile::Sea), 0);
        assert_eq!(grid.count(TileKind::Sea), 0);
    }

    #[test]
    fn diagonal_gaps_do_not_leak() {
        // диагональная стена: заливка по 4 соседям не проходит через угол
        let mut grid = Grid::new(4, 4);
        for i in 0..4 {
            grid.set(i, 3 - i, Tile::placeholder());
        }
        let start = grid.index(0, 0);
        let filled = flood_fill(&mut grid, start, Tile::Sea);
        assert_eq!(filled, 6);
        assert!(grid.get(3, 3).is(TileKind::Void));
    }

    #[test]
    fn large_grid_does_not_overflow() {
        let mut grid = Grid::new(1_000, 1_000);
        let filled = flood_fill(&mut grid, 0, Tile::Sea);
        assert_eq!(filled, 1_000_000);
    }

    #[test]
    fn remaining_void_becomes_fresh_water() {
        let mut grid = ring_grid();
        let start = grid.index(0, 0);
        let _ = flood_fill(&mut grid, start, Tile::Sea);
        assert_eq!(fill_remaining_void(&mut grid), 9);
        assert!(grid.get(4, 4).is(TileKind::FreshWater));
        assert_eq!(grid.count(TileKind::Void), 0);
    }
}
