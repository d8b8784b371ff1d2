use crate::grid::Grid;
use crate::tile::{Tile, TileKind};

/// Максимальная влажность низменности, которая может стать пляжем
const BEACH_MAX_MOISTURE: u8 = 2;

/// Низкие (высота 1) и сухие (влажность ≤ 2) заготовки суши, у которых среди восьми
/// соседей есть море, становятся пляжем. Возвращает число пляжных тайлов.
pub fn generate_beaches(grid: &mut Grid) -> usize {
    let mut beaches = 0;
    for idx in 0..grid.tiles.len() {
        let Tile::Placeholder {
            elevation,
            moisture,
        } = grid.tiles[idx]
        else {
            continue;
        };
        if elevation != 1 || moisture > BEACH_MAX_MOISTURE {
            continue;
        }

        let (x, y) = grid.coords(idx);
        if grid.count_neighbours(x, y, Some(TileKind::Sea), true) > 0 {
            grid.tiles[idx] = Tile::Beach;
            beaches += 1;
        }
    }

    tracing::debug!(target: "mapgen::beach", beaches, "mapgen.beach.done");
    beaches
}
