use crate::error::Result;
use crate::grid::Grid;
use crate::rng::SeededRng;
use crate::stepper::{StepControl, Stepper};
use crate::tile::Tile;

/// Длина серии шагов в одном направлении, после которой штампуется площадка
const FILL_RUN_LENGTH: usize = 3;
/// Полуразмер квадратной площадки (5×5)
const FILL_RADIUS: i64 = 2;

/// Генератор суши на основе случайного блуждания.
///
/// Каждый шаг превращает текущий тайл в `Placeholder`; после трёх шагов подряд в одном
/// направлении дополнительно штампует площадку 5×5 без угловых клеток.
#[derive(Debug, Clone)]
pub struct LandmassGenerator {
    /// Порядковый номер генератора; только для логов, отдельного потока случайных чисел нет
    pub index: usize,
    stepper: Stepper,
}

impl LandmassGenerator {
    #[must_use]
    pub fn new(grid: &Grid, index: usize) -> Self {
        Self {
            index,
            stepper: Stepper::new(grid.width, grid.height),
        }
    }

    #[must_use]
    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn stepper_mut(&mut self) -> &mut Stepper {
        &mut self.stepper
    }

    /// Делает `steps` шагов по общей сетке, расходуя общий генератор случайных чисел
    pub fn generate(&mut self, grid: &mut Grid, rng: &mut SeededRng, steps: usize) -> Result<()> {
        let mut fills = 0usize;
        self.stepper.run(rng, steps, |info| {
            if info.run_length == FILL_RUN_LENGTH {
                fill_area(grid, info.x, info.y);
                fills += 1;
            }
            grid.tiles[info.index] = Tile::placeholder();
            StepControl::Continue
        })?;

        tracing::debug!(
            target: "mapgen::landmass",
            stepper = self.index,
            steps,
            fills,
            "mapgen.landmass.stepper_done"
        );
        Ok(())
    }
}

/// Штампует площадку 5×5 вокруг `(x, y)`, пропуская четыре угла; обрезается по границам сетки
pub fn fill_area(grid: &mut Grid, x: usize, y: usize) {
    for dx in -FILL_RADIUS..=FILL_RADIUS {
        for dy in -FILL_RADIUS..=FILL_RADIUS {
            // углы не трогаем, чтобы скруглить площадку
            if dx.abs() == FILL_RADIUS && dy.abs() == FILL_RADIUS {
                continue;
            }

            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if grid.contains(nx, ny) {
                grid.set(nx as usize, ny as usize, Tile::placeholder());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileKind;

    #[test]
    fn fill_area_skips_corners() {
        let mut grid = Grid::new(9, 9);
        fill_area(&mut grid, 4, 4);

        assert_eq!(grid.count(TileKind::Placeholder), 21);
        for (cx, cy) in [(2, 2), (6, 2), (2, 6), (6, 6)] {
            assert!(grid.get(cx, cy).is(TileKind::Void));
        }
        assert!(grid.get(2, 4).is(TileKind::Placeholder));
        assert!(grid.get(4, 6).is(TileKind::Placeholder));
        assert!(grid.get(1, 4).is(TileKind::Void));
    }

    #[test]
    fn fill_area_clips_at_edges() {
        let mut grid = Grid::new(4, 4);
        fill_area(&mut grid, 0, 0);
        // 3×3 квадрат в углу без угла (2, 2)
        assert_eq!(grid.count(TileKind::Placeholder), 8);
        assert!(grid.get(2, 2).is(TileKind::Void));
    }

    #[test]
    fn every_visited_tile_becomes_land() {
        let mut grid = Grid::new(40, 40);
        let mut rng = SeededRng::new(Some("landmass")).unwrap();
        let mut generator = LandmassGenerator::new(&grid, 0);
        generator.generate(&mut grid, &mut rng, 120).unwrap();

        for record in generator.stepper().history() {
            assert!(grid.tiles[record.index].is(TileKind::Placeholder));
        }
        assert!(grid.count(TileKind::Placeholder) >= 2);
    }

    #[test]
    fn generation_is_reproducible() {
        let run = || {
            let mut grid = Grid::new(30, 30);
            let mut rng = SeededRng::new(Some("repeat")).unwrap();
            for i in 0..3 {
                LandmassGenerator::new(&grid, i)
                    .generate(&mut grid, &mut rng, 60)
                    .unwrap();
            }
            grid
        };
        assert_eq!(run(), run());
    }
}
