//! Чистка артефактов случайного блуждания
//!
//! Два прохода: удаление "хвостов" (тонких следов блуждания) и рекурсивная чистка
//! одиночных клеток. Рекурсия развёрнута в явный рабочий список.

use std::collections::HashSet;

use crate::grid::Grid;
use crate::tile::{Tile, TileKind};

/// Заготовка суши с таким числом соседей-суши (из восьми) или меньше считается хвостом
const STRAGGLER_MAX_NEIGHBOURS: usize = 2;

/// Заготовки суши с ≤2 соседями-сушей (по восьми направлениям) возвращаются в `Void`.
///
/// Проход идёт по месту в порядке индексов: удалённая клетка уже не считается соседом.
pub fn remove_stragglers(grid: &mut Grid) -> usize {
    let mut removed = 0;
    for idx in 0..grid.tiles.len() {
        if !grid.tiles[idx].is(TileKind::Placeholder) {
            continue;
        }
        let (x, y) = grid.coords(idx);
        if grid.count_neighbours(x, y, Some(TileKind::Placeholder), true) <= STRAGGLER_MAX_NEIGHBOURS
        {
            grid.tiles[idx] = Tile::Void;
            removed += 1;
        }
    }
    removed
}

/// Чистит клетку `start` и распространяет чистку на соседей.
///
/// Клетки на краю сетки всегда становятся `Void`. Внутренняя клетка, у которой не больше
/// одного соседа того же типа (по четырём направлениям), меняет тип: `Void` и пресная вода
/// заполняются сушей, всё остальное становится `Void`; затем проверяется этот сосед.
/// Индексы из `skip` не меняются. Возвращает число изменённых клеток.
pub fn clean_tile(grid: &mut Grid, start: usize, skip: &HashSet<usize>) -> usize {
    // каждая смена типа уменьшает число одиночных клеток; ограничитель страхует от циклов
    let mut budget = grid.tiles.len() * 4;
    let mut changed = 0;
    let mut worklist = vec![start];

    while let Some(idx) = worklist.pop() {
        if skip.contains(&idx) {
            continue;
        }
        if budget == 0 {
            tracing::warn!(target: "mapgen::cleanup", start, "mapgen.cleanup.budget_exhausted");
            break;
        }
        budget -= 1;

        let (x, y) = grid.coords(idx);
        if grid.is_border(x, y) {
            if !grid.tiles[idx].is(TileKind::Void) {
                grid.tiles[idx] = Tile::Void;
                changed += 1;
            }
            continue;
        }

        let same = grid.neighbours(x, y, None, false);
        if same.len() > 1 {
            continue;
        }

        grid.tiles[idx] = match grid.tiles[idx].kind() {
            TileKind::Void | TileKind::FreshWater => Tile::placeholder(),
            _ => Tile::Void,
        };
        changed += 1;

        worklist.extend(same.into_iter().map(|(nx, ny)| grid.index(nx, ny)));
    }

    changed
}

/// Полный проход по всей сетке: сначала хвосты, затем чистка каждой клетки по порядку
pub fn post_process(grid: &mut Grid) -> usize {
    let stragglers = remove_stragglers(grid);
    let skip = HashSet::new();
    let cleaned: usize = (0..grid.tiles.len())
        .map(|idx| clean_tile(grid, idx, &skip))
        .sum();

    tracing::debug!(
        target: "mapgen::cleanup",
        stragglers,
        cleaned,
        "mapgen.cleanup.full_pass"
    );
    stragglers + cleaned
}

/// Чистка вдоль пути (например, реки); первая и последняя клетки пути не трогаются
pub fn post_process_path(grid: &mut Grid, path: &[usize]) -> usize {
    let skip: HashSet<usize> = path.first().into_iter().chain(path.last()).copied().collect();
    let cleaned: usize = path.iter().map(|&idx| clean_tile(grid, idx, &skip)).sum();

    tracing::debug!(
        target: "mapgen::cleanup",
        path_len = path.len(),
        cleaned,
        "mapgen.cleanup.path_pass"
    );
    cleaned
}
