use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::direction::CARDINAL;
use crate::grid::Grid;
use crate::rng::SeededRng;
use crate::tile::{Tile, TileKind};

/// Проложенная река: индексы тайлов от истока до точки остановки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiverPath {
    /// Исток, выбранный около центра карты
    pub source: (usize, usize),
    /// Точка на краю карты, к которой прокладывался маршрут
    pub target: (usize, usize),
    pub tiles: Vec<usize>,
}

impl RiverPath {
    pub fn first(&self) -> Option<usize> {
        self.tiles.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.tiles.last().copied()
    }
}

/// Стоимость прохода по каждому тайлу.
///
/// Типы из `ignore_scale` считаются без множителя сложности, типы из `blockers`
/// непроходимы (`None`).
pub fn cost_grid(grid: &Grid, ignore_scale: &[TileKind], blockers: &[TileKind]) -> Vec<Option<u32>> {
    grid.tiles
        .iter()
        .map(|tile| {
            let kind = tile.kind();
            if blockers.contains(&kind) {
                None
            } else {
                Some(tile.path_cost(ignore_scale.contains(&kind)))
            }
        })
        .collect()
}

/// Граф по четырём соседям: узел `i` соответствует тайлу `i`, вес ребра равен стоимости входа в тайл
fn build_graph(grid: &Grid, costs: &[Option<u32>]) -> DiGraph<usize, u32> {
    let total = grid.tiles.len();
    let mut graph = DiGraph::with_capacity(total, total * 4);
    for idx in 0..total {
        graph.add_node(idx);
    }

    for idx in 0..total {
        if costs[idx].is_none() {
            continue;
        }
        let (x, y) = grid.coords(idx);
        for &dir in &CARDINAL {
            let Some((nx, ny)) = grid.step(x, y, dir) else {
                continue;
            };
            let nidx = grid.index(nx, ny);
            if let Some(cost) = costs[nidx] {
                graph.add_edge(NodeIndex::new(idx), NodeIndex::new(nidx), cost);
            }
        }
    }
    graph
}

/// A* от `start` до `goal` по сетке стоимостей. Эвристика: манхэттенское расстояние
/// (допустима: минимальная стоимость тайла равна 1). Путь включает обе конечные точки.
pub fn find_path(grid: &Grid, costs: &[Option<u32>], start: usize, goal: usize) -> Option<Vec<usize>> {
    let graph = build_graph(grid, costs);
    let (gx, gy) = grid.coords(goal);

    let (_, nodes) = astar(
        &graph,
        NodeIndex::new(start),
        |node| node.index() == goal,
        |edge| *edge.weight(),
        |node| {
            let (x, y) = grid.coords(node.index());
            (x.abs_diff(gx) + y.abs_diff(gy)) as u32
        },
    )?;

    Some(nodes.into_iter().map(NodeIndex::index).collect())
}

/// Исток: `floor(w/2 - r * floor(w/4))`, аналогично по Y: внутренняя четверть у центра
fn pick_source(grid: &Grid, rng: &mut SeededRng) -> (usize, usize) {
    let half_w = grid.width as f64 / 2.0;
    let half_h = grid.height as f64 / 2.0;
    let spread_x = (grid.width / 4) as f64;
    let spread_y = (grid.height / 4) as f64;

    let x = (half_w - rng.next_f64() * spread_x).floor().max(0.0) as usize;
    let y = (half_h - rng.next_f64() * spread_y).floor().max(0.0) as usize;
    (x.min(grid.width - 1), y.min(grid.height - 1))
}

/// Цель на краю карты: четыре кандидата (запад, север, восток, юг), затем выбор одного
fn pick_target(grid: &Grid, rng: &mut SeededRng) -> (usize, usize) {
    let (w, h) = (grid.width, grid.height);
    let candidates = [
        (0, rng.below(h)),
        (rng.below(w), 0),
        (w - 1, rng.below(h)),
        (rng.below(w), h - 1),
    ];
    candidates[rng.below(candidates.len())]
}

/// Прокладывает одну реку и превращает её тайлы в пресную воду.
///
/// Движение по маршруту останавливается перед морем, у моря (четыре соседа) или когда
/// рядом больше одного тайла пресной воды, так реки реже сливаются.
pub fn carve_river(grid: &mut Grid, rng: &mut SeededRng) -> RiverPath {
    let source = pick_source(grid, rng);
    let target = pick_target(grid, rng);

    let costs = cost_grid(grid, &[TileKind::FreshWater], &[]);
    let route = find_path(
        grid,
        &costs,
        grid.index(source.0, source.1),
        grid.index(target.0, target.1),
    )
    .unwrap_or_default();

    let mut tiles = Vec::new();
    for idx in route {
        if grid.tiles[idx].is(TileKind::Sea) {
            break;
        }

        grid.tiles[idx] = Tile::FreshWater;
        tiles.push(idx);

        let (x, y) = grid.coords(idx);
        if grid.count_neighbours(x, y, Some(TileKind::Sea), false) > 0 {
            break;
        }
        if grid.count_neighbours(x, y, Some(TileKind::FreshWater), false) > 1 {
            break;
        }
    }

    tracing::debug!(
        target: "mapgen::rivers",
        source = ?source,
        target_point = ?target,
        length = tiles.len(),
        "mapgen.rivers.carved"
    );

    RiverPath {
        source,
        target,
        tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Остров: море по краю, суша внутри
    fn island(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        for x in 0..width {
            for y in 0..height {
                let tile = if grid.is_border(x, y) {
                    Tile::Sea
                } else {
                    Tile::placeholder()
                };
                grid.set(x, y, tile);
            }
        }
        grid
    }

    #[test]
    fn cost_grid_applies_scale_and_blockers() {
        let mut grid = Grid::new(3, 1);
        grid.tiles = vec![Tile::Sea, Tile::FreshWater, Tile::Beach];

        let costs = cost_grid(&grid, &[TileKind::FreshWater], &[TileKind::Beach]);
        assert_eq!(costs, vec![Some(50), Some(1), None]);
    }

    #[test]
    fn astar_goes_around_expensive_tiles() {
        // стена дорогой воды посередине с проходом внизу
        let mut grid = Grid::new(5, 5);
        for x in 0..5 {
            for y in 0..5 {
                grid.set(x, y, Tile::placeholder());
            }
        }
        for y in 0..4 {
            grid.set(2, y, Tile::Sea);
        }
        let costs = cost_grid(&grid, &[], &[]);
        let path = find_path(&grid, &costs, grid.index(0, 0), grid.index(4, 0)).unwrap();

        assert_eq!(path.first(), Some(&grid.index(0, 0)));
        assert_eq!(path.last(), Some(&grid.index(4, 0)));
        assert!(path.contains(&grid.index(2, 4)));
        for pair in path.windows(2) {
            let (ax, ay) = grid.coords(pair[0]);
            let (bx, by) = grid.coords(pair[1]);
            assert_eq!(ax.abs_diff(bx) + ay.abs_diff(by), 1);
        }
    }

    #[test]
    fn blockers_can_make_goal_unreachable() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            grid.set(1, y, Tile::Beach);
        }
        let costs = cost_grid(&grid, &[], &[TileKind::Beach]);
        assert_eq!(find_path(&grid, &costs, grid.index(0, 0), grid.index(2, 2)), None);
    }

    #[test]
    fn river_is_connected_fresh_water() {
        let mut grid = island(30, 30);
        let mut rng = SeededRng::new(Some("river")).unwrap();
        let river = carve_river(&mut grid, &mut rng);

        assert!(!river.tiles.is_empty());
        assert_eq!(
            river.first(),
            Some(grid.index(river.source.0, river.source.1))
        );
        for &idx in &river.tiles {
            assert!(grid.tiles[idx].is(TileKind::FreshWater));
        }
        for pair in river.tiles.windows(2) {
            let (ax, ay) = grid.coords(pair[0]);
            let (bx, by) = grid.coords(pair[1]);
            assert_eq!(ax.abs_diff(bx) + ay.abs_diff(by), 1);
        }

        // река остановилась у моря
        let (lx, ly) = grid.coords(river.last().unwrap());
        assert!(grid.count_neighbours(lx, ly, Some(TileKind::Sea), false) > 0);
    }

    #[test]
    fn source_is_near_the_centre_and_target_on_an_edge() {
        let grid = island(40, 20);
        let mut rng = SeededRng::new(Some("edges")).unwrap();
        for _ in 0..50 {
            let (sx, sy) = pick_source(&grid, &mut rng);
            assert!((10..=20).contains(&sx), "sx = {sx}");
            assert!((5..=10).contains(&sy), "sy = {sy}");

            let (tx, ty) = pick_target(&grid, &mut rng);
            assert!(tx == 0 || ty == 0 || tx == 39 || ty == 19);
        }
    }

    #[test]
    fn river_stops_when_meeting_fresh_water() {
        // кольцо пресной воды шириной в две клетки отделяет центр от моря
        for seed in ["merge", "lake", "ring", "delta", "fork", "join", "bend", "oxbow"] {
            let mut grid = island(31, 31);
            for x in 3..=27 {
                for y in 3..=27 {
                    let ring = x <= 4 || x >= 26 || y <= 4 || y >= 26;
                    if ring {
                        grid.set(x, y, Tile::FreshWater);
                    }
                }
            }
            let mut rng = SeededRng::new(Some(seed)).unwrap();
            let river = carve_river(&mut grid, &mut rng);

            let (lx, ly) = grid.coords(river.last().unwrap());
            assert!(
                grid.count_neighbours(lx, ly, Some(TileKind::FreshWater), false) >= 2,
                "seed {seed}: ({lx}, {ly})"
            );
            assert_eq!(
                grid.count_neighbours(lx, ly, Some(TileKind::Sea), false),
                0,
                "seed {seed}: ({lx}, {ly})"
            );
        }
    }

    #[test]
    fn river_from_sea_carves_nothing() {
        let mut grid = Grid::new(12, 12);
        for x in 0..12 {
            for y in 0..12 {
                grid.set(x, y, Tile::Sea);
            }
        }
        let before = grid.clone();
        let mut rng = SeededRng::new(Some("sea")).unwrap();
        let river = carve_river(&mut grid, &mut rng);

        assert!(river.tiles.is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn carving_is_deterministic() {
        let carve = || {
            let mut grid = island(25, 25);
            let mut rng = SeededRng::new(Some("same")).unwrap();
            let river = carve_river(&mut grid, &mut rng);
            (grid, river)
        };
        assert_eq!(carve(), carve());
    }
}
