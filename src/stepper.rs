//! Случайное блуждание по сетке
//!
//! Курсор стартует из центра (или заданной точки), на каждом шаге с вероятностью 50%
//! меняет направление и сдвигается на одну клетку. На границе сетки шаг отражается,
//! поэтому курсор никогда не покидает внутреннюю область. Для каждого шага вызывается
//! колбэк, который может досрочно остановить блуждание.

use crate::direction::{CARDINAL, Direction};
use crate::error::{GenerationError, Result};
use crate::rng::SeededRng;

/// Ответ колбэка шага
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
    Continue,
    Stop,
}

/// Состояние курсора после очередного шага
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub x: usize,
    pub y: usize,
    pub index: usize,
    pub direction: Direction,
    /// Сколько шагов подряд сделано в текущем направлении (сбрасывается в 1 при смене)
    pub run_length: usize,
    /// Номер шага, начиная с 1
    pub step: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub x: usize,
    pub y: usize,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct Stepper {
    width: usize,
    height: usize,
    start: Option<(usize, usize)>,
    blocked: Vec<Direction>,
    priority: Option<(Direction, f64)>,
    history: Vec<StepRecord>,
}

impl Stepper {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start: None,
            blocked: Vec::new(),
            priority: None,
            history: Vec::new(),
        }
    }

    /// Задаёт стартовую точку вместо центра сетки
    pub fn set_start_location(&mut self, x: usize, y: usize) {
        self.start = Some((x, y));
    }

    /// Стартовая точка. После запуска всегда `Some`.
    #[must_use]
    pub fn start_location(&self) -> Option<(usize, usize)> {
        self.start
    }

    /// Исключает направление из случайного выбора
    pub fn block_direction(&mut self, direction: Direction) {
        if !self.blocked.contains(&direction) {
            self.blocked.push(direction);
        }
    }

    /// Делает направление приоритетным: оно выбирается, если `floor(r * 100) <= percent`.
    ///
    /// # Ошибки
    /// `InvalidArgument`, если `percent` отрицательный.
    pub fn set_priority_direction(&mut self, direction: Direction, percent: f64) -> Result<()> {
        if percent < 0.0 || percent.is_nan() {
            return Err(GenerationError::invalid(format!(
                "priority percent cannot be less than 0, {percent} given"
            )));
        }
        self.priority = Some((direction, percent));
        Ok(())
    }

    /// Полная история шагов последнего запуска
    #[must_use]
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    fn allowed_directions(&self) -> Vec<Direction> {
        let priority = self.priority.map(|(dir, _)| dir);
        CARDINAL
            .iter()
            .copied()
            .filter(|dir| !self.blocked.contains(dir) && Some(*dir) != priority)
            .collect()
    }

    fn random_direction(&self, rng: &mut SeededRng, current: Option<Direction>) -> Direction {
        let allowed = self.allowed_directions();

        if let Some((dir, percent)) = self.priority {
            let chance = (rng.next_f64() * 100.0).floor();
            if chance <= percent {
                return dir;
            }
            if allowed.is_empty() {
                return current.unwrap_or(dir);
            }
        }

        // пустой набор без приоритета отсекается в `run`
        allowed[rng.below(allowed.len())]
    }

    /// Делает ровно `steps` шагов, если колбэк не вернул `StepControl::Stop` раньше.
    ///
    /// # Ошибки
    /// `InvalidArgument`, если стартовая точка вне сетки или все направления заблокированы.
    pub fn run<F>(&mut self, rng: &mut SeededRng, steps: usize, mut on_step: F) -> Result<()>
    where
        F: FnMut(&StepInfo) -> StepControl,
    {
        if self.width == 0 || self.height == 0 {
            return Err(GenerationError::invalid("stepper grid must not be empty"));
        }
        let (mut x, mut y) = self.start.unwrap_or((self.width / 2, self.height / 2));
        if x >= self.width || y >= self.height {
            return Err(GenerationError::invalid(format!(
                "start location ({x}, {y}) is outside the {}x{} grid",
                self.width, self.height
            )));
        }
        if self.priority.is_none() && self.allowed_directions().is_empty() {
            return Err(GenerationError::invalid("all stepper directions are blocked"));
        }
        self.start = Some((x, y));
        self.history.clear();

        let max_x = self.width as i64 - 1;
        let max_y = self.height as i64 - 1;

        let mut direction = self.random_direction(rng, None);
        let mut last_direction: Option<Direction> = None;
        let mut run_length = 0;

        for step in 1..=steps {
            // 50% шанс сменить направление
            if rng.next_f64() < 0.5 {
                direction = self.random_direction(rng, Some(direction));
            }

            let (dx, dy) = direction.offset();
            let mut nx = x as i64 + dx;
            let mut ny = y as i64 + dy;

            // На границе отменяем смещение и делаем шаг в обратную сторону
            if nx <= 0 || nx >= max_x {
                nx -= dx * 2;
            }
            if ny <= 0 || ny >= max_y {
                ny -= dy * 2;
            }
            // для сеток шириной 1–2 клетки отражение может вывести за край
            x = nx.clamp(0, max_x) as usize;
            y = ny.clamp(0, max_y) as usize;

            if last_direction != Some(direction) {
                run_length = 0;
                last_direction = Some(direction);
            }
            run_length += 1;

            let index = self.height * x + y;
            self.history.push(StepRecord { x, y, index });

            let info = StepInfo {
                x,
                y,
                index,
                direction,
                run_length,
                step,
            };
            if on_step(&info) == StepControl::Stop {
                break;
            }
        }

        Ok(())
    }
}
