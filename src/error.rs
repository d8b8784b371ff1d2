//! Ошибки генерации
//!
//! Все ошибки конфигурации фатальны и возвращаются до того, как сетка будет изменена.
//! Повторов нет: генерация является чистой детерминированная функция входных параметров.

use thiserror::Error;

use crate::tile::TileKind;

#[derive(Error, Debug)]
pub enum GenerationError {
    /// Недопустимый аргумент: размеры, сид, количество шагов, вес приоритетного направления
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Высота или влажность вне диапазона диаграммы Уиттекера
    #[error("{name} must be between {min} and {max}, {value} given")]
    RangeError {
        name: &'static str,
        min: u8,
        max: u8,
        value: u8,
    },

    /// Поиск по расширяющимся кольцам обошёл всю сетку и не нашёл тайл нужного типа
    #[error("No {kind:?} tile found anywhere on the grid from ({x}, {y})")]
    EmptySearch { kind: TileKind, x: usize, y: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] image::ImageError),
}

impl GenerationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
