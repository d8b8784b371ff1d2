// src/config.rs
//! Конфигурация генерации мира
//!
//! Этот модуль определяет параметры, управляющие генерацией:
//! - Размеры сетки и сид
//! - Количество генераторов суши и длину их блуждания
//! - Количество рек (фиксированное или диапазон)
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GenerationError, Result};
use crate::rng::SeededRng;

/// Количество рек: точное число или диапазон `min..=max`
///
/// В TOML записывается как `rivers = 3` или `rivers = { min = 1, max = 2 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiverCount {
    Fixed(u32),
    Range { min: u32, max: u32 },
}

impl Default for RiverCount {
    fn default() -> Self {
        RiverCount::Range { min: 1, max: 2 }
    }
}

impl RiverCount {
    /// Проверяет диапазон: `min` не может быть больше `max`
    pub fn validate(self) -> Result<()> {
        match self {
            RiverCount::Range { min, max } if min > max => Err(GenerationError::invalid(format!(
                "river range min ({min}) cannot exceed max ({max})"
            ))),
            _ => Ok(()),
        }
    }

    /// Итоговое число рек.
    ///
    /// Для диапазона с `max > min` берёт одно значение из генератора:
    /// `floor(r * (max - min + 1) + min)`. Иначе генератор не трогается.
    pub fn resolve(self, rng: &mut SeededRng) -> u32 {
        match self {
            RiverCount::Fixed(count) => count,
            RiverCount::Range { min, max } if max > min => {
                let span = f64::from(max - min + 1);
                ((rng.next_f64() * span).floor() as u32 + min).min(max)
            }
            RiverCount::Range { min, .. } => min,
        }
    }
}

/// Основные параметры генерации мира
///
/// Полная конфигурация для генерации одного мира. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Сид генератора случайных чисел; без сида генерируется случайный
    #[serde(default)]
    pub seed: Option<String>,

    /// Ширина карты в тайлах (по умолчанию 100)
    #[serde(default = "default_width")]
    pub width: usize,

    /// Высота карты в тайлах (по умолчанию 100)
    #[serde(default = "default_height")]
    pub height: usize,

    /// Сколько генераторов суши запускается (по умолчанию 100)
    #[serde(default = "default_landmass_steppers")]
    pub landmass_steppers: usize,

    /// Сколько шагов делает каждый генератор суши (по умолчанию 150)
    #[serde(default = "default_landmass_steps")]
    pub landmass_steps: usize,

    /// Количество рек (по умолчанию от 1 до 2)
    #[serde(default)]
    pub rivers: RiverCount,
}

impl GenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # world.toml
    /// seed = "abc123"
    /// width = 120
    /// height = 80
    /// landmass_steppers = 60
    /// rivers = { min = 1, max = 3 }
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let params: Self = toml::from_str(contents)?;
        Ok(params)
    }

    /// Проверка на входе: все размеры и счётчики должны быть положительными
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerationError::invalid(format!(
                "width and height must be positive, {}x{} given",
                self.width, self.height
            )));
        }
        if self.landmass_steppers == 0 {
            return Err(GenerationError::invalid(
                "landmass_steppers must be positive",
            ));
        }
        if self.landmass_steps == 0 {
            return Err(GenerationError::invalid("landmass_steps must be positive"));
        }
        self.rivers.validate()
    }
}

fn default_width() -> usize {
    100
}
fn default_height() -> usize {
    100
}
fn default_landmass_steppers() -> usize {
    100
}
fn default_landmass_steps() -> usize {
    150
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: None,
            width: 100,
            height: 100,
            landmass_steppers: 100,
            landmass_steps: 150,
            rivers: RiverCount::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_defaults() {
        let params = GenerationParams::from_toml_str("").unwrap();
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn toml_river_forms() {
        let fixed = GenerationParams::from_toml_str("rivers = 3").unwrap();
        assert_eq!(fixed.rivers, RiverCount::Fixed(3));

        let range = GenerationParams::from_toml_str(
            "seed = \"abc123\"\nwidth = 10\nrivers = { min = 2, max = 5 }",
        )
        .unwrap();
        assert_eq!(range.rivers, RiverCount::Range { min: 2, max: 5 });
        assert_eq!(range.seed.as_deref(), Some("abc123"));
        assert_eq!(range.width, 10);
        assert_eq!(range.height, 100);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = GenerationParams::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, GenerationError::Config(_)));
    }

    #[test]
    fn validation_rejects_zero_sizes() {
        let mut params = GenerationParams {
            width: 0,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());

        params.width = 10;
        params.landmass_steps = 0;
        assert!(params.validate().is_err());

        params.landmass_steps = 10;
        params.rivers = RiverCount::Range { min: 3, max: 1 };
        assert!(params.validate().is_err());

        params.rivers = RiverCount::Fixed(0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn river_range_resolution() {
        let mut rng = SeededRng::new(Some("rivers")).unwrap();
        for _ in 0..200 {
            let count = RiverCount::Range { min: 2, max: 4 }.resolve(&mut rng);
            assert!((2..=4).contains(&count));
        }

        // фиксированное число и вырожденный диапазон не расходуют генератор
        let mut a = SeededRng::new(Some("same")).unwrap();
        let mut b = SeededRng::new(Some("same")).unwrap();
        assert_eq!(RiverCount::Fixed(7).resolve(&mut a), 7);
        assert_eq!(RiverCount::Range { min: 2, max: 2 }.resolve(&mut a), 2);
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }
}
