//! Экспорт готовой карты: PNG и JSON
//!
//! Только читает сетку: цвета тайлов и их положение.

use std::fs;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::error::Result;
use crate::grid::Grid;

impl Grid {
    /// Изображение карты: каждый тайл рисуется квадратом `tile_size`×`tile_size` пикселей
    pub fn to_rgb_image(&self, tile_size: u32) -> RgbImage {
        let tile_size = tile_size.max(1);
        let mut img: RgbImage = ImageBuffer::new(
            self.width as u32 * tile_size,
            self.height as u32 * tile_size,
        );

        for x in 0..self.width {
            for y in 0..self.height {
                let rect = Rect::at((x as u32 * tile_size) as i32, (y as u32 * tile_size) as i32)
                    .of_size(tile_size, tile_size);
                draw_filled_rect_mut(&mut img, rect, Rgb(self.get(x, y).to_rgb()));
            }
        }
        img
    }

    pub fn save_as_png(&self, path: impl AsRef<Path>, tile_size: u32) -> Result<()> {
        self.to_rgb_image(tile_size).save(path)?;
        Ok(())
    }

    /// JSON с размерами и плоским массивом тайлов (раскладка по столбцам)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn save_as_json(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
