pub mod beach;
pub mod biome;
pub mod cleanup;
pub mod climate;
pub mod config;
pub mod direction;
pub mod distance;
pub mod error;
pub mod generator;
pub mod grid;
pub mod landmass;
pub mod render;
pub mod rivers;
pub mod rng;
pub mod stepper;
pub mod tile;
pub mod water;

pub use config::{GenerationParams, RiverCount};
pub use error::{GenerationError, Result};
pub use generator::{GeneratedWorld, Generator, generate_world};
pub use grid::Grid;
pub use tile::{Tile, TileKind};
