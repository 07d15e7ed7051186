pub mod camera;
pub mod cell;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod grid;
pub mod io;
pub mod rule_set;
pub mod seed;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use seed::SeedPolicy;

pub type ScreenSize = u16;
