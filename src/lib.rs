pub mod atlas;
pub mod bmp;
pub mod canvas;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tiles;

pub use atlas::{GenerateReport, generate};
pub use canvas::{Canvas, Rgb};
pub use config::GeneratorConfig;
pub use error::{AtlasError, AtlasResult};
pub use tiles::{ShapeKind, TileSpec};
