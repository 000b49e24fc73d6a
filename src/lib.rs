pub mod analyzers;
pub mod cli;
pub mod error;
pub mod interaction;
pub mod models;
pub mod processors;
pub mod readers;
pub mod render;
pub mod scales;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{HeatmapError, Result};
