//! Output helpers for the command line tool: text, JSON and PNG

pub mod display;
pub mod image;

pub use display::{Color, ColorOutput, SolutionFormatter};
pub use image::GridImage;
