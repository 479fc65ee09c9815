//! Wavedeform library - procedural water displacement for mesh vertices

pub mod cli;
pub mod deform;
pub mod error;
pub mod noise;
pub mod params;
pub mod preview;
pub mod surface;
pub mod wave;

pub use error::{Error, Result};
