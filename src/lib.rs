//! N×N Rubik's cube simulator: sticker-level move engine plus a software
//! renderer that paints the cube into a terminal.

pub mod camera;
pub mod config;
pub mod cube;
pub mod error;
pub mod face;
pub mod geometry;
pub mod graphics;
pub mod grid;
pub mod input;
pub mod math;
pub mod moves;
pub mod net;
pub mod state;
pub mod terminal;

pub use cube::Cube;
pub use error::CubeError;
pub use face::Face;
pub use moves::{parse_sequence, Move, Turn};
