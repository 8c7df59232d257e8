use crate::cube::MIN_DIMENSION;
use crate::moves::Move;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    #[error("cube dimension must be at least {min}, got {0}", min = MIN_DIMENSION)]
    DimensionTooSmall(usize),
    /// Slice turns need a true center layer, which only odd cubes have
    #[error("slice move {mv} needs an odd dimension, cube is {dimension}x{dimension}")]
    NoMiddleLayer { mv: Move, dimension: usize },
    #[error("unrecognized move {0:?}")]
    UnknownMove(String),
}
