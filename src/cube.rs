use crate::error::CubeError;
use crate::face::Face;
use crate::grid::Grid;
use crate::moves::{Layer, Strip, Turn};
use std::fmt;

/// Smallest supported cube
pub const MIN_DIMENSION: usize = 2;

/// Sticker state of an N×N×N cube: one N×N grid of labels per face
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    dimension: usize,
    faces: [Grid<Face>; 6],
}

impl Cube {
    /// Creates a solved cube
    pub fn new(dimension: usize) -> Result<Self, CubeError> {
        if dimension < MIN_DIMENSION {
            return Err(CubeError::DimensionTooSmall(dimension));
        }
        Ok(Cube {
            dimension,
            faces: Face::ALL.map(|face| Grid::filled(dimension, face)),
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn face(&self, face: Face) -> &Grid<Face> {
        &self.faces[face.index()]
    }

    /// True when every face shows a single color
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| {
            let mut cells = grid.cells();
            match cells.next() {
                Some(first) => cells.all(|cell| cell == first),
                None => true,
            }
        })
    }

    /// Number of stickers of each color, indexed like [`Face::ALL`]
    pub fn sticker_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for label in self.faces.iter().flat_map(Grid::cells) {
            counts[label.index()] += 1;
        }
        counts
    }

    /// Applies one turn. Slice turns on an even cube are rejected and leave the state as is.
    pub fn apply(&mut self, turn: Turn) -> Result<(), CubeError> {
        if turn.mv.is_slice() && self.dimension % 2 == 0 {
            return Err(CubeError::NoMiddleLayer {
                mv: turn.mv,
                dimension: self.dimension,
            });
        }
        let layer = turn.mv.layer();
        for _ in 0..turn.quarter_turns() {
            self.quarter_turn(&layer);
        }
        Ok(())
    }

    /// Applies turns in order, stopping at the first rejected one
    pub fn apply_all<I>(&mut self, turns: I) -> Result<(), CubeError>
    where
        I: IntoIterator<Item = Turn>,
    {
        turns.into_iter().try_for_each(|turn| self.apply(turn))
    }

    fn quarter_turn(&mut self, layer: &Layer) {
        if let Some(face) = layer.turned {
            let grid = &mut self.faces[face.index()];
            *grid = grid.rotated_clockwise();
        }

        let [first, rest @ ..] = &layer.cycle;
        let saved = self.read_strip(layer, *first);
        let mut target = *first;
        for &source in rest {
            let line = self.read_strip(layer, source);
            self.write_strip(layer, target, &line);
            target = source;
        }
        self.write_strip(layer, target, &saved);
    }

    fn read_strip(&self, layer: &Layer, strip: Strip) -> Vec<Face> {
        let grid = self.face(strip.face);
        layer.cells(strip, self.dimension).map(|cell| grid[cell]).collect()
    }

    fn write_strip(&mut self, layer: &Layer, strip: Strip, line: &[Face]) {
        let grid = &mut self.faces[strip.face.index()];
        for (cell, &label) in layer.cells(strip, self.dimension).zip(line) {
            grid[cell] = label;
        }
    }
}

/// Text dump of all six faces, one labeled block per face
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            writeln!(f, "{face} face:")?;
            for row in self.face(face).rows() {
                let labels: Vec<String> = row.iter().map(Face::to_string).collect();
                writeln!(f, "  {}", labels.join(" "))?;
            }
        }
        Ok(())
    }
}
