use crate::error::CubeError;
use crate::face::Face;
use std::fmt;
use std::str::FromStr;

/// A quarter-turnable layer: the six outer faces plus the three middle slices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    U,
    D,
    F,
    B,
    L,
    R,
    /// Middle layer between L and R, turning like R
    M,
    /// Middle layer between U and D, turning like U
    E,
    /// Ring of the four edge-center stickers around F, turning like F
    S,
}

/// Border of a face grid that a strip runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// How far from the turned face a layer sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Outer,
    Middle,
}

/// One full row or column of a face, read in a fixed direction.
///
/// Rows are read left to right and columns top to bottom, or the opposite way
/// when `reversed` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub edge: Edge,
    pub reversed: bool,
}

/// Which cells of each strip a layer carries along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// The whole row or column
    Line,
    /// Only the cell halfway along it
    Center,
}

/// Everything a clockwise quarter turn of one layer touches.
///
/// `cycle[k]` receives the line held by `cycle[k + 1]`, and `cycle[3]` receives the
/// original line of `cycle[0]`. Cell `t` of one strip always lands on cell `t` of the
/// next, which is where the straight/mirrored index convention lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    /// Face whose own grid rotates, if any
    pub turned: Option<Face>,
    pub depth: Depth,
    pub span: Span,
    pub cycle: [Strip; 4],
}

impl Layer {
    /// `(row, col)` of the cells of `strip` this layer moves on an `n`×`n` cube
    pub fn cells(&self, strip: Strip, n: usize) -> impl Iterator<Item = (usize, usize)> {
        let span = self.span;
        strip
            .cells(n, self.depth)
            .enumerate()
            .filter(move |&(t, _)| span == Span::Line || t == n / 2)
            .map(|(_, cell)| cell)
    }
}

const fn strip(face: Face, edge: Edge, reversed: bool) -> Strip {
    Strip {
        face,
        edge,
        reversed,
    }
}

use Edge::{Bottom, Left, Right, Top};

const U_CYCLE: [Strip; 4] = [
    strip(Face::F, Top, false),
    strip(Face::R, Top, false),
    strip(Face::B, Top, false),
    strip(Face::L, Top, false),
];
const D_CYCLE: [Strip; 4] = [
    strip(Face::F, Bottom, false),
    strip(Face::L, Bottom, false),
    strip(Face::B, Bottom, false),
    strip(Face::R, Bottom, false),
];
// Crossing between a horizontal and a vertical border mirrors the index on F and B.
const F_CYCLE: [Strip; 4] = [
    strip(Face::U, Bottom, false),
    strip(Face::L, Right, true),
    strip(Face::D, Top, true),
    strip(Face::R, Left, false),
];
const B_CYCLE: [Strip; 4] = [
    strip(Face::U, Top, false),
    strip(Face::R, Right, false),
    strip(Face::D, Bottom, true),
    strip(Face::L, Left, true),
];
// B is seen from behind, so its columns run upside down relative to U, F and D.
const L_CYCLE: [Strip; 4] = [
    strip(Face::U, Left, false),
    strip(Face::B, Right, true),
    strip(Face::D, Left, false),
    strip(Face::F, Left, false),
];
const R_CYCLE: [Strip; 4] = [
    strip(Face::U, Right, false),
    strip(Face::F, Right, false),
    strip(Face::D, Right, false),
    strip(Face::B, Left, true),
];

impl Move {
    pub const ALL: [Move; 9] = [
        Move::U,
        Move::D,
        Move::F,
        Move::B,
        Move::L,
        Move::R,
        Move::M,
        Move::E,
        Move::S,
    ];

    pub fn is_slice(self) -> bool {
        matches!(self, Move::M | Move::E | Move::S)
    }

    /// The layer this move turns a quarter clockwise
    pub fn layer(self) -> Layer {
        let outer = |face, cycle| Layer {
            turned: Some(face),
            depth: Depth::Outer,
            span: Span::Line,
            cycle,
        };
        let middle = |cycle| Layer {
            turned: None,
            depth: Depth::Middle,
            span: Span::Line,
            cycle,
        };
        match self {
            Move::U => outer(Face::U, U_CYCLE),
            Move::D => outer(Face::D, D_CYCLE),
            Move::F => outer(Face::F, F_CYCLE),
            Move::B => outer(Face::B, B_CYCLE),
            Move::L => outer(Face::L, L_CYCLE),
            Move::R => outer(Face::R, R_CYCLE),
            Move::M => middle(R_CYCLE),
            Move::E => middle(U_CYCLE),
            Move::S => Layer {
                turned: None,
                depth: Depth::Outer,
                span: Span::Center,
                cycle: F_CYCLE,
            },
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Move::U => 'U',
            Move::D => 'D',
            Move::F => 'F',
            Move::B => 'B',
            Move::L => 'L',
            Move::R => 'R',
            Move::M => 'M',
            Move::E => 'E',
            Move::S => 'S',
        }
    }

    /// Parses a move letter, ignoring case
    pub fn from_symbol(symbol: char) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|mv| mv.symbol() == symbol.to_ascii_uppercase())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Strip {
    /// Index of the row or column this strip covers on an `n`×`n` face
    pub fn line_index(self, n: usize, depth: Depth) -> usize {
        let offset = match depth {
            Depth::Outer => 0,
            Depth::Middle => n / 2,
        };
        match self.edge {
            Top | Left => offset,
            Bottom | Right => n - 1 - offset,
        }
    }

    /// `(row, col)` of each cell along the strip, in reading order
    pub fn cells(self, n: usize, depth: Depth) -> impl Iterator<Item = (usize, usize)> {
        let line = self.line_index(n, depth);
        (0..n).map(move |t| {
            let t = if self.reversed { n - 1 - t } else { t };
            match self.edge {
                Top | Bottom => (line, t),
                Left | Right => (t, line),
            }
        })
    }
}

/// A move together with its direction. The inverse is three clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub mv: Move,
    pub inverse: bool,
}

impl Turn {
    pub fn new(mv: Move, inverse: bool) -> Self {
        Turn { mv, inverse }
    }

    pub fn clockwise(mv: Move) -> Self {
        Turn::new(mv, false)
    }

    pub fn counter_clockwise(mv: Move) -> Self {
        Turn::new(mv, true)
    }

    /// The turn that undoes this one
    pub fn inverted(self) -> Self {
        Turn::new(self.mv, !self.inverse)
    }

    /// Number of clockwise quarter turns this turn is made of
    pub fn quarter_turns(self) -> usize {
        if self.inverse {
            3
        } else {
            1
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverse {
            write!(f, "{}'", self.mv)
        } else {
            write!(f, "{}", self.mv)
        }
    }
}

impl FromStr for Turn {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CubeError::UnknownMove(s.to_owned());
        let mut chars = s.chars();
        let mv = chars.next().and_then(Move::from_symbol).ok_or_else(unknown)?;
        match chars.as_str() {
            "" => Ok(Turn::clockwise(mv)),
            "'" => Ok(Turn::counter_clockwise(mv)),
            _ => Err(unknown()),
        }
    }
}

/// Parses whitespace separated notation such as `R U R' U' F2`.
///
/// A `2` suffix expands to two clockwise turns.
pub fn parse_sequence(notation: &str) -> Result<Vec<Turn>, CubeError> {
    let mut turns = Vec::new();
    for token in notation.split_whitespace() {
        match token.strip_suffix('2') {
            Some(single) => {
                let turn: Turn = single
                    .parse()
                    .map_err(|_| CubeError::UnknownMove(token.to_owned()))?;
                if turn.inverse {
                    return Err(CubeError::UnknownMove(token.to_owned()));
                }
                turns.extend([turn, turn]);
            }
            None => turns.push(token.parse()?),
        }
    }
    Ok(turns)
}
