use crossterm::style::Color;
use std::fmt;

/// One of the six cube faces. A sticker's color is the label of the face it started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// Position of this face in [`Face::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    /// Parses a face label, ignoring case
    pub fn from_label(label: char) -> Option<Face> {
        match label.to_ascii_uppercase() {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }

    /// Sticker color of this face in the solved state
    pub fn color(self) -> Color {
        match self {
            Face::U => Color::Rgb { r: 255, g: 255, b: 255 },
            Face::D => Color::Rgb { r: 255, g: 255, b: 0 },
            Face::F => Color::Rgb { r: 0, g: 255, b: 0 },
            Face::B => Color::Rgb { r: 0, g: 0, b: 255 },
            Face::L => Color::Rgb { r: 255, g: 165, b: 0 },
            Face::R => Color::Rgb { r: 255, g: 0, b: 0 },
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_label(face.label()), Some(face));
            assert_eq!(Face::from_label(face.label().to_ascii_lowercase()), Some(face));
        }
        assert_eq!(Face::from_label('X'), None);
    }

    #[test]
    fn index_matches_position() {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn colors_are_distinct() {
        for a in Face::ALL {
            for b in Face::ALL {
                assert_eq!(a == b, a.color() == b.color());
            }
        }
    }
}
