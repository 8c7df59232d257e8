use crate::camera::{Camera, Viewport};
use crate::cube::Cube;
use crate::face::Face;
use crate::grid::Grid;
use crate::math::{combine, Point2, Vec3};
use crossterm::style::Color;

/// Where a face sits on the unit cube and how its grid is laid onto it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    pub center: Vec3,
    /// Direction of increasing column
    pub right: Vec3,
    /// Direction of decreasing row
    pub up: Vec3,
}

/// Frame of each face in world space.
///
/// World space follows the projector, which looks down +Z, so F faces the viewer at zero
/// angles. Seen from outside, every face reads left to right along `right` and top to
/// bottom against `up`, which keeps the frames in step with the move tables.
pub fn face_frame(face: Face) -> FaceFrame {
    let frame = |center, right, up| FaceFrame { center, right, up };
    match face {
        Face::F => frame([0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        Face::B => frame([0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        Face::U => frame([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        Face::D => frame([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        Face::L => frame([-1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        Face::R => frame([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    }
}

impl FaceFrame {
    /// Maps local face coordinates in [-1, 1]² to world space
    pub fn to_world(&self, local_x: f64, local_y: f64) -> Vec3 {
        combine(&self.center, local_x, &self.right, local_y, &self.up)
    }
}

/// A projected sticker, ready for the painter
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    /// Screen corners, clockwise from top-left as seen from outside the cube
    pub corners: [Point2; 4],
    /// Mean view-space Z of the corners. Larger is farther away.
    pub depth: f64,
    pub color: Color,
}

/// Builds one quad per cell of `grid`
pub fn face_quads(
    grid: &Grid<Face>,
    frame: &FaceFrame,
    camera: &Camera,
    viewport: Viewport,
    quads: &mut Vec<Quad>,
) {
    let cell = 2.0 / grid.size() as f64;
    for (i, row) in grid.rows().enumerate() {
        for (j, label) in row.iter().enumerate() {
            let left = -1.0 + j as f64 * cell;
            let right = left + cell;
            let top = 1.0 - i as f64 * cell;
            let bottom = top - cell;

            let rotated = [(left, top), (right, top), (right, bottom), (left, bottom)]
                .map(|(x, y)| camera.transform(&frame.to_world(x, y)));
            let depth = rotated.iter().map(|p| p[2]).sum::<f64>() / 4.0;

            quads.push(Quad {
                corners: rotated.map(|p| camera.project(&p, viewport)),
                depth,
                color: label.color(),
            });
        }
    }
}

/// Builds the quads of all six faces for one frame
pub fn build_quads(cube: &Cube, camera: &Camera, viewport: Viewport) -> Vec<Quad> {
    let n = cube.dimension();
    let mut quads = Vec::with_capacity(6 * n * n);
    for face in Face::ALL {
        face_quads(cube.face(face), &face_frame(face), camera, viewport, &mut quads);
    }
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Move, Turn};
    use approx::assert_abs_diff_eq;

    fn dot(a: &Vec3, b: &Vec3) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn assert_close(actual: Vec3, expected: Vec3) {
        for axis in 0..3 {
            assert_abs_diff_eq!(actual[axis], expected[axis], epsilon = 1e-9);
        }
    }

    fn cell_center(face: Face, n: usize, (row, col): (usize, usize)) -> Vec3 {
        let cell = 2.0 / n as f64;
        face_frame(face).to_world(
            -1.0 + (col as f64 + 0.5) * cell,
            1.0 - (row as f64 + 0.5) * cell,
        )
    }

    /// Quarter turn about `axis` that reads as clockwise from outside the cube
    /// in this (mirrored) world space
    fn turn_about(axis: &Vec3, p: &Vec3) -> Vec3 {
        let along = dot(axis, p);
        let c = cross(axis, p);
        [
            along * axis[0] + c[0],
            along * axis[1] + c[1],
            along * axis[2] + c[2],
        ]
    }

    fn axis_face(mv: Move) -> Face {
        match mv {
            Move::U | Move::E => Face::U,
            Move::D => Face::D,
            Move::F | Move::S => Face::F,
            Move::B => Face::B,
            Move::L => Face::L,
            Move::R | Move::M => Face::R,
        }
    }

    #[test]
    fn frames_are_orthonormal_and_face_outwards() {
        for face in Face::ALL {
            let frame = face_frame(face);
            for v in [frame.center, frame.right, frame.up] {
                assert_eq!(dot(&v, &v), 1.0);
            }
            assert_eq!(dot(&frame.right, &frame.up), 0.0);
            assert_eq!(dot(&frame.center, &frame.right), 0.0);
            // World space is mirrored along Z, so the outward normal is up × right.
            assert_eq!(cross(&frame.up, &frame.right), frame.center);
        }
    }

    #[test]
    fn move_tables_match_frame_geometry() {
        for n in 2..=5 {
            for mv in Move::ALL {
                let layer = mv.layer();
                if mv.is_slice() && n % 2 == 0 {
                    continue;
                }
                let axis = face_frame(axis_face(mv)).center;
                for k in 0..4 {
                    let target = layer.cycle[k];
                    let source = layer.cycle[(k + 1) % 4];
                    let pairs = layer.cells(target, n).zip(layer.cells(source, n));
                    for (to, from) in pairs {
                        let moved = turn_about(&axis, &cell_center(source.face, n, from));
                        assert_close(moved, cell_center(target.face, n, to));
                    }
                }
                if let Some(face) = layer.turned {
                    for i in 0..n {
                        for j in 0..n {
                            let moved = turn_about(&axis, &cell_center(face, n, (i, j)));
                            assert_close(moved, cell_center(face, n, (j, n - 1 - i)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn builds_one_quad_per_sticker() {
        let camera = Camera::default();
        for n in 2..=6 {
            let cube = Cube::new(n).unwrap();
            let quads = build_quads(&cube, &camera, Viewport::new(200, 100));
            assert_eq!(quads.len(), 6 * n * n);
        }
    }

    #[test]
    fn front_is_nearest_at_zero_angles() {
        let mut camera = Camera::default();
        camera.pitch = 0.0;
        camera.yaw = 0.0;
        let cube = Cube::new(2).unwrap();
        let mut quads = Vec::new();
        let viewport = Viewport::new(100, 100);
        face_quads(cube.face(Face::F), &face_frame(Face::F), &camera, viewport, &mut quads);
        assert!(quads.iter().all(|q| q.depth == -1.0));
        // Top-left sticker projects up and to the left of the screen center.
        let [top_left, ..] = quads[0].corners;
        assert!(top_left[0] < 50.0 && top_left[1] < 50.0);
    }

    #[test]
    fn default_view_shows_up_front_and_right() {
        let camera = Camera::default();
        let mut nearest: Vec<(f64, Face)> = Face::ALL
            .iter()
            .map(|&face| (camera.transform(&face_frame(face).center)[2], face))
            .collect();
        nearest.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut front: Vec<Face> = nearest[..3].iter().map(|&(_, face)| face).collect();
        front.sort();
        assert_eq!(front, [Face::U, Face::F, Face::R]);
    }

    #[test]
    fn quads_take_colors_from_stickers() {
        let mut cube = Cube::new(3).unwrap();
        cube.apply(Turn::clockwise(Move::U)).unwrap();
        let quads = build_quads(&cube, &Camera::default(), Viewport::new(90, 90));
        // F is the third face and its top row now carries R's stickers.
        let front = &quads[2 * 9..3 * 9];
        assert!(front[..3].iter().all(|q| q.color == Face::R.color()));
        assert!(front[3..].iter().all(|q| q.color == Face::F.color()));
    }
}
