use crate::cube::Cube;
use crate::face::Face;
use crate::graphics::{Canvas, OUTLINE};

/// Gap between faces, in pixels
const MARGIN: usize = 1;

/// Position of each face in the cross layout, in face-sized steps
///
/// ```text
///    U
/// L  F  R  B
///    D
/// ```
fn slot(face: Face) -> (usize, usize) {
    match face {
        Face::U => (1, 0),
        Face::L => (0, 1),
        Face::F => (1, 1),
        Face::R => (2, 1),
        Face::B => (3, 1),
        Face::D => (1, 2),
    }
}

/// Largest sticker size that fits the net on the canvas, at least one pixel
pub fn sticker_size(canvas: &Canvas, dimension: usize) -> usize {
    let across = canvas.width().saturating_sub(5 * MARGIN) / (4 * dimension);
    let down = canvas.height().saturating_sub(4 * MARGIN) / (3 * dimension);
    across.min(down).max(1)
}

/// Blits the unfolded cube, centered on the canvas
pub fn draw_net(canvas: &mut Canvas, cube: &Cube) {
    let n = cube.dimension();
    let cell = sticker_size(canvas, n);
    let face_size = n * cell;
    let total_width = 4 * face_size + 5 * MARGIN;
    let total_height = 3 * face_size + 4 * MARGIN;
    let origin_x = canvas.width().saturating_sub(total_width) / 2;
    let origin_y = canvas.height().saturating_sub(total_height) / 2;

    for face in Face::ALL {
        let (sx, sy) = slot(face);
        let face_x = origin_x + MARGIN + sx * (face_size + MARGIN);
        let face_y = origin_y + MARGIN + sy * (face_size + MARGIN);
        for (i, row) in cube.face(face).rows().enumerate() {
            for (j, label) in row.iter().enumerate() {
                let x = face_x + j * cell;
                let y = face_y + i * cell;
                // Stickers too small for a border are drawn solid
                if cell >= 3 {
                    canvas.fill_rect(x, y, cell, cell, OUTLINE);
                    canvas.fill_rect(x + 1, y + 1, cell - 2, cell - 2, label.color());
                } else {
                    canvas.fill_rect(x, y, cell, cell, label.color());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::BACKGROUND;
    use crate::moves::{Move, Turn};

    #[test]
    fn sticker_size_fits_both_axes() {
        // 4 faces of 3 stickers of 5 pixels plus 5 margins across
        assert_eq!(sticker_size(&Canvas::new(65, 100), 3), 5);
        assert_eq!(sticker_size(&Canvas::new(200, 49), 3), 5);
        assert_eq!(sticker_size(&Canvas::new(3, 3), 7), 1);
    }

    #[test]
    fn faces_land_in_the_cross_layout() {
        let mut cube = Cube::new(2).unwrap();
        cube.apply(Turn::clockwise(Move::U)).unwrap();
        // cell = 4, face = 8: U spans x 10..18, y 1..9
        let mut canvas = Canvas::new(4 * 8 + 5, 3 * 8 + 4);
        draw_net(&mut canvas, &cube);

        let center = |sx: usize, sy: usize, i: usize, j: usize| {
            (1 + sx * 9 + j * 4 + 2, 1 + sy * 9 + i * 4 + 2)
        };
        let (x, y) = center(1, 0, 0, 0);
        assert_eq!(canvas.get(x, y), Some(Face::U.color()));
        // F's top row now holds R's stickers, its bottom row is still F
        let (x, y) = center(1, 1, 0, 1);
        assert_eq!(canvas.get(x, y), Some(Face::R.color()));
        let (x, y) = center(1, 1, 1, 1);
        assert_eq!(canvas.get(x, y), Some(Face::F.color()));
        let (x, y) = center(3, 2, 0, 0);
        assert_eq!(canvas.get(x, y), Some(BACKGROUND));
        assert_eq!(canvas.get(10, 1), Some(OUTLINE));
    }
}
