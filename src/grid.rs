use std::ops::{Index, IndexMut};

/// Square grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a `size`×`size` grid with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self {
        Grid {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Builds a grid from rows, returning `None` unless the rows form a square
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Grid {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns a copy of this grid rotated 90° clockwise.
    ///
    /// Cell `(i, j)` of the input lands on `(j, size - 1 - i)` of the output.
    pub fn rotated_clockwise(&self) -> Self {
        let n = self.size;
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(self[(n - 1 - col, row)].clone());
            }
        }
        Grid { size: n, cells }
    }
}

impl<T> Grid<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Iterates over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of bounds");
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of bounds");
        &mut self.cells[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(size: usize) -> Grid<usize> {
        let rows = (0..size)
            .map(|row| (0..size).map(|col| row * size + col).collect())
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn rotates_three_by_three_clockwise() {
        let rotated = numbered(3).rotated_clockwise();
        let rows: Vec<Vec<usize>> = rotated.rows().map(<[usize]>::to_vec).collect();
        assert_eq!(rows, vec![vec![6, 3, 0], vec![7, 4, 1], vec![8, 5, 2]]);
    }

    #[test]
    fn maps_cell_to_mirrored_column() {
        let grid = numbered(4);
        let rotated = grid.rotated_clockwise();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(rotated[(j, 3 - i)], grid[(i, j)]);
            }
        }
    }

    #[test]
    fn four_rotations_are_identity() {
        for size in 1..=7 {
            let grid = numbered(size);
            let mut rotated = grid.clone();
            for _ in 0..4 {
                rotated = rotated.rotated_clockwise();
            }
            assert_eq!(rotated, grid, "size {size}");
        }
    }

    #[test]
    fn single_cell_is_fixed() {
        let grid = Grid::filled(1, 'x');
        assert_eq!(grid.rotated_clockwise(), grid);
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_none());
    }
}
