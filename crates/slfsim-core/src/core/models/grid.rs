use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {rows}x{cols}")]
    EmptyShape { rows: usize, cols: usize },
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("Grid of {rows}x{cols} points exceeds the addressable size")]
    TooLarge { rows: usize, cols: usize },
}

/// Dense, row-major 2D buffer of spectrum intensities.
///
/// The shape is fixed at construction. Every write is an accumulation, so
/// contributions from several peaks sum into the same cells.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumGrid {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl SpectrumGrid {
    /// Allocates a zero-filled grid of `rows` x `cols` points.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyShape`] if either dimension is zero and
    /// [`GridError::TooLarge`] if the point count overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            values: vec![0.0; len],
        })
    }

    /// Wraps existing row-major values.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is empty or does not match `values.len()`.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f32>) -> Result<Self, GridError> {
        if values.len() != checked_len(rows, cols)? {
            return Err(GridError::ShapeMismatch {
                expected: (rows, cols),
                found: (values.len() / cols, cols),
            });
        }
        Ok(Self { rows, cols, values })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.values[start..start + self.cols])
        } else {
            None
        }
    }

    /// Mutable access to one row, used by renderers to accumulate a whole
    /// span of columns at once.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [f32]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&mut self.values[start..start + self.cols])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Adds `value` to the cell at (`row`, `col`). Out-of-range cells are ignored.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: f32) {
        if row < self.rows && col < self.cols {
            self.values[row * self.cols + col] += value;
        }
    }

    /// Adds every cell of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if the shapes differ.
    pub fn merge(&mut self, other: &SpectrumGrid) -> Result<(), GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        self.accumulate(other);
        Ok(())
    }

    // Callers guarantee equal shapes.
    pub(crate) fn accumulate(&mut self, other: &SpectrumGrid) {
        for (dst, src) in self.values.iter_mut().zip(&other.values) {
            *dst += *src;
        }
    }

    /// Sum of all cells, accumulated in double precision.
    pub fn sum(&self) -> f64 {
        self.values.iter().map(|&v| v as f64).sum()
    }

    /// Position and value of the largest cell.
    pub fn argmax(&self) -> (usize, usize, f32) {
        let (index, value) = self
            .values
            .iter()
            .copied()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |best, (i, v)| {
                if v > best.1 { (i, v) } else { best }
            });
        (index / self.cols, index % self.cols, value)
    }

    pub fn count_nonzero(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0.0).count()
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyShape { rows, cols });
    }
    rows.checked_mul(cols).ok_or(GridError::TooLarge { rows, cols })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_allocates_shape_and_clears_values() {
        let grid = SpectrumGrid::zeros(3, 4).unwrap();
        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid.as_slice().len(), 12);
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zeros_rejects_overflowing_point_count() {
        assert_eq!(
            SpectrumGrid::zeros(usize::MAX / 2, 3),
            Err(GridError::TooLarge {
                rows: usize::MAX / 2,
                cols: 3
            })
        );
    }

    #[test]
    fn zeros_rejects_empty_dimensions() {
        assert_eq!(
            SpectrumGrid::zeros(0, 4),
            Err(GridError::EmptyShape { rows: 0, cols: 4 })
        );
        assert!(SpectrumGrid::zeros(4, 0).is_err());
    }

    #[test]
    fn from_values_checks_length() {
        assert!(SpectrumGrid::from_values(2, 2, vec![1.0; 4]).is_ok());
        assert!(matches!(
            SpectrumGrid::from_values(2, 2, vec![1.0; 5]),
            Err(GridError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn add_accumulates_instead_of_overwriting() {
        let mut grid = SpectrumGrid::zeros(2, 3).unwrap();
        grid.add(1, 2, 1.5);
        grid.add(1, 2, 2.0);
        assert_eq!(grid.get(1, 2), Some(3.5));
        assert_eq!(grid.get(0, 0), Some(0.0));
    }

    #[test]
    fn add_ignores_out_of_range_cells() {
        let mut grid = SpectrumGrid::zeros(2, 2).unwrap();
        grid.add(2, 0, 1.0);
        grid.add(0, 5, 1.0);
        assert_eq!(grid.sum(), 0.0);
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn rows_are_row_major_slices() {
        let grid = SpectrumGrid::from_values(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(grid.row(0), Some(&[0.0, 1.0, 2.0][..]));
        assert_eq!(grid.row(1), Some(&[3.0, 4.0, 5.0][..]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn row_mut_writes_through_to_grid() {
        let mut grid = SpectrumGrid::zeros(2, 2).unwrap();
        grid.row_mut(1).unwrap()[0] += 4.0;
        assert_eq!(grid.get(1, 0), Some(4.0));
    }

    #[test]
    fn merge_sums_elementwise() {
        let mut a = SpectrumGrid::from_values(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        let b = SpectrumGrid::from_values(1, 3, vec![0.5, 0.5, 0.5]).unwrap();
        a.merge(&b).unwrap();
        assert_eq!(a.as_slice(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn merge_rejects_different_shapes() {
        let mut a = SpectrumGrid::zeros(2, 3).unwrap();
        let b = SpectrumGrid::zeros(3, 2).unwrap();
        assert_eq!(
            a.merge(&b),
            Err(GridError::ShapeMismatch {
                expected: (2, 3),
                found: (3, 2)
            })
        );
    }

    #[test]
    fn argmax_reports_row_and_column() {
        let grid = SpectrumGrid::from_values(2, 3, vec![0.0, 1.0, 2.0, 3.0, 9.0, 5.0]).unwrap();
        assert_eq!(grid.argmax(), (1, 1, 9.0));
    }

    #[test]
    fn count_nonzero_counts_touched_cells() {
        let mut grid = SpectrumGrid::zeros(3, 3).unwrap();
        grid.add(0, 0, 1.0);
        grid.add(2, 1, -1.0);
        assert_eq!(grid.count_nonzero(), 2);
    }
}
