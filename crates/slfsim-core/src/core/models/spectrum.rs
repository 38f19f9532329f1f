use super::axis::SpectrumAxis;
use super::grid::{GridError, SpectrumGrid};

/// A 2D spectrum: intensity grid plus the calibration of each axis.
///
/// `axes[0]` describes the rows of the grid (`w1`) and `axes[1]` the columns
/// (`w2`); their sizes always match the grid shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    axes: [SpectrumAxis; 2],
    grid: SpectrumGrid,
}

impl Spectrum {
    /// Pairs a grid with its axes.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if the axis sizes disagree with the grid shape.
    pub fn new(row_axis: SpectrumAxis, col_axis: SpectrumAxis, grid: SpectrumGrid) -> Result<Self, GridError> {
        let expected = (row_axis.size, col_axis.size);
        if grid.shape() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                found: grid.shape(),
            });
        }
        Ok(Self {
            axes: [row_axis, col_axis],
            grid,
        })
    }

    pub fn axes(&self) -> &[SpectrumAxis; 2] {
        &self.axes
    }

    pub fn row_axis(&self) -> &SpectrumAxis {
        &self.axes[0]
    }

    pub fn col_axis(&self) -> &SpectrumAxis {
        &self.axes[1]
    }

    pub fn grid(&self) -> &SpectrumGrid {
        &self.grid
    }
}
