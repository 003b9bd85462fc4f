//! Coordinate system for the drawer grid.
//!
//! Converts between three spaces:
//! - physical millimeters (bin storage, validation)
//! - grid cells (one grid pitch per cell, snapping)
//! - display pixels (pointer input, previews)
//!
//! Pixel space has (0,0) at the top-left of the grid and +Y pointing down,
//! which matches millimeter space, so no axis flip is needed.
//!
//! All functions are pure and never panic for finite input. Cell indices
//! are signed because pointer positions left of or above the grid map to
//! negative cells.

use serde::{Deserialize, Serialize};

/// Default grid pitch in millimeters.
pub const GRID_PITCH_MM: f64 = 21.0;

/// Spacing of the emphasised display lines (every second cell).
pub const EMPHASIS_PITCH_MM: f64 = 42.0;

/// Largest number of columns or rows a derived grid may have.
pub const MAX_GRID_AXIS_CELLS: u32 = 2048;

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i64,
    pub y: i64,
}

impl CellPos {
    /// Creates a new cell position.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Clamps the position into `[0, cols-1] x [0, rows-1]`.
    pub fn clamped(self, cols: u32, rows: u32) -> Self {
        let max_x = i64::from(cols.max(1)) - 1;
        let max_y = i64::from(rows.max(1)) - 1;
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
        }
    }

    /// Returns true if the position addresses a cell of a `cols x rows` grid.
    pub fn is_inside(&self, cols: u32, rows: u32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < i64::from(cols) && self.y < i64::from(rows)
    }
}

/// Axis-aligned rectangle of whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub length: u32,
}

impl CellRect {
    pub fn new(x: u32, y: u32, width: u32, length: u32) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    /// Normalised rectangle spanning two corner cells, both inclusive.
    ///
    /// Corners must already be clamped to the grid.
    pub fn spanning(a: CellPos, b: CellPos) -> Self {
        let x = a.x.min(b.x).max(0);
        let y = a.y.min(b.y).max(0);
        Self {
            x: x as u32,
            y: y as u32,
            width: (a.x - b.x).unsigned_abs() as u32 + 1,
            length: (a.y - b.y).unsigned_abs() as u32 + 1,
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.length)
    }

    /// Returns `(x, y, width, length)` in millimeters.
    pub fn to_mm(&self, pitch_mm: f64) -> (f64, f64, f64, f64) {
        (
            f64::from(self.x) * pitch_mm,
            f64::from(self.y) * pitch_mm,
            f64::from(self.width) * pitch_mm,
            f64::from(self.length) * pitch_mm,
        )
    }
}

/// Millimeters to the cell containing them: `floor(v / pitch)`.
pub fn mm_to_cell(value_mm: f64, pitch_mm: f64) -> i64 {
    (value_mm / pitch_mm).floor() as i64
}

/// Cell index to its leading edge in millimeters.
pub fn cell_to_mm(cell: i64, pitch_mm: f64) -> f64 {
    cell as f64 * pitch_mm
}

/// Millimeters to display pixels for a given on-screen cell size.
pub fn mm_to_pixel(value_mm: f64, pitch_mm: f64, cell_pixel_size: f64) -> f64 {
    (value_mm / pitch_mm) * cell_pixel_size
}

/// Display pixels back to millimeters.
pub fn pixel_to_mm(value_px: f64, pitch_mm: f64, cell_pixel_size: f64) -> f64 {
    (value_px / cell_pixel_size) * pitch_mm
}

/// Display pixel position to the cell under it.
pub fn pixel_to_cell(px: f64, py: f64, cell_pixel_size: f64) -> CellPos {
    CellPos {
        x: (px / cell_pixel_size).floor() as i64,
        y: (py / cell_pixel_size).floor() as i64,
    }
}

/// Returns true if `value_mm` is a whole number of grid cells.
pub fn is_pitch_multiple(value_mm: f64, pitch_mm: f64) -> bool {
    let cells = value_mm / pitch_mm;
    (cells - cells.round()).abs() < 1e-9
}
