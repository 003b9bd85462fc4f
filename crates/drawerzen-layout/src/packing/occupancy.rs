//! Cell occupancy bitmap.

use drawerzen_core::{Bin, CellRect, GridSpec};

/// Row-major map of occupied cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cols: u32,
    rows: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates an empty map.
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols as usize * rows as usize],
        }
    }

    /// Marks every cell touched by a bin. Parts outside the grid are ignored.
    pub fn from_bins(grid: &GridSpec, bins: &[Bin]) -> Self {
        let mut occupancy = Self::new(grid.cols, grid.rows);
        for bin in bins {
            occupancy.mark_bin(bin, grid.pitch_mm);
        }
        occupancy
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.cols as usize + x as usize
    }

    /// Returns true if the cell is occupied. Cells outside the grid count as occupied.
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        if x >= self.cols || y >= self.rows {
            return true;
        }
        self.cells[self.index(x, y)]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn free_count(&self) -> usize {
        self.cells.len() - self.occupied_count()
    }

    /// Marks a cell rectangle, clipped to the grid.
    pub fn mark(&mut self, rect: CellRect) {
        let x_end = rect.x.saturating_add(rect.width).min(self.cols);
        let y_end = rect.y.saturating_add(rect.length).min(self.rows);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                let i = self.index(x, y);
                self.cells[i] = true;
            }
        }
    }

    /// Marks the cells covered by a bin given in millimeters.
    ///
    /// Partially covered cells count as occupied.
    pub fn mark_bin(&mut self, bin: &Bin, pitch_mm: f64) {
        let x0 = (bin.x / pitch_mm).floor().max(0.0);
        let y0 = (bin.y / pitch_mm).floor().max(0.0);
        let x1 = (bin.right() / pitch_mm).ceil().min(f64::from(self.cols));
        let y1 = (bin.bottom() / pitch_mm).ceil().min(f64::from(self.rows));
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        self.mark(CellRect::new(
            x0 as u32,
            y0 as u32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        ));
    }

    /// For each cell, the number of consecutive free cells starting there
    /// and running right along its row.
    pub fn free_runs(&self) -> Vec<u32> {
        let mut runs = vec![0u32; self.cells.len()];
        for y in 0..self.rows {
            let mut run = 0u32;
            for x in (0..self.cols).rev() {
                let i = self.index(x, y);
                run = if self.cells[i] { 0 } else { run + 1 };
                runs[i] = run;
            }
        }
        runs
    }
}
