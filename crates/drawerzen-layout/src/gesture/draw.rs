//! Draw-to-create gesture.
//!
//! `Idle -> Drawing -> {Committed | Cancelled} -> Idle`. The session holds
//! the start cell and the current end cell, both clamped to the grid; the
//! rectangle between them (inclusive) is the bin being drawn.

use drawerzen_core::{Bin, BinId, CellPos, CellRect, EngineConfig, GridSpec, LayoutError, LayoutResult};

use super::PreviewRect;
use crate::validator;

/// How a draw gesture ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// A new bin was added to the store.
    Committed(BinId),
    /// Nothing was created.
    Cancelled(LayoutError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSession {
    start: CellPos,
    end: CellPos,
}

impl DrawSession {
    /// Starts drawing at `start`, which must be a cell of the grid.
    pub fn begin(start: CellPos) -> Self {
        Self { start, end: start }
    }

    pub fn start(&self) -> CellPos {
        self.start
    }

    pub fn end(&self) -> CellPos {
        self.end
    }

    /// Moves the free corner, clamped to the grid.
    pub fn extend_to(&mut self, pos: CellPos, grid: &GridSpec) {
        self.end = pos.clamped(grid.cols, grid.rows);
    }

    /// Normalised rectangle in cells.
    pub fn cell_rect(&self) -> CellRect {
        CellRect::spanning(self.start, self.end)
    }

    /// The bin that would be created right now.
    pub fn candidate(&self, grid: &GridSpec, config: &EngineConfig) -> Bin {
        let (x, y, width, length) = self.cell_rect().to_mm(grid.pitch_mm);
        let mut bin = Bin::new(x, y, width, length, config.default_bin_height_mm);
        bin.name = format!("Custom {width}x{length}mm");
        bin.color = config.default_color.clone();
        bin.colorway = Some(config.default_colorway.clone());
        bin
    }

    /// Checks the current rectangle against the size rules, then the placed bins.
    pub fn evaluate(&self, bins: &[Bin], grid: &GridSpec, config: &EngineConfig) -> LayoutResult<Bin> {
        let rect = self.cell_rect();
        let candidate = self.candidate(grid, config);
        if let Some(violation) =
            validator::size_violation(rect.width, rect.length, grid.pitch_mm, &config.constraints)
        {
            return Err(LayoutError::SizeInvalid {
                width: candidate.width,
                length: candidate.length,
                violation,
            });
        }
        validator::validate_placement(&candidate, bins, grid, None)?;
        Ok(candidate)
    }

    /// Live preview in pixel space.
    pub fn preview(
        &self,
        bins: &[Bin],
        grid: &GridSpec,
        config: &EngineConfig,
        cell_pixel_size: f64,
    ) -> PreviewRect {
        let candidate = self.candidate(grid, config);
        let error_kind = self.evaluate(bins, grid, config).err().map(|e| e.kind());
        PreviewRect::from_bin(&candidate, grid, cell_pixel_size, error_kind)
    }
}
