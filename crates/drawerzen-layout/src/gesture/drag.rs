//! Drag gesture for placed bins and catalog entries.
//!
//! `Idle -> Dragging -> {Dropped | Reverted} -> Idle`. Hovering evaluates a
//! candidate at the cell under the pointer and keeps the result as the
//! drop shadow.

use drawerzen_core::{Bin, BinId, CatalogEntry, CellPos, EngineConfig, GridSpec, LayoutError, LayoutResult};

use super::PreviewRect;
use crate::validator;

/// What is being dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// A bin already on the grid, as it was when the drag started.
    Placed(Bin),
    /// A catalog entry; it has no bin id yet.
    Catalog(CatalogEntry),
}

/// How a drag ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// A placed bin was moved; its id is unchanged.
    Moved(BinId),
    /// A catalog entry became a new bin.
    Placed(BinId),
    /// A placed bin was removed and the entry put back into the pool.
    ReturnedToCatalog(CatalogEntry),
    /// The drop target rejected the bin. Nothing changed.
    Reverted(LayoutError),
    /// The drag ended outside any drop target. Nothing changed.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    payload: DragPayload,
    shadow: Option<PreviewRect>,
}

impl DragSession {
    pub fn new(payload: DragPayload) -> Self {
        Self {
            payload,
            shadow: None,
        }
    }

    pub fn payload(&self) -> &DragPayload {
        &self.payload
    }

    /// Id of the dragged bin, for drags that started on the grid.
    pub fn dragged_id(&self) -> Option<BinId> {
        match &self.payload {
            DragPayload::Placed(bin) => Some(bin.id),
            DragPayload::Catalog(_) => None,
        }
    }

    /// Last hover result.
    pub fn shadow(&self) -> Option<&PreviewRect> {
        self.shadow.as_ref()
    }

    /// The bin the payload would become with its top-left corner at `cell`.
    pub fn candidate_at(&self, cell: CellPos, grid: &GridSpec, config: &EngineConfig) -> Bin {
        let x = grid.cell_to_mm(cell.x);
        let y = grid.cell_to_mm(cell.y);
        match &self.payload {
            DragPayload::Placed(bin) => bin.at(x, y),
            DragPayload::Catalog(entry) => bin_from_catalog(entry, x, y, config),
        }
    }

    /// Validates the payload at `cell` against the placed bins.
    ///
    /// A catalog entry must also be an acceptable bin size; that is reported
    /// before bounds and collisions. A relocated bin never collides with itself.
    pub fn evaluate(
        &self,
        cell: CellPos,
        bins: &[Bin],
        grid: &GridSpec,
        config: &EngineConfig,
    ) -> LayoutResult<Bin> {
        if let DragPayload::Catalog(entry) = &self.payload {
            validator::validate_bin_dimensions(
                entry.width,
                entry.length,
                grid.pitch_mm,
                &config.constraints,
            )?;
        }
        let candidate = self.candidate_at(cell, grid, config);
        validator::validate_alignment(&candidate, grid)?;
        validator::validate_placement(&candidate, bins, grid, self.dragged_id())?;
        Ok(candidate)
    }

    /// Updates the drop shadow for the pointer being over `cell`.
    pub fn hover(
        &mut self,
        cell: CellPos,
        bins: &[Bin],
        grid: &GridSpec,
        config: &EngineConfig,
        cell_pixel_size: f64,
    ) -> PreviewRect {
        let candidate = self.candidate_at(cell, grid, config);
        let error_kind = self.evaluate(cell, bins, grid, config).err().map(|e| e.kind());
        let shadow = PreviewRect::from_bin(&candidate, grid, cell_pixel_size, error_kind);
        self.shadow = Some(shadow);
        shadow
    }

    /// Forgets the drop shadow, e.g. when the pointer leaves the grid.
    pub fn clear_shadow(&mut self) {
        self.shadow = None;
    }

    pub fn into_payload(self) -> DragPayload {
        self.payload
    }
}

/// A new bin for a catalog entry dropped at `(x, y)`.
pub(crate) fn bin_from_catalog(entry: &CatalogEntry, x: f64, y: f64, config: &EngineConfig) -> Bin {
    let mut bin = Bin::new(x, y, entry.width, entry.length, config.default_bin_height_mm);
    bin.name = entry.label.clone();
    bin.color = entry.color.clone();
    bin.colorway = Some(config.default_colorway.clone());
    bin.original_id = Some(entry.id.clone());
    bin
}
