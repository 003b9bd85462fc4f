//! Direct bin operations for layout state.

use serde::{Deserialize, Serialize};

use drawerzen_core::{Bin, BinId, LayoutError, LayoutResult};

use super::LayoutState;
use crate::gesture::Gesture;
use crate::history::MutationKind;
use crate::validator;

/// Cosmetic changes to a placed bin. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BinUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub colorway: Option<String>,
    pub height: Option<f64>,
    pub shadow_board: Option<bool>,
}

impl BinUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn apply(self, bin: &mut Bin) {
        if let Some(name) = self.name {
            bin.name = name;
        }
        if let Some(color) = self.color {
            bin.color = color;
        }
        if let Some(colorway) = self.colorway {
            bin.colorway = Some(colorway);
        }
        if let Some(height) = self.height {
            bin.height = height;
        }
        if let Some(shadow_board) = self.shadow_board {
            bin.shadow_board = shadow_board;
        }
    }
}

impl LayoutState {
    /// Adds a bin after checking its size, grid alignment, bounds and collisions.
    pub fn add_bin(&mut self, bin: Bin) -> LayoutResult<BinId> {
        validator::validate_bin_dimensions(
            bin.width,
            bin.length,
            self.grid.pitch_mm,
            &self.config.constraints,
        )?;
        if self.store.contains(bin.id) {
            return Err(LayoutError::Collision { other: bin.id });
        }
        validator::validate_alignment(&bin, &self.grid)?;
        validator::validate_placement(&bin, self.store.bins(), &self.grid, None)?;

        self.push_undo(MutationKind::Add);
        self.store.add(bin, &self.grid)
    }

    /// Removes a bin. A bin taken from the catalog goes back into the pool.
    pub fn remove_bin(&mut self, id: BinId) -> LayoutResult<Bin> {
        if !self.store.contains(id) {
            return Err(LayoutError::NotFound(id));
        }
        self.push_undo(MutationKind::Remove);
        let bin = self.store.remove(id)?;
        if let Some(entry) = self.catalog.restore_original(&bin) {
            tracing::debug!(%id, entry = %entry.id, "catalog entry restored");
        }
        Ok(bin)
    }

    /// Moves a bin to `(x, y)` in mm, keeping its identity.
    pub fn move_bin(&mut self, id: BinId, x: f64, y: f64) -> LayoutResult<()> {
        let candidate = self.store.get(id).ok_or(LayoutError::NotFound(id))?.at(x, y);
        validator::validate_bin_dimensions(
            candidate.width,
            candidate.length,
            self.grid.pitch_mm,
            &self.config.constraints,
        )?;
        validator::validate_alignment(&candidate, &self.grid)?;
        validator::validate_placement(&candidate, self.store.bins(), &self.grid, Some(id))?;

        self.push_undo(MutationKind::Move);
        self.store.move_to(id, x, y, &self.grid)
    }

    pub fn select_bin(&mut self, id: BinId) -> LayoutResult<()> {
        self.store.select(id)
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    /// Changes cosmetic attributes; placement is never affected.
    pub fn update_bin(&mut self, id: BinId, mut update: BinUpdate) -> LayoutResult<()> {
        if !self.store.contains(id) {
            return Err(LayoutError::NotFound(id));
        }
        if let Some(height) = update.height {
            if !(height.is_finite() && height > 0.0) {
                tracing::warn!(%id, height, "ignoring invalid bin height");
                update.height = None;
            }
        }
        if update.is_empty() {
            return Ok(());
        }

        self.push_undo(MutationKind::Update);
        self.store.modify(id, |bin| update.apply(bin))
    }

    /// Removes the selected bin, if any.
    pub fn remove_selected(&mut self) -> Option<Bin> {
        let id = self.store.selected_id()?;
        self.remove_bin(id).ok()
    }

    /// Removes every placed bin. The catalog pool is left alone.
    pub fn clear_bins(&mut self) -> Vec<Bin> {
        if self.store.is_empty() {
            return Vec::new();
        }
        self.push_undo(MutationKind::Clear);
        let removed = self.store.clear();
        tracing::info!(removed = removed.len(), "layout cleared");
        removed
    }

    /// Clears the layout and makes the whole catalog available again.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.clear_bins();
        self.catalog.reset();
    }
}
