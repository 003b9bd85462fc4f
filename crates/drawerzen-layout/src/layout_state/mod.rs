//! Layout state for UI integration.
//!
//! `LayoutState` owns the drawer grid, the placed bins, the catalog pool and
//! the active gesture, and is the only thing that mutates them. Every
//! mutation validates first, calls the undo hook, then applies.
//!
//! This module is split into submodules:
//! - `bins`: direct bin operations (add, remove, move, select, edit, clear)
//! - `drawing`: draw-to-create pointer handling
//! - `dragging`: drag and drop of placed bins and catalog entries
//! - `packing`: auto-sort and gap fill applied to the store

mod bins;
mod dragging;
mod drawing;
mod packing;

pub use bins::BinUpdate;

use serde::{Deserialize, Serialize};

use drawerzen_core::coords::pixel_to_cell;
use drawerzen_core::{Bin, BinId, CatalogEntry, CellPos, Drawer, EngineConfig, GridSpec};

use crate::bin_store::BinStore;
use crate::catalog::CatalogPool;
use crate::gesture::{Gesture, PreviewRect};
use crate::history::{MutationKind, NoUndo, UndoHook};

/// Read-only view of the layout for review or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub drawer: Drawer,
    pub grid: GridSpec,
    pub bins: Vec<Bin>,
    pub selected: Option<BinId>,
    pub cell_pixel_size: f64,
}

pub struct LayoutState {
    config: EngineConfig,
    drawer: Drawer,
    grid: GridSpec,
    pub(crate) store: BinStore,
    pub(crate) catalog: CatalogPool,
    pub(crate) gesture: Gesture,
    cell_pixel_size: f64,
    undo: Box<dyn UndoHook>,
}

impl LayoutState {
    /// Creates an empty layout for `drawer`.
    ///
    /// The drawer is clamped to at least one grid cell per axis.
    pub fn new(drawer: Drawer, catalog: Vec<CatalogEntry>, config: EngineConfig) -> Self {
        let drawer = drawer.clamped_to(config.grid_pitch_mm);
        let grid = GridSpec::from_drawer(&drawer, config.grid_pitch_mm);
        tracing::debug!(cols = grid.cols, rows = grid.rows, "layout created");
        Self {
            config,
            drawer,
            grid,
            store: BinStore::new(),
            catalog: CatalogPool::new(catalog),
            gesture: Gesture::Idle,
            cell_pixel_size: 0.0,
            undo: Box::new(NoUndo),
        }
    }

    /// Installs the hook called before every mutation.
    pub fn set_undo_hook(&mut self, hook: impl UndoHook + 'static) {
        self.undo = Box::new(hook);
    }

    pub(crate) fn push_undo(&mut self, kind: MutationKind) {
        tracing::trace!(%kind, "undo snapshot");
        self.undo.push_undo_snapshot(self.store.bins(), kind);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Placed bins in insertion order.
    pub fn bins(&self) -> &[Bin] {
        self.store.bins()
    }

    pub fn bin(&self, id: BinId) -> Option<&Bin> {
        self.store.get(id)
    }

    pub fn selected(&self) -> Option<&Bin> {
        self.store.selected()
    }

    /// Catalog entries still available to drag onto the grid.
    pub fn available_catalog(&self) -> &[CatalogEntry] {
        self.catalog.available()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// On-screen size of one cell, as set by the display layer.
    pub fn cell_pixel_size(&self) -> f64 {
        self.cell_pixel_size
    }

    /// Sets the on-screen cell size. Non-positive or non-finite values are ignored.
    pub fn set_cell_pixel_size(&mut self, size: f64) {
        if !(size.is_finite() && size > 0.0) {
            tracing::warn!(size, "ignoring invalid cell pixel size");
            return;
        }
        self.cell_pixel_size = size;
    }

    /// Current drop shadow or draw preview, if a gesture is active.
    pub fn preview(&self) -> Option<PreviewRect> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Drawing(session) => Some(session.preview(
                self.store.bins(),
                &self.grid,
                &self.config,
                self.cell_pixel_size,
            )),
            Gesture::Dragging(session) => session.shadow().copied(),
        }
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            drawer: self.drawer.clone(),
            grid: self.grid,
            bins: self.store.bins().to_vec(),
            selected: self.store.selected_id(),
            cell_pixel_size: self.cell_pixel_size,
        }
    }

    /// Cell under a pixel position, or `None` without a usable cell size.
    pub(crate) fn cell_at(&self, px: f64, py: f64) -> Option<CellPos> {
        if self.cell_pixel_size <= 0.0 {
            tracing::warn!("pointer event ignored: cell pixel size not set");
            return None;
        }
        if !(px.is_finite() && py.is_finite()) {
            return None;
        }
        Some(pixel_to_cell(px, py, self.cell_pixel_size))
    }
}

impl std::fmt::Debug for LayoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutState")
            .field("grid", &self.grid)
            .field("bins", &self.store.len())
            .field("available_catalog", &self.catalog.len())
            .field("gesture", &self.gesture.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_grid() {
        let state = LayoutState::new(Drawer::new(400.0, 300.0, 50.0), Vec::new(), EngineConfig::default());
        assert_eq!((state.grid().cols, state.grid().rows), (19, 14));
        assert!(state.bins().is_empty());
        assert!(state.gesture().is_idle());
    }

    #[test]
    fn test_cell_pixel_size_rejects_invalid() {
        let mut state = LayoutState::new(Drawer::new(400.0, 300.0, 50.0), Vec::new(), EngineConfig::default());
        state.set_cell_pixel_size(24.0);
        state.set_cell_pixel_size(0.0);
        state.set_cell_pixel_size(f64::NAN);
        assert_eq!(state.cell_pixel_size(), 24.0);
        assert_eq!(state.cell_at(50.0, 23.0), Some(CellPos::new(2, 0)));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = LayoutState::new(Drawer::new(126.0, 84.0, 50.0), Vec::new(), EngineConfig::default());
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["grid"]["cols"], 6);
        assert!(json["selected"].is_null());
    }
}
