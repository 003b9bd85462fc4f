//! Drag and drop for layout state.

use drawerzen_core::{BinId, LayoutError};

use super::LayoutState;
use crate::gesture::{DragPayload, DragSession, DropOutcome, Gesture, PreviewRect};
use crate::history::MutationKind;

impl LayoutState {
    /// Topmost placed bin under a pixel position.
    pub fn bin_at(&self, px: f64, py: f64) -> Option<BinId> {
        if self.cell_pixel_size <= 0.0 {
            return None;
        }
        let x = self.grid.pixel_to_mm(px, self.cell_pixel_size);
        let y = self.grid.pixel_to_mm(py, self.cell_pixel_size);
        self.store
            .bins()
            .iter()
            .rev()
            .find(|b| x >= b.x && x < b.right() && y >= b.y && y < b.bottom())
            .map(|b| b.id)
    }

    /// Starts dragging a placed bin and selects it.
    ///
    /// Returns false if another gesture is active or the bin is unknown.
    pub fn start_drag_bin(&mut self, id: BinId) -> bool {
        if !self.gesture.is_idle() {
            tracing::debug!(gesture = self.gesture.name(), "drag start ignored");
            return false;
        }
        let Some(bin) = self.store.get(id).cloned() else {
            return false;
        };
        self.store.clear_selection();
        if self.store.select(id).is_err() {
            return false;
        }
        self.gesture = Gesture::Dragging(DragSession::new(DragPayload::Placed(bin)));
        tracing::debug!(%id, "drag started");
        true
    }

    /// Starts dragging an available catalog entry.
    ///
    /// Returns false if another gesture is active or the entry is not available.
    pub fn start_drag_catalog(&mut self, entry_id: &str) -> bool {
        if !self.gesture.is_idle() {
            tracing::debug!(gesture = self.gesture.name(), "drag start ignored");
            return false;
        }
        let Some(entry) = self.catalog.find_available(entry_id).cloned() else {
            return false;
        };
        self.gesture = Gesture::Dragging(DragSession::new(DragPayload::Catalog(entry)));
        tracing::debug!(entry = entry_id, "catalog drag started");
        true
    }

    /// Updates the drop shadow for the pointer at a pixel position over the grid.
    pub fn drag_hover(&mut self, px: f64, py: f64) -> Option<PreviewRect> {
        if !self.gesture.is_dragging() {
            return None;
        }
        let cell = self.cell_at(px, py)?;
        let Gesture::Dragging(session) = &mut self.gesture else {
            return None;
        };
        Some(session.hover(
            cell,
            self.store.bins(),
            &self.grid,
            &self.config,
            self.cell_pixel_size,
        ))
    }

    /// The pointer left the grid while dragging.
    pub fn drag_leave(&mut self) {
        if let Gesture::Dragging(session) = &mut self.gesture {
            session.clear_shadow();
        }
    }

    fn take_drag(&mut self) -> Option<DragSession> {
        if !self.gesture.is_dragging() {
            return None;
        }
        match std::mem::take(&mut self.gesture) {
            Gesture::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Drops over the grid at a pixel position.
    ///
    /// A placed bin moves in place. A catalog entry becomes a new bin and
    /// leaves the available pool. An invalid drop changes nothing.
    pub fn drop_on_grid(&mut self, px: f64, py: f64) -> Option<DropOutcome> {
        let session = self.take_drag()?;
        let Some(cell) = self.cell_at(px, py) else {
            return Some(DropOutcome::Cancelled);
        };

        let candidate = match session.evaluate(cell, self.store.bins(), &self.grid, &self.config) {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::debug!(error = %e, "drop reverted");
                return Some(DropOutcome::Reverted(e));
            }
        };

        let outcome = match session.into_payload() {
            DragPayload::Placed(bin) => {
                if !self.store.contains(bin.id) {
                    return Some(DropOutcome::Reverted(LayoutError::NotFound(bin.id)));
                }
                self.push_undo(MutationKind::Move);
                match self.store.move_to(bin.id, candidate.x, candidate.y, &self.grid) {
                    Ok(()) => DropOutcome::Moved(bin.id),
                    Err(e) => DropOutcome::Reverted(e),
                }
            }
            DragPayload::Catalog(entry) => {
                self.push_undo(MutationKind::Drop);
                match self.store.add(candidate, &self.grid) {
                    Ok(id) => {
                        if self.catalog.take(&entry.id).is_none() {
                            tracing::warn!(entry = %entry.id, "dropped entry was no longer available");
                        }
                        DropOutcome::Placed(id)
                    }
                    Err(e) => DropOutcome::Reverted(e),
                }
            }
        };
        tracing::debug!(?outcome, "drop on grid");
        Some(outcome)
    }

    /// Drops over the catalog: a placed bin is removed and its entry reinstated.
    pub fn drop_on_catalog(&mut self) -> Option<DropOutcome> {
        let session = self.take_drag()?;
        let DragPayload::Placed(bin) = session.into_payload() else {
            return Some(DropOutcome::Cancelled);
        };
        if !self.store.contains(bin.id) {
            return Some(DropOutcome::Reverted(LayoutError::NotFound(bin.id)));
        }

        self.push_undo(MutationKind::ReturnToCatalog);
        let outcome = match self.store.remove(bin.id) {
            Ok(removed) => DropOutcome::ReturnedToCatalog(self.catalog.reinstate(&removed)),
            Err(e) => DropOutcome::Reverted(e),
        };
        tracing::debug!(?outcome, "drop on catalog");
        Some(outcome)
    }

    /// Ends a drag outside any drop target.
    pub fn cancel_drag(&mut self) -> Option<DropOutcome> {
        self.take_drag()?;
        tracing::debug!("drag cancelled");
        Some(DropOutcome::Cancelled)
    }
}
