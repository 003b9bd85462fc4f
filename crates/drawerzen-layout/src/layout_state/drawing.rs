//! Draw-to-create pointer handling for layout state.

use super::LayoutState;
use crate::gesture::{DrawOutcome, DrawSession, Gesture, PreviewRect};
use crate::history::MutationKind;

impl LayoutState {
    /// Starts drawing at a pixel position.
    ///
    /// Ignored (returns `None`) while another gesture is active, or when the
    /// position is not over a grid cell.
    pub fn pointer_down(&mut self, px: f64, py: f64) -> Option<PreviewRect> {
        if !self.gesture.is_idle() {
            tracing::debug!(gesture = self.gesture.name(), "pointer down ignored");
            return None;
        }
        let cell = self.cell_at(px, py)?;
        if !self.grid.contains_cell(cell) {
            return None;
        }

        let session = DrawSession::begin(cell);
        self.gesture = Gesture::Drawing(session);
        tracing::debug!(x = cell.x, y = cell.y, "drawing started");
        Some(session.preview(
            self.store.bins(),
            &self.grid,
            &self.config,
            self.cell_pixel_size,
        ))
    }

    /// Extends the rectangle being drawn. Never mutates the store.
    pub fn pointer_move(&mut self, px: f64, py: f64) -> Option<PreviewRect> {
        if !self.gesture.is_drawing() {
            return None;
        }
        let cell = self.cell_at(px, py)?;
        let Gesture::Drawing(session) = &mut self.gesture else {
            return None;
        };
        session.extend_to(cell, &self.grid);
        let session = *session;
        Some(session.preview(
            self.store.bins(),
            &self.grid,
            &self.config,
            self.cell_pixel_size,
        ))
    }

    /// Ends the draw gesture, creating the bin if the rectangle is valid.
    pub fn pointer_up(&mut self) -> Option<DrawOutcome> {
        let Gesture::Drawing(session) = self.gesture else {
            return None;
        };
        self.gesture = Gesture::Idle;

        let bin = match session.evaluate(self.store.bins(), &self.grid, &self.config) {
            Ok(bin) => bin,
            Err(e) => {
                tracing::debug!(error = %e, "drawing cancelled");
                return Some(DrawOutcome::Cancelled(e));
            }
        };

        self.push_undo(MutationKind::Draw);
        match self.store.add(bin, &self.grid) {
            Ok(id) => {
                tracing::debug!(%id, "drawing committed");
                Some(DrawOutcome::Committed(id))
            }
            Err(e) => Some(DrawOutcome::Cancelled(e)),
        }
    }

    /// Abandons the draw gesture. Returns false if no drawing was active.
    pub fn cancel_drawing(&mut self) -> bool {
        if !self.gesture.is_drawing() {
            return false;
        }
        self.gesture = Gesture::Idle;
        tracing::debug!("drawing cancelled");
        true
    }
}
