//! Auto-sort and gap fill applied to layout state.

use drawerzen_core::BinSize;

use super::LayoutState;
use crate::gesture::Gesture;
use crate::history::MutationKind;
use crate::packing::{self, FillReport, SortResult};

impl LayoutState {
    fn end_gesture_for_batch(&mut self) {
        if !self.gesture.is_idle() {
            tracing::debug!(gesture = self.gesture.name(), "gesture ended by batch operation");
            self.gesture = Gesture::Idle;
        }
    }

    /// Repacks the placed bins. Bins that no longer fit go back to the catalog pool.
    pub fn auto_sort(&mut self) -> SortResult {
        if self.store.is_empty() {
            return SortResult::default();
        }
        self.end_gesture_for_batch();

        let result = packing::auto_sort(self.store.bins(), &self.grid);
        self.push_undo(MutationKind::AutoSort);
        self.store.replace_all(result.placed_bins.clone());
        for bin in &result.unplaced_bins {
            let entry = self.catalog.reinstate(bin);
            tracing::debug!(entry = %entry.id, "unplaced bin returned to catalog");
        }
        result
    }

    /// Fills free space with the configured standard sizes.
    pub fn generate_bins(&mut self) -> FillReport {
        let sizes = self.config.standard_sizes.clone();
        self.generate_bins_with(&sizes)
    }

    /// Fills free space with the given catalog sizes.
    pub fn generate_bins_with(&mut self, sizes: &[BinSize]) -> FillReport {
        self.end_gesture_for_batch();
        let mut report = packing::generate_bins(self.store.bins(), &self.grid, sizes, &self.config);
        if report.bins.is_empty() {
            return report;
        }

        self.push_undo(MutationKind::GenerateBins);
        report.bins.retain(|bin| match self.store.add(bin.clone(), &self.grid) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(id = %bin.id, error = %e, "generated bin rejected");
                false
            }
        });
        report
    }
}
