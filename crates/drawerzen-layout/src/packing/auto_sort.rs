//! Auto-sort: repack placed bins towards the top-left corner.

use serde::{Deserialize, Serialize};

use drawerzen_core::{Bin, GridSpec};

use crate::validator;

/// Outcome of an auto-sort pass.
///
/// `placed_bins` is in placement order, so sorting it again reproduces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortResult {
    pub placed_bins: Vec<Bin>,
    pub unplaced_bins: Vec<Bin>,
}

impl SortResult {
    pub fn len(&self) -> usize {
        self.placed_bins.len() + self.unplaced_bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Orders bins for packing: larger area first, then wider, then input order.
pub fn packing_order(bins: &[Bin]) -> Vec<&Bin> {
    let mut ordered: Vec<&Bin> = bins.iter().collect();
    ordered.sort_by(|a, b| {
        b.area()
            .total_cmp(&a.area())
            .then(b.width.total_cmp(&a.width))
    });
    ordered
}

/// Repacks `bins` into `grid`, first-fit in row-major order.
///
/// Each bin keeps its id, size and attributes; only `x` and `y` change.
/// Bins that fit nowhere are returned in `unplaced_bins`, never dropped.
pub fn auto_sort(bins: &[Bin], grid: &GridSpec) -> SortResult {
    let mut result = SortResult::default();

    for bin in packing_order(bins) {
        match first_fit(bin, &result.placed_bins, grid) {
            Some(placed) => {
                tracing::debug!(id = %placed.id, x = placed.x, y = placed.y, "auto-sort placed bin");
                result.placed_bins.push(placed);
            }
            None => {
                tracing::debug!(id = %bin.id, width = bin.width, length = bin.length, "auto-sort could not place bin");
                result.unplaced_bins.push(bin.clone());
            }
        }
    }

    tracing::info!(
        placed = result.placed_bins.len(),
        unplaced = result.unplaced_bins.len(),
        "auto-sort complete"
    );
    result
}

/// First row-major cell where `bin` fits against `committed`.
fn first_fit(bin: &Bin, committed: &[Bin], grid: &GridSpec) -> Option<Bin> {
    if bin.width > grid.width_mm() || bin.length > grid.length_mm() {
        return None;
    }
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let candidate = bin.at(
                grid.cell_to_mm(i64::from(col)),
                grid.cell_to_mm(i64::from(row)),
            );
            if validator::is_valid_placement(&candidate, committed, grid, None) {
                return Some(candidate);
            }
        }
    }
    None
}
