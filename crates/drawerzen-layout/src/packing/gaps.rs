//! Maximal empty rectangle scan.
//!
//! A gap is a free rectangle that cannot grow in any direction without
//! covering an occupied cell or leaving the grid. Gaps may overlap each
//! other.
//!
//! Every free cell is tried as a top-left corner. Walking down from it, the
//! width is the running minimum of the per-row free runs; a rectangle is
//! emitted whenever the next row cannot keep that width. Rectangles that
//! could still grow left or up are discarded.

use drawerzen_core::{Bin, CellRect, GridSpec};

use super::occupancy::OccupancyGrid;

/// A free rectangle of cells.
pub type Gap = CellRect;

/// Finds every maximal gap covering at least `min_cells` cells.
///
/// Order: area descending, then top row, then left column, then width
/// descending.
pub fn find_gaps(grid: &GridSpec, bins: &[Bin], min_cells: u32) -> Vec<Gap> {
    let occupancy = OccupancyGrid::from_bins(grid, bins);
    find_gaps_in(&occupancy, min_cells)
}

/// [`find_gaps`] over a prepared occupancy map.
pub fn find_gaps_in(occupancy: &OccupancyGrid, min_cells: u32) -> Vec<Gap> {
    let cols = occupancy.cols() as usize;
    let rows = occupancy.rows();
    let runs = occupancy.free_runs();
    let run_at = |x: u32, y: u32| runs[y as usize * cols + x as usize];

    let mut gaps = Vec::new();
    for y in 0..rows {
        for x in 0..occupancy.cols() {
            let mut width = run_at(x, y);
            if width == 0 {
                continue;
            }
            for bottom in y..rows {
                width = width.min(run_at(x, bottom));
                if width == 0 {
                    break;
                }
                let next = if bottom + 1 < rows {
                    run_at(x, bottom + 1)
                } else {
                    0
                };
                if next >= width {
                    continue;
                }
                let gap = CellRect::new(x, y, width, bottom - y + 1);
                if gap.area() >= u64::from(min_cells) && is_maximal(occupancy, &gap) {
                    gaps.push(gap);
                }
            }
        }
    }

    sort_gaps(&mut gaps);
    gaps
}

/// Right and down maximality hold by construction; checks left and up.
fn is_maximal(occupancy: &OccupancyGrid, gap: &Gap) -> bool {
    let left_blocked =
        gap.x == 0 || (gap.y..gap.y + gap.length).any(|y| occupancy.is_occupied(gap.x - 1, y));
    let top_blocked =
        gap.y == 0 || (gap.x..gap.x + gap.width).any(|x| occupancy.is_occupied(x, gap.y - 1));
    left_blocked && top_blocked
}

fn sort_gaps(gaps: &mut [Gap]) {
    gaps.sort_by(|a, b| {
        b.area()
            .cmp(&a.area())
            .then(a.y.cmp(&b.y))
            .then(a.x.cmp(&b.x))
            .then(b.width.cmp(&a.width))
    });
}
