//! Gap fill: generate new bins into free space.

use serde::{Deserialize, Serialize};

use drawerzen_core::{Bin, BinSize, EngineConfig, GridSpec};

use super::gaps::{find_gaps, Gap};
use crate::validator;

/// Outcome of a gap-fill run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillReport {
    /// Newly created bins, in placement order.
    pub bins: Vec<Bin>,
    /// Passes performed, including the final one that placed nothing.
    pub iterations: usize,
    /// True if the run stopped at the iteration ceiling while a bin still fit.
    pub ceiling_hit: bool,
}

/// A standard size measured in cells.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CandidateSize {
    size: BinSize,
    width_cells: u32,
    length_cells: u32,
}

/// Usable catalog sizes, largest area first, then widest, then input order.
///
/// Sizes that are not whole cells or break the bin constraints are skipped.
fn candidate_sizes(sizes: &[BinSize], grid: &GridSpec, config: &EngineConfig) -> Vec<CandidateSize> {
    let pitch = grid.pitch_mm;
    let mut candidates: Vec<CandidateSize> = sizes
        .iter()
        .filter_map(|&size| {
            if let Err(e) = validator::validate_bin_dimensions(
                size.width,
                size.length,
                pitch,
                &config.constraints,
            ) {
                tracing::warn!(width = size.width, length = size.length, "skipping catalog size: {e}");
                return None;
            }
            Some(CandidateSize {
                size,
                width_cells: (size.width / pitch).round() as u32,
                length_cells: (size.length / pitch).round() as u32,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.size
            .area()
            .total_cmp(&a.size.area())
            .then(b.size.width.total_cmp(&a.size.width))
    });
    candidates
}

/// Fills free space in `grid` with catalog sizes.
///
/// Each pass rescans the gaps against the working set (existing plus newly
/// generated bins), then places the largest size that fits the first gap
/// able to take one. The run ends when no gap remains, when a pass places
/// nothing, or after `config.max_fill_iterations` passes.
///
/// `bins` is not modified; only the new bins are returned.
pub fn generate_bins(
    bins: &[Bin],
    grid: &GridSpec,
    sizes: &[BinSize],
    config: &EngineConfig,
) -> FillReport {
    let candidates = candidate_sizes(sizes, grid, config);
    let mut working = bins.to_vec();
    let mut report = FillReport::default();

    if candidates.is_empty() {
        tracing::info!("gap fill skipped: no usable catalog sizes");
        return report;
    }

    loop {
        let gaps = find_gaps(grid, &working, config.min_gap_cells);
        let next = fill_first_gap(&gaps, &candidates, &working, grid, config, report.bins.len());

        if report.iterations >= config.max_fill_iterations {
            if next.is_some() {
                report.ceiling_hit = true;
                tracing::warn!(
                    iterations = report.iterations,
                    generated = report.bins.len(),
                    "gap fill stopped at the iteration ceiling"
                );
            }
            break;
        }
        report.iterations += 1;

        let Some(bin) = next else {
            break;
        };

        tracing::debug!(
            id = %bin.id,
            x = bin.x,
            y = bin.y,
            width = bin.width,
            length = bin.length,
            "gap fill placed bin"
        );
        working.push(bin.clone());
        report.bins.push(bin);
    }

    tracing::info!(
        generated = report.bins.len(),
        iterations = report.iterations,
        "gap fill complete"
    );
    report
}

fn fill_first_gap(
    gaps: &[Gap],
    candidates: &[CandidateSize],
    working: &[Bin],
    grid: &GridSpec,
    config: &EngineConfig,
    generated: usize,
) -> Option<Bin> {
    for gap in gaps {
        let x = grid.cell_to_mm(i64::from(gap.x));
        let y = grid.cell_to_mm(i64::from(gap.y));
        for candidate in candidates {
            if candidate.width_cells > gap.width || candidate.length_cells > gap.length {
                continue;
            }
            let bin = new_generated_bin(x, y, candidate.size, config, generated);
            if validator::is_valid_placement(&bin, working, grid, None) {
                return Some(bin);
            }
        }
    }
    None
}

fn new_generated_bin(x: f64, y: f64, size: BinSize, config: &EngineConfig, index: usize) -> Bin {
    let mut bin = Bin::new(x, y, size.width, size.length, config.default_bin_height_mm);
    bin.name = format!("Auto {}", index + 1);
    bin.color = config.palette_color(index).to_string();
    bin.colorway = Some(config.default_colorway.clone());
    bin
}
