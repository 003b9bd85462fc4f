use proptest::prelude::*;

use drawerzen_core::{Bin, BinSize, EngineConfig, GridSpec, GRID_PITCH_MM};
use drawerzen_layout::validator::rects_overlap;
use drawerzen_layout::{auto_sort, generate_bins, is_valid_placement};

const P: f64 = GRID_PITCH_MM;

fn cells(n: u32) -> f64 {
    f64::from(n) * P
}

/// A bin on whole cells, possibly hanging off a `cols x rows` grid.
fn bin_strategy(cols: u32, rows: u32) -> impl Strategy<Value = Bin> {
    (0..cols + 2, 0..rows + 2, 1u32..6, 1u32..6)
        .prop_map(|(x, y, w, l)| Bin::new(cells(x), cells(y), cells(w), cells(l), 21.0))
}

fn grid_strategy() -> impl Strategy<Value = GridSpec> {
    (1u32..=50, 1u32..=50).prop_map(|(cols, rows)| GridSpec::new(cols, rows, P))
}

fn no_overlaps(bins: &[Bin]) -> bool {
    bins.iter()
        .enumerate()
        .all(|(i, a)| bins[i + 1..].iter().all(|b| !rects_overlap(a, b)))
}

fn in_bounds(bin: &Bin, grid: &GridSpec) -> bool {
    bin.x >= 0.0 && bin.y >= 0.0 && bin.right() <= grid.width_mm() && bin.bottom() <= grid.length_mm()
}

proptest! {
    #[test]
    fn valid_placement_matches_geometry(
        candidate in bin_strategy(12, 12),
        others in prop::collection::vec(bin_strategy(12, 12), 0..8),
    ) {
        let grid = GridSpec::new(12, 12, P);
        let expected = in_bounds(&candidate, &grid) && others.iter().all(|o| {
            candidate.right() <= o.x
                || o.right() <= candidate.x
                || candidate.bottom() <= o.y
                || o.bottom() <= candidate.y
        });
        prop_assert_eq!(is_valid_placement(&candidate, &others, &grid, None), expected);
    }

    #[test]
    fn auto_sort_conserves_bins(
        grid in grid_strategy(),
        bins in prop::collection::vec(bin_strategy(20, 20), 0..30),
    ) {
        let result = auto_sort(&bins, &grid);
        prop_assert_eq!(result.placed_bins.len() + result.unplaced_bins.len(), bins.len());

        let mut ids: Vec<_> = result
            .placed_bins
            .iter()
            .chain(&result.unplaced_bins)
            .map(|b| b.id)
            .collect();
        let mut expected: Vec<_> = bins.iter().map(|b| b.id).collect();
        ids.sort();
        expected.sort();
        prop_assert_eq!(ids, expected);

        prop_assert!(no_overlaps(&result.placed_bins));
        prop_assert!(result.placed_bins.iter().all(|b| in_bounds(b, &grid)));
    }

    #[test]
    fn auto_sort_is_idempotent(
        grid in grid_strategy(),
        bins in prop::collection::vec(bin_strategy(20, 20), 0..20),
    ) {
        let first = auto_sort(&bins, &grid);
        let second = auto_sort(&first.placed_bins, &grid);
        prop_assert!(second.unplaced_bins.is_empty());
        prop_assert_eq!(second.placed_bins, first.placed_bins);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generate_bins_terminates_without_overlap(
        grid in grid_strategy(),
        existing in prop::collection::vec(bin_strategy(50, 50), 0..10),
        size_cells in prop::collection::vec((1u32..8, 1u32..8), 1..6),
    ) {
        let config = EngineConfig::default();
        let sizes: Vec<_> = size_cells
            .iter()
            .map(|&(w, l)| BinSize::new(cells(w), cells(l)))
            .collect();
        let existing = auto_sort(&existing, &grid).placed_bins;

        let report = generate_bins(&existing, &grid, &sizes, &config);
        prop_assert!(report.iterations <= config.max_fill_iterations);
        prop_assert!(report.bins.iter().all(|b| in_bounds(b, &grid)));

        let mut all = existing.clone();
        all.extend(report.bins.iter().cloned());
        prop_assert!(no_overlaps(&all));
    }
}
