use drawerzen_core::{Bin, Drawer, EngineConfig, ErrorKind, GridSpec, LayoutError, GRID_PITCH_MM};
use drawerzen_layout::validator::validate_placement;
use drawerzen_layout::{check_bounds, is_valid_placement, validate_bin_size, LayoutState};

fn drawer_grid() -> GridSpec {
    GridSpec::from_drawer(&Drawer::new(400.0, 300.0, 50.0), GRID_PITCH_MM)
}

#[test]
fn test_overlapping_bin_is_rejected_with_collision() {
    let mut layout = LayoutState::new(Drawer::new(400.0, 300.0, 50.0), Vec::new(), EngineConfig::default());
    assert_eq!((layout.grid().cols, layout.grid().rows), (19, 14));

    let a = layout.add_bin(Bin::new(0.0, 0.0, 84.0, 84.0, 21.0)).unwrap();
    let err = layout.add_bin(Bin::new(42.0, 42.0, 84.0, 84.0, 21.0)).unwrap_err();
    assert_eq!(err, LayoutError::Collision { other: a });
    assert_eq!(layout.bins().len(), 1);
}

#[test]
fn test_full_grid_bin_is_valid() {
    let grid = drawer_grid();
    let full = Bin::new(0.0, 0.0, grid.width_mm(), grid.length_mm(), 21.0);
    assert!(is_valid_placement(&full, &[], &grid, None));
}

#[test]
fn test_one_cell_larger_is_out_of_bounds() {
    let grid = drawer_grid();
    let wider = Bin::new(0.0, 0.0, grid.width_mm() + GRID_PITCH_MM, grid.length_mm(), 21.0);
    let longer = Bin::new(0.0, 0.0, grid.width_mm(), grid.length_mm() + GRID_PITCH_MM, 21.0);
    for bin in [wider, longer] {
        assert!(!check_bounds(&bin, &grid));
        let err = validate_placement(&bin, &[], &grid, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }
}

#[test]
fn test_minimum_draw_size() {
    let constraints = EngineConfig::default().constraints;
    assert!(!validate_bin_size(1, 1, GRID_PITCH_MM, &constraints));
    assert!(validate_bin_size(2, 1, GRID_PITCH_MM, &constraints));
}
