use drawerzen_core::coords::{cell_to_mm, mm_to_cell, mm_to_pixel, pixel_to_cell, pixel_to_mm};
use drawerzen_core::{CellPos, Drawer, GridSpec, GRID_PITCH_MM};

#[test]
fn test_pixel_to_cell_snaps_down() {
    // 20px cells: pixel 39.9 is still the second cell
    assert_eq!(pixel_to_cell(39.9, 0.0, 20.0), CellPos::new(1, 0));
    assert_eq!(pixel_to_cell(40.0, 0.0, 20.0), CellPos::new(2, 0));
}

#[test]
fn test_mm_pixel_inverse() {
    for cell_px in [12.0, 20.0, 37.5, 80.0] {
        for mm in [0.0, 21.0, 84.0, 399.0] {
            let px = mm_to_pixel(mm, GRID_PITCH_MM, cell_px);
            assert!((pixel_to_mm(px, GRID_PITCH_MM, cell_px) - mm).abs() < 1e-9);
        }
    }
}

#[test]
fn test_cells_are_whole_pitches() {
    for cell in 0..20 {
        assert_eq!(mm_to_cell(cell_to_mm(cell, GRID_PITCH_MM), GRID_PITCH_MM), cell);
    }
}

#[test]
fn test_grid_spec_conversions_match_free_functions() {
    let grid = GridSpec::from_drawer(&Drawer::new(126.0, 84.0, 40.0), GRID_PITCH_MM);
    assert_eq!((grid.cols, grid.rows), (6, 4));
    assert_eq!(grid.mm_to_cell(63.0), 3);
    assert_eq!(grid.cell_to_mm(3), 63.0);
    assert_eq!(grid.mm_to_pixel(63.0, 30.0), 90.0);
    assert_eq!(grid.pixel_to_mm(90.0, 30.0), 63.0);
    assert!(grid.contains_cell(CellPos::new(5, 3)));
    assert!(!grid.contains_cell(CellPos::new(6, 3)));
}
