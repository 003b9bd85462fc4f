use drawerzen_core::{Bin, BinSize, CatalogEntry, Drawer, EngineConfig, GridSpec, GRID_PITCH_MM};
use drawerzen_layout::{auto_sort, generate_bins, LayoutState};

fn footprint(bins: &[Bin]) -> Vec<(f64, f64, f64, f64)> {
    bins.iter().map(|b| (b.x, b.y, b.width, b.length)).collect()
}

#[test]
fn test_gap_fill_is_deterministic() {
    let grid = GridSpec::from_drawer(&Drawer::new(126.0, 84.0, 50.0), GRID_PITCH_MM);
    assert_eq!((grid.cols, grid.rows), (6, 4));
    let config = EngineConfig::default();
    let sizes = [
        BinSize::new(84.0, 84.0),
        BinSize::new(63.0, 63.0),
        BinSize::new(42.0, 42.0),
    ];

    let first = generate_bins(&[], &grid, &sizes, &config);
    let large: Vec<_> = first.bins.iter().filter(|b| b.width == 84.0).collect();
    assert_eq!(large.len(), 1);
    assert_eq!(
        footprint(&first.bins),
        vec![
            (0.0, 0.0, 84.0, 84.0),
            (84.0, 0.0, 42.0, 42.0),
            (84.0, 42.0, 42.0, 42.0),
        ]
    );

    for _ in 0..5 {
        let again = generate_bins(&[], &grid, &sizes, &config);
        assert_eq!(footprint(&again.bins), footprint(&first.bins));
        let names: Vec<_> = again.bins.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Auto 1", "Auto 2", "Auto 3"]);
    }
}

#[test]
fn test_gap_fill_sorts_catalog_sizes() {
    let grid = GridSpec::new(6, 4, GRID_PITCH_MM);
    let config = EngineConfig::default();
    let ascending = [
        BinSize::new(42.0, 42.0),
        BinSize::new(63.0, 63.0),
        BinSize::new(84.0, 84.0),
    ];
    let descending = [
        BinSize::new(84.0, 84.0),
        BinSize::new(63.0, 63.0),
        BinSize::new(42.0, 42.0),
    ];
    assert_eq!(
        footprint(&generate_bins(&[], &grid, &ascending, &config).bins),
        footprint(&generate_bins(&[], &grid, &descending, &config).bins)
    );
}

#[test]
fn test_auto_sort_compacts_layout() {
    let grid = GridSpec::new(10, 6, GRID_PITCH_MM);
    let bins = vec![
        Bin::new(147.0, 84.0, 42.0, 42.0, 21.0),
        Bin::new(0.0, 84.0, 84.0, 42.0, 21.0),
        Bin::new(84.0, 0.0, 63.0, 63.0, 21.0),
    ];
    let result = auto_sort(&bins, &grid);
    assert!(result.unplaced_bins.is_empty());
    assert_eq!(
        footprint(&result.placed_bins),
        vec![
            (0.0, 0.0, 63.0, 63.0),
            (63.0, 0.0, 84.0, 42.0),
            (147.0, 0.0, 42.0, 42.0),
        ]
    );
    let ids: Vec<_> = result.placed_bins.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![bins[2].id, bins[1].id, bins[0].id]);
}

#[test]
fn test_layout_auto_sort_returns_unplaced_to_catalog() {
    let entry = CatalogEntry {
        id: "tray".to_string(),
        label: "Tray".to_string(),
        width: 21.0,
        length: 42.0,
        color: "#C3B1E1".to_string(),
    };
    let mut layout = LayoutState::new(Drawer::new(63.0, 63.0, 50.0), vec![entry], EngineConfig::default());
    layout.set_cell_pixel_size(10.0);
    assert!(layout.start_drag_catalog("tray"));
    layout.drop_on_grid(5.0, 15.0).unwrap();
    assert!(layout.available_catalog().is_empty());

    // Pinwheel around the centre cell; first-fit cannot rebuild it
    layout.add_bin(Bin::new(0.0, 0.0, 42.0, 21.0, 21.0)).unwrap();
    let stranded = layout.add_bin(Bin::new(42.0, 0.0, 21.0, 42.0, 21.0)).unwrap();
    layout.add_bin(Bin::new(21.0, 42.0, 42.0, 21.0, 21.0)).unwrap();

    let result = layout.auto_sort();
    assert_eq!(result.len(), 4);
    assert_eq!(result.unplaced_bins.len(), 1);
    assert_eq!(result.unplaced_bins[0].id, stranded);
    assert_eq!(layout.bins().len(), 3);
    assert!(layout.bin(stranded).is_none());

    let pool = layout.available_catalog();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].id, stranded.to_string());
    assert_eq!((pool[0].width, pool[0].length), (21.0, 42.0));
}

#[test]
fn test_layout_generate_uses_configured_sizes() {
    let mut layout = LayoutState::new(Drawer::new(400.0, 300.0, 50.0), Vec::new(), EngineConfig::default());
    let report = layout.generate_bins();
    assert!(!report.bins.is_empty());
    assert!(!report.ceiling_hit);
    assert_eq!(layout.bins().len(), report.bins.len());
    assert_eq!(layout.bins()[0].width, 168.0);
    assert_eq!(layout.bins()[0].length, 168.0);
}
