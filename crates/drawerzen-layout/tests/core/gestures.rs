use std::cell::RefCell;
use std::rc::Rc;

use drawerzen_core::{Bin, CatalogEntry, Drawer, EngineConfig, ErrorKind};
use drawerzen_layout::{DrawOutcome, DropOutcome, FnUndoHook, LayoutState, MutationKind};

const CELL_PX: f64 = 20.0;

fn layout(catalog: Vec<CatalogEntry>) -> LayoutState {
    let mut layout = LayoutState::new(Drawer::new(400.0, 300.0, 50.0), catalog, EngineConfig::default());
    layout.set_cell_pixel_size(CELL_PX);
    layout
}

/// Pixel position at the middle of a cell.
fn px(cell: u32) -> f64 {
    f64::from(cell) * CELL_PX + CELL_PX / 2.0
}

fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: "std-84x84".to_string(),
            label: "84x84".to_string(),
            width: 84.0,
            length: 84.0,
            color: "#A8D5BA".to_string(),
        },
        CatalogEntry {
            id: "std-42x42".to_string(),
            label: "42x42".to_string(),
            width: 42.0,
            length: 42.0,
            color: "#F7C59F".to_string(),
        },
    ]
}

#[test]
fn test_draw_one_cell_rejected_two_cells_accepted() {
    let mut layout = layout(Vec::new());

    layout.pointer_down(px(3), px(3)).unwrap();
    match layout.pointer_up() {
        Some(DrawOutcome::Cancelled(e)) => assert_eq!(e.kind(), ErrorKind::SizeInvalid),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(layout.bins().is_empty());

    layout.pointer_down(px(3), px(3)).unwrap();
    layout.pointer_move(px(4), px(3)).unwrap();
    assert!(matches!(layout.pointer_up(), Some(DrawOutcome::Committed(_))));
    let bin = &layout.bins()[0];
    assert_eq!((bin.x, bin.y, bin.width, bin.length), (63.0, 63.0, 42.0, 21.0));
}

#[test]
fn test_draw_drag_backwards_normalises() {
    let mut layout = layout(Vec::new());
    layout.pointer_down(px(6), px(5)).unwrap();
    let preview = layout.pointer_move(px(3), px(2)).unwrap();
    assert_eq!(
        (preview.left, preview.top, preview.width, preview.height),
        (60.0, 40.0, 80.0, 80.0)
    );
    layout.pointer_up();
    let bin = &layout.bins()[0];
    assert_eq!((bin.x, bin.y, bin.width, bin.length), (63.0, 42.0, 84.0, 84.0));
}

#[test]
fn test_draw_over_existing_bin_is_collision() {
    let mut layout = layout(Vec::new());
    layout.add_bin(Bin::new(0.0, 0.0, 84.0, 84.0, 21.0)).unwrap();

    layout.pointer_down(px(2), px(2)).unwrap();
    let preview = layout.pointer_move(px(5), px(5)).unwrap();
    assert_eq!(preview.error_kind, Some(ErrorKind::Collision));
    match layout.pointer_up() {
        Some(DrawOutcome::Cancelled(e)) => assert_eq!(e.kind(), ErrorKind::Collision),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(layout.bins().len(), 1);
}

#[test]
fn test_carousel_round_trip() {
    let mut layout = layout(catalog());

    assert!(layout.start_drag_catalog("std-84x84"));
    let Some(DropOutcome::Placed(first)) = layout.drop_on_grid(px(2), px(1)) else {
        panic!("expected a placed bin");
    };
    let pool_before = layout.available_catalog().len();
    let placed = layout.bin(first).unwrap().clone();

    assert!(layout.start_drag_bin(first));
    let Some(DropOutcome::ReturnedToCatalog(entry)) = layout.drop_on_catalog() else {
        panic!("expected the bin back in the catalog");
    };
    assert_eq!(entry.id, "std-84x84");
    assert!(layout.bins().is_empty());

    assert!(layout.start_drag_catalog(&entry.id));
    let Some(DropOutcome::Placed(second)) = layout.drop_on_grid(px(2), px(1)) else {
        panic!("expected a placed bin");
    };
    let again = layout.bin(second).unwrap();

    assert_ne!(second, first);
    assert_eq!(
        (again.x, again.y, again.width, again.length, &again.color),
        (placed.x, placed.y, placed.width, placed.length, &placed.color)
    );
    assert_eq!(layout.available_catalog().len(), pool_before);
}

#[test]
fn test_drawn_bin_round_trips_through_catalog() {
    let mut layout = layout(Vec::new());
    layout.pointer_down(px(0), px(0)).unwrap();
    layout.pointer_move(px(2), px(1)).unwrap();
    let Some(DrawOutcome::Committed(id)) = layout.pointer_up() else {
        panic!("expected a committed bin");
    };

    assert!(layout.start_drag_bin(id));
    let Some(DropOutcome::ReturnedToCatalog(entry)) = layout.drop_on_catalog() else {
        panic!("expected the bin back in the catalog");
    };
    assert_eq!(entry.id, id.to_string());
    assert_eq!((entry.width, entry.length), (63.0, 42.0));

    assert!(layout.start_drag_catalog(&entry.id));
    assert!(matches!(layout.drop_on_grid(px(0), px(0)), Some(DropOutcome::Placed(_))));
    assert!(layout.available_catalog().is_empty());
}

#[test]
fn test_undo_hook_called_before_each_mutation() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut layout = layout(catalog());
    let log = seen.clone();
    layout.set_undo_hook(FnUndoHook(move |bins: &[Bin], kind: MutationKind| {
        log.borrow_mut().push((kind, bins.len()));
    }));

    layout.pointer_down(px(0), px(0)).unwrap();
    layout.pointer_move(px(1), px(0)).unwrap();
    let Some(DrawOutcome::Committed(drawn)) = layout.pointer_up() else {
        panic!("expected a committed bin");
    };

    assert!(layout.start_drag_catalog("std-42x42"));
    layout.drop_on_grid(px(10), px(10)).unwrap();

    assert!(layout.start_drag_bin(drawn));
    layout.drop_on_grid(px(5), px(5)).unwrap();

    // Rejected operations never reach the hook
    assert!(layout.start_drag_bin(drawn));
    layout.drop_on_grid(px(18), px(0)).unwrap();
    layout.pointer_down(px(0), px(0)).unwrap();
    layout.pointer_up();

    layout.remove_bin(drawn).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (MutationKind::Draw, 0),
            (MutationKind::Drop, 1),
            (MutationKind::Move, 2),
            (MutationKind::Remove, 2),
        ]
    );
}
