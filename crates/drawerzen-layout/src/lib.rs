//! # DrawerZen Layout
//!
//! Grid placement and packing engine for drawer bin layouts.
//!
//! ## Core Components
//!
//! - **Validator**: bounds, collision and size rules shared by every path
//!   that places a bin
//! - **Bin Store**: the placed bins and the current selection
//! - **Catalog Pool**: catalog entries not yet placed on the grid
//! - **Gestures**: draw-to-create and drag-to-move state machines
//! - **Packing**: auto-sort and gap-fill batch operations
//! - **Layout State**: the facade that owns all of the above
//!
//! ## Architecture
//!
//! ```text
//! LayoutState
//!   ├── BinStore (placed bins, selection)
//!   ├── CatalogPool (available entries)
//!   ├── Gesture (Idle | Drawing | Dragging)
//!   └── UndoHook (called before each mutation)
//!
//! validator  <- gesture sessions, bin store, packing
//! packing    (pure functions over bins and a grid)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drawerzen_core::{Bin, Drawer, EngineConfig, ErrorKind};
//! use drawerzen_layout::LayoutState;
//!
//! let mut layout = LayoutState::new(Drawer::new(400.0, 300.0, 50.0), Vec::new(), EngineConfig::default());
//! layout.add_bin(Bin::new(0.0, 0.0, 84.0, 84.0, 21.0)).unwrap();
//!
//! let err = layout.add_bin(Bin::new(42.0, 42.0, 84.0, 84.0, 21.0)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Collision);
//! ```

pub mod bin_store;
pub mod catalog;
pub mod gesture;
pub mod history;
pub mod layout_state;
pub mod packing;
pub mod validator;

pub use bin_store::BinStore;
pub use catalog::CatalogPool;
pub use gesture::{DragPayload, DragSession, DrawOutcome, DrawSession, DropOutcome, Gesture, PreviewRect};
pub use history::{FnUndoHook, MutationKind, NoUndo, SnapshotRecorder, UndoHook, UndoSnapshot};
pub use layout_state::{BinUpdate, LayoutSnapshot, LayoutState};
pub use packing::{auto_sort, find_gaps, generate_bins, FillReport, Gap, OccupancyGrid, SortResult};
pub use validator::{check_bounds, check_collision, is_valid_placement, validate_bin_size};
