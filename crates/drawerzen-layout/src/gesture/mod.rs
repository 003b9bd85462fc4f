//! Pointer gestures.
//!
//! A gesture is an explicit state machine: the layout is either idle,
//! drawing a new bin, or dragging one. Only one gesture can be active, so
//! drawing while dragging cannot be represented.
//!
//! Sessions only compute previews. The store is mutated when a gesture
//! ends, by the caller that owns it.

mod drag;
mod draw;

pub use drag::{DragPayload, DragSession, DropOutcome};
pub use draw::{DrawOutcome, DrawSession};

use serde::{Deserialize, Serialize};

use drawerzen_core::{Bin, ErrorKind, GridSpec};

/// Live preview of a gesture in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Why the previewed placement would be rejected, if it would.
    pub error_kind: Option<ErrorKind>,
}

impl PreviewRect {
    /// Projects a bin footprint onto the display.
    pub fn from_bin(bin: &Bin, grid: &GridSpec, cell_pixel_size: f64, error_kind: Option<ErrorKind>) -> Self {
        Self {
            left: grid.mm_to_pixel(bin.x, cell_pixel_size),
            top: grid.mm_to_pixel(bin.y, cell_pixel_size),
            width: grid.mm_to_pixel(bin.width, cell_pixel_size),
            height: grid.mm_to_pixel(bin.length, cell_pixel_size),
            error_kind,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error_kind.is_none()
    }
}

/// The active pointer gesture.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing(DrawSession),
    Dragging(DragSession),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing(_) => "drawing",
            Self::Dragging(_) => "dragging",
        }
    }
}
