//! Data model: drawer, derived grid, placed bins and catalog entries.
//!
//! All lengths are millimeters. Bin positions are the top-left corner and
//! are grid-aligned when produced by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coords::{self, CellPos, MAX_GRID_AXIS_CELLS};
use crate::units::{self, MeasurementSystem};

/// Stable identifier of a placed bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BinId(Uuid);

impl BinId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BinId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BinId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Physical drawer footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawer {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    /// Display unit only; dimensions are always stored in mm.
    #[serde(default)]
    pub unit: MeasurementSystem,
}

impl Drawer {
    /// Creates a drawer from millimeter dimensions.
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
            unit: MeasurementSystem::Metric,
        }
    }

    /// Creates a drawer from dimensions entered in `unit`.
    pub fn from_units(width: f64, length: f64, height: f64, unit: MeasurementSystem) -> Self {
        Self {
            width: units::to_mm(width, unit),
            length: units::to_mm(length, unit),
            height: units::to_mm(height, unit),
            unit,
        }
    }

    /// Returns a copy whose width and length are at least one grid pitch.
    pub fn clamped_to(&self, pitch_mm: f64) -> Self {
        let mut drawer = self.clone();
        if drawer.width < pitch_mm || drawer.length < pitch_mm {
            tracing::warn!(
                width = drawer.width,
                length = drawer.length,
                pitch_mm,
                "drawer smaller than one grid cell, clamping"
            );
        }
        drawer.width = drawer.width.max(pitch_mm);
        drawer.length = drawer.length.max(pitch_mm);
        drawer
    }

    /// Formats the footprint in the drawer's display unit.
    pub fn display_size(&self) -> String {
        format!(
            "{} x {} {}",
            units::format_length(self.width, self.unit),
            units::format_length(self.length, self.unit),
            units::get_unit_label(self.unit)
        )
    }
}

/// Grid derived from a drawer: `cols = floor(width / pitch)`,
/// `rows = floor(length / pitch)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub cols: u32,
    pub rows: u32,
    pub pitch_mm: f64,
}

impl GridSpec {
    /// Creates a grid with explicit dimensions.
    pub fn new(cols: u32, rows: u32, pitch_mm: f64) -> Self {
        Self {
            cols,
            rows,
            pitch_mm,
        }
    }

    /// Derives the grid for a drawer.
    ///
    /// Each axis is capped at [`MAX_GRID_AXIS_CELLS`].
    pub fn from_drawer(drawer: &Drawer, pitch_mm: f64) -> Self {
        let axis = |value_mm: f64| {
            let cells = coords::mm_to_cell(value_mm, pitch_mm).max(0);
            u32::try_from(cells)
                .unwrap_or(u32::MAX)
                .min(MAX_GRID_AXIS_CELLS)
        };
        let (cols, rows) = (axis(drawer.width), axis(drawer.length));
        if cols == MAX_GRID_AXIS_CELLS || rows == MAX_GRID_AXIS_CELLS {
            tracing::warn!(
                width = drawer.width,
                length = drawer.length,
                pitch_mm,
                cols,
                rows,
                "drawer exceeds the largest supported grid, capping"
            );
        }
        Self {
            cols,
            rows,
            pitch_mm,
        }
    }

    /// Usable width in mm.
    pub fn width_mm(&self) -> f64 {
        f64::from(self.cols) * self.pitch_mm
    }

    /// Usable length in mm.
    pub fn length_mm(&self) -> f64 {
        f64::from(self.rows) * self.pitch_mm
    }

    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn mm_to_cell(&self, value_mm: f64) -> i64 {
        coords::mm_to_cell(value_mm, self.pitch_mm)
    }

    pub fn cell_to_mm(&self, cell: i64) -> f64 {
        coords::cell_to_mm(cell, self.pitch_mm)
    }

    pub fn mm_to_pixel(&self, value_mm: f64, cell_pixel_size: f64) -> f64 {
        coords::mm_to_pixel(value_mm, self.pitch_mm, cell_pixel_size)
    }

    pub fn pixel_to_mm(&self, value_px: f64, cell_pixel_size: f64) -> f64 {
        coords::pixel_to_mm(value_px, self.pitch_mm, cell_pixel_size)
    }

    pub fn contains_cell(&self, pos: CellPos) -> bool {
        pos.is_inside(self.cols, self.rows)
    }

    /// Whether grid line `index` is drawn emphasised. Display only.
    pub fn is_emphasis_line(&self, index: u32, emphasis_every: u32) -> bool {
        emphasis_every != 0 && index % emphasis_every == 0
    }
}

fn default_bin_height() -> f64 {
    21.0
}

/// A bin placed in the drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    /// Missing ids are generated on load.
    #[serde(default)]
    pub id: BinId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
    #[serde(default = "default_bin_height")]
    pub height: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorway: Option<String>,
    #[serde(default)]
    pub shadow_board: bool,
    /// Catalog entry this bin was taken from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
}

impl Bin {
    /// Creates a bin with a fresh id.
    pub fn new(x: f64, y: f64, width: f64, length: f64, height: f64) -> Self {
        Self {
            id: BinId::new(),
            x,
            y,
            width,
            length,
            height,
            name: format!("Bin {}x{}mm", width.round(), length.round()),
            color: String::new(),
            colorway: None,
            shadow_board: false,
            original_id: None,
        }
    }

    /// Returns a copy moved to `(x, y)`; identity is kept.
    pub fn at(&self, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.length
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    pub fn size(&self) -> BinSize {
        BinSize::new(self.width, self.length)
    }
}

/// Footprint of a standard bin size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinSize {
    pub width: f64,
    pub length: f64,
}

impl BinSize {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// Template in the external catalog/carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub label: String,
    pub width: f64,
    pub length: f64,
    pub color: String,
}

impl CatalogEntry {
    /// Synthesizes an entry equivalent to a placed bin.
    ///
    /// The entry id is the bin's `original_id` when present, else the bin id.
    pub fn from_bin(bin: &Bin) -> Self {
        Self {
            id: bin
                .original_id
                .clone()
                .unwrap_or_else(|| bin.id.to_string()),
            label: bin.name.clone(),
            width: bin.width,
            length: bin.length,
            color: bin.color.clone(),
        }
    }

    pub fn size(&self) -> BinSize {
        BinSize::new(self.width, self.length)
    }
}
