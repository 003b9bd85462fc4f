//! # DrawerZen Core
//!
//! Core types and utilities for the DrawerZen layout engine.
//! Provides the drawer/grid/bin data model, the coordinate system that maps
//! millimeters to grid cells and display pixels, engine configuration and
//! the error types shared by every layer.

pub mod config;
pub mod coords;
pub mod error;
pub mod model;
pub mod units;

pub use config::{BinConstraints, EngineConfig};
pub use coords::{CellPos, CellRect, EMPHASIS_PITCH_MM, GRID_PITCH_MM, MAX_GRID_AXIS_CELLS};
pub use error::{
    ConfigError, ConfigResult, ErrorKind, LayoutError, LayoutResult, SizeViolation,
};
pub use model::{Bin, BinId, BinSize, CatalogEntry, Drawer, GridSpec};
pub use units::MeasurementSystem;
