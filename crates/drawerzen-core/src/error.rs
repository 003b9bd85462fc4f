//! Error handling for DrawerZen
//!
//! Provides the error types shared by every layer of the engine:
//! - Layout errors (placement validation, unknown bins)
//! - Configuration errors (loading, parsing, validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::BinId;

/// Coarse classification of a rejected placement.
///
/// This is what previews carry and what a UI maps to a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Candidate rectangle exceeds the grid extents.
    OutOfBounds,
    /// Candidate rectangle overlaps an existing bin.
    Collision,
    /// Below the minimum area or outside the width/length constraints.
    SizeInvalid,
    /// Operation referenced a bin id that is not placed.
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::Collision => write!(f, "collision"),
            Self::SizeInvalid => write!(f, "invalid size"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

/// Which size rule a rejected rectangle broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeViolation {
    /// At most one cell of area.
    Degenerate,
    /// Narrower or shorter than the configured minimum.
    TooSmall,
    /// Wider or longer than the configured maximum.
    TooLarge,
    /// Axes are in range but the area is under the minimum.
    AreaTooSmall,
    /// Dimensions are not whole multiples of the grid pitch.
    Unaligned,
}

impl fmt::Display for SizeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate => write!(f, "a bin must cover more than one cell"),
            Self::TooSmall => write!(f, "below the minimum bin size"),
            Self::TooLarge => write!(f, "exceeds the maximum bin size"),
            Self::AreaTooSmall => write!(f, "below the minimum bin area"),
            Self::Unaligned => write!(f, "not a whole number of grid cells"),
        }
    }
}

/// Layout error type
///
/// Returned by every mutating entry point of the engine. A failed operation
/// leaves the layout unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Candidate rectangle exceeds the grid extents
    #[error("Bin at ({x}, {y}) sized {width}x{length}mm exceeds the {grid_width}x{grid_length}mm grid")]
    OutOfBounds {
        /// Left edge in mm.
        x: f64,
        /// Top edge in mm.
        y: f64,
        /// Width in mm.
        width: f64,
        /// Length in mm.
        length: f64,
        /// Usable grid width in mm.
        grid_width: f64,
        /// Usable grid length in mm.
        grid_length: f64,
    },

    /// Bin origin does not sit on a grid line
    #[error("Bin origin ({x}, {y}) is not on the {pitch}mm grid")]
    OffGrid {
        /// Left edge in mm.
        x: f64,
        /// Top edge in mm.
        y: f64,
        /// Grid pitch in mm.
        pitch: f64,
    },

    /// Candidate rectangle overlaps a placed bin
    #[error("Cannot place bin here - overlaps with bin {other}")]
    Collision {
        /// The bin that was hit first.
        other: BinId,
    },

    /// Candidate dimensions break the bin constraints
    #[error("Invalid bin size {width}x{length}mm: {violation}")]
    SizeInvalid {
        /// Width in mm.
        width: f64,
        /// Length in mm.
        length: f64,
        /// The rule that was broken.
        violation: SizeViolation,
    },

    /// Bin id is not part of the layout
    #[error("Bin {0} not found")]
    NotFound(BinId),
}

impl LayoutError {
    /// Returns the coarse error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfBounds { .. } | Self::OffGrid { .. } => ErrorKind::OutOfBounds,
            Self::Collision { .. } => ErrorKind::Collision,
            Self::SizeInvalid { .. } => ErrorKind::SizeInvalid,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Errors related to engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
