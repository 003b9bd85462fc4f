//! Placement validation.
//!
//! Stateless predicates shared by every mutation path: the store entry
//! points, both gesture controllers and the packing engine. Nothing else in
//! the crate computes rectangle overlap.
//!
//! Rectangles are half-open: two bins that only share an edge do not
//! collide.

use drawerzen_core::coords::is_pitch_multiple;
use drawerzen_core::{Bin, BinConstraints, BinId, GridSpec, LayoutError, LayoutResult, SizeViolation};

/// Returns true if the two bins overlap with nonzero area.
pub fn rects_overlap(a: &Bin, b: &Bin) -> bool {
    !(a.right() <= b.x || a.x >= b.right() || a.bottom() <= b.y || a.y >= b.bottom())
}

/// Returns true if all four corners of `bin` lie inside the grid.
pub fn check_bounds(bin: &Bin, grid: &GridSpec) -> bool {
    bin.x >= 0.0
        && bin.y >= 0.0
        && bin.right() <= grid.width_mm()
        && bin.bottom() <= grid.length_mm()
}

/// Returns the first bin in `bins` (other than `exclude`) that `bin` overlaps.
pub fn find_collision<'a>(bin: &Bin, bins: &'a [Bin], exclude: Option<BinId>) -> Option<&'a Bin> {
    bins.iter()
        .filter(|other| Some(other.id) != exclude)
        .find(|other| rects_overlap(bin, other))
}

/// Returns true if `bin` overlaps any bin in `bins` other than `exclude`.
pub fn check_collision(bin: &Bin, bins: &[Bin], exclude: Option<BinId>) -> bool {
    find_collision(bin, bins, exclude).is_some()
}

/// Returns true if the bin's origin sits on a grid line on both axes.
pub fn check_alignment(bin: &Bin, grid: &GridSpec) -> bool {
    is_pitch_multiple(bin.x, grid.pitch_mm) && is_pitch_multiple(bin.y, grid.pitch_mm)
}

/// Rejects a bin whose origin is between grid lines.
pub fn validate_alignment(bin: &Bin, grid: &GridSpec) -> LayoutResult<()> {
    if check_alignment(bin, grid) {
        Ok(())
    } else {
        Err(LayoutError::OffGrid {
            x: bin.x,
            y: bin.y,
            pitch: grid.pitch_mm,
        })
    }
}

/// Bounds check plus collision check.
pub fn is_valid_placement(bin: &Bin, bins: &[Bin], grid: &GridSpec, exclude: Option<BinId>) -> bool {
    check_bounds(bin, grid) && !check_collision(bin, bins, exclude)
}

/// Like [`is_valid_placement`], reporting why a placement is rejected.
///
/// Bounds are checked before collisions.
pub fn validate_placement(
    bin: &Bin,
    bins: &[Bin],
    grid: &GridSpec,
    exclude: Option<BinId>,
) -> LayoutResult<()> {
    if !check_bounds(bin, grid) {
        return Err(LayoutError::OutOfBounds {
            x: bin.x,
            y: bin.y,
            width: bin.width,
            length: bin.length,
            grid_width: grid.width_mm(),
            grid_length: grid.length_mm(),
        });
    }
    if let Some(other) = find_collision(bin, bins, exclude) {
        return Err(LayoutError::Collision { other: other.id });
    }
    Ok(())
}

/// Classifies a `width_cells x length_cells` rectangle against the size rules.
///
/// Anything covering at most one cell is rejected before the constraint
/// table is consulted, so a single-cell bin is never valid whatever the
/// axis limits say.
pub fn size_violation(
    width_cells: u32,
    length_cells: u32,
    pitch_mm: f64,
    constraints: &BinConstraints,
) -> Option<SizeViolation> {
    let width = f64::from(width_cells) * pitch_mm;
    let length = f64::from(length_cells) * pitch_mm;
    let area = width * length;

    if area <= pitch_mm * pitch_mm {
        return Some(SizeViolation::Degenerate);
    }
    if width < constraints.min_width || length < constraints.min_length {
        return Some(SizeViolation::TooSmall);
    }
    if width > constraints.max_width || length > constraints.max_length {
        return Some(SizeViolation::TooLarge);
    }
    if area < constraints.min_area {
        return Some(SizeViolation::AreaTooSmall);
    }
    None
}

/// Returns true if a rectangle of the given cell dimensions is an acceptable bin.
pub fn validate_bin_size(
    width_cells: u32,
    length_cells: u32,
    pitch_mm: f64,
    constraints: &BinConstraints,
) -> bool {
    size_violation(width_cells, length_cells, pitch_mm, constraints).is_none()
}

/// Size check for a rectangle given in millimeters.
///
/// Dimensions must be whole multiples of the grid pitch.
pub fn validate_bin_dimensions(
    width_mm: f64,
    length_mm: f64,
    pitch_mm: f64,
    constraints: &BinConstraints,
) -> LayoutResult<()> {
    let invalid = |violation| LayoutError::SizeInvalid {
        width: width_mm,
        length: length_mm,
        violation,
    };

    if !(width_mm > 0.0 && length_mm > 0.0) {
        return Err(invalid(SizeViolation::Degenerate));
    }
    if !is_pitch_multiple(width_mm, pitch_mm) || !is_pitch_multiple(length_mm, pitch_mm) {
        return Err(invalid(SizeViolation::Unaligned));
    }

    let width_cells = (width_mm / pitch_mm).round() as u32;
    let length_cells = (length_mm / pitch_mm).round() as u32;
    match size_violation(width_cells, length_cells, pitch_mm, constraints) {
        Some(violation) => Err(invalid(violation)),
        None => Ok(()),
    }
}
