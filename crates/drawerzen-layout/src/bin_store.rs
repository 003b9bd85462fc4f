//! Authoritative collection of placed bins.
//!
//! `BinStore` keeps bins in insertion order together with the current
//! selection. Every mutating method validates first and applies second, so
//! a returned error always means the store is unchanged.

use drawerzen_core::{Bin, BinId, GridSpec, LayoutError, LayoutResult};

use crate::validator;

/// Placed bins plus the selected bin.
#[derive(Debug, Clone, Default)]
pub struct BinStore {
    bins: Vec<Bin>,
    selected: Option<BinId>,
}

impl BinStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of placed bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Placed bins in insertion order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter()
    }

    pub fn get(&self, id: BinId) -> Option<&Bin> {
        self.bins.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BinId) -> bool {
        self.get(id).is_some()
    }

    fn index_of(&self, id: BinId) -> LayoutResult<usize> {
        self.bins
            .iter()
            .position(|b| b.id == id)
            .ok_or(LayoutError::NotFound(id))
    }

    /// Adds a bin after checking bounds and collisions.
    ///
    /// A bin whose id is already placed is reported as a collision with
    /// itself.
    pub fn add(&mut self, bin: Bin, grid: &GridSpec) -> LayoutResult<BinId> {
        if self.contains(bin.id) {
            return Err(LayoutError::Collision { other: bin.id });
        }
        validator::validate_placement(&bin, &self.bins, grid, None)?;
        let id = bin.id;
        tracing::debug!(%id, x = bin.x, y = bin.y, width = bin.width, length = bin.length, "bin added");
        self.bins.push(bin);
        Ok(id)
    }

    /// Removes a bin and returns it. Clears the selection if it pointed at it.
    pub fn remove(&mut self, id: BinId) -> LayoutResult<Bin> {
        let index = self.index_of(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        tracing::debug!(%id, "bin removed");
        Ok(self.bins.remove(index))
    }

    /// Moves a bin to `(x, y)`, keeping its identity.
    pub fn move_to(&mut self, id: BinId, x: f64, y: f64, grid: &GridSpec) -> LayoutResult<()> {
        let index = self.index_of(id)?;
        let candidate = self.bins[index].at(x, y);
        validator::validate_placement(&candidate, &self.bins, grid, Some(id))?;
        tracing::debug!(%id, x, y, "bin moved");
        self.bins[index] = candidate;
        Ok(())
    }

    /// Applies a change that does not affect placement.
    pub(crate) fn modify(&mut self, id: BinId, apply: impl FnOnce(&mut Bin)) -> LayoutResult<()> {
        let index = self.index_of(id)?;
        let bin = &mut self.bins[index];
        let (x, y, width, length) = (bin.x, bin.y, bin.width, bin.length);
        apply(bin);
        // Geometry is owned by the validated paths.
        bin.id = id;
        bin.x = x;
        bin.y = y;
        bin.width = width;
        bin.length = length;
        Ok(())
    }

    /// Marks a bin as selected.
    pub fn select(&mut self, id: BinId) -> LayoutResult<()> {
        self.index_of(id)?;
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<BinId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Bin> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Replaces every bin, e.g. with the output of a packing pass.
    ///
    /// The caller is responsible for the replacement set being valid. The
    /// selection survives only if the selected bin is still present.
    pub fn replace_all(&mut self, bins: Vec<Bin>) {
        self.bins = bins;
        if let Some(id) = self.selected {
            if !self.contains(id) {
                self.selected = None;
            }
        }
    }

    /// Removes every bin and returns them.
    pub fn clear(&mut self) -> Vec<Bin> {
        self.selected = None;
        std::mem::take(&mut self.bins)
    }
}
