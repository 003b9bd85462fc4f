//! Pool of catalog entries that are not placed on the grid.
//!
//! The catalog itself belongs to the UI layer. The engine keeps the
//! original list for lookups and a working list of entries still available
//! to drag onto the grid.

use drawerzen_core::{Bin, CatalogEntry};

#[derive(Debug, Clone, Default)]
pub struct CatalogPool {
    reference: Vec<CatalogEntry>,
    available: Vec<CatalogEntry>,
}

impl CatalogPool {
    /// Creates a pool where every entry is available.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            available: entries.clone(),
            reference: entries,
        }
    }

    /// Entries that can still be dragged onto the grid.
    pub fn available(&self) -> &[CatalogEntry] {
        &self.available
    }

    /// The catalog as originally supplied.
    pub fn reference(&self) -> &[CatalogEntry] {
        &self.reference
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    pub fn find_available(&self, id: &str) -> Option<&CatalogEntry> {
        self.available.iter().find(|e| e.id == id)
    }

    fn find_reference(&self, id: &str) -> Option<&CatalogEntry> {
        self.reference.iter().find(|e| e.id == id)
    }

    /// Removes one available entry with the given id.
    pub fn take(&mut self, id: &str) -> Option<CatalogEntry> {
        let index = self.available.iter().position(|e| e.id == id)?;
        Some(self.available.remove(index))
    }

    pub fn push(&mut self, entry: CatalogEntry) {
        self.available.push(entry);
    }

    /// Puts an entry equivalent to `bin` back into the pool.
    ///
    /// Uses the catalog entry named by `bin.original_id` when it exists,
    /// otherwise synthesizes one from the bin's attributes.
    pub fn reinstate(&mut self, bin: &Bin) -> CatalogEntry {
        let entry = bin
            .original_id
            .as_deref()
            .and_then(|id| self.find_reference(id))
            .cloned()
            .unwrap_or_else(|| CatalogEntry::from_bin(bin));
        self.available.push(entry.clone());
        entry
    }

    /// Puts the originating entry back, but only for bins taken from the catalog.
    pub fn restore_original(&mut self, bin: &Bin) -> Option<CatalogEntry> {
        let entry = self.find_reference(bin.original_id.as_deref()?)?.clone();
        self.available.push(entry.clone());
        Some(entry)
    }

    /// Makes the whole reference catalog available again.
    pub fn reset(&mut self) {
        self.available = self.reference.clone();
    }
}
