//! Layout files read by the command-line tool.
//!
//! A layout file is JSON: `{ "drawer": {...}, "bins": [...], "catalog": [...] }`.
//! Only `drawer` is required.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use drawerzen_core::{Bin, BinId, CatalogEntry, Drawer, EngineConfig, ErrorKind};
use drawerzen_layout::LayoutState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFile {
    pub drawer: Drawer,
    #[serde(default)]
    pub bins: Vec<Bin>,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

/// A bin from the file that could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedBin {
    pub id: BinId,
    pub name: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// Result of loading a layout file into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub valid: bool,
    pub cols: u32,
    pub rows: u32,
    pub placed: usize,
    pub rejected: Vec<RejectedBin>,
}

impl LayoutFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read layout file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid layout file {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builds a layout, adding the file's bins in order.
    ///
    /// Bins that fail validation are left out and reported.
    pub fn into_layout(self, config: EngineConfig) -> (LayoutState, Vec<RejectedBin>) {
        let mut layout = LayoutState::new(self.drawer, self.catalog, config);
        let mut rejected = Vec::new();
        for bin in self.bins {
            let (id, name) = (bin.id, bin.name.clone());
            if let Err(e) = layout.add_bin(bin) {
                tracing::warn!(%id, error = %e, "bin rejected");
                rejected.push(RejectedBin {
                    id,
                    name,
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
        (layout, rejected)
    }

    /// Validates every bin of the file without changing it.
    pub fn check(self, config: EngineConfig) -> CheckReport {
        let (layout, rejected) = self.into_layout(config);
        CheckReport {
            valid: rejected.is_empty(),
            cols: layout.grid().cols,
            rows: layout.grid().rows,
            placed: layout.bins().len(),
            rejected,
        }
    }
}
