//! Automatic layout.
//!
//! Two batch operations over a bin list and a grid, both pure and
//! deterministic for a fixed input order:
//! - `auto_sort`: first-fit repack of the placed bins, largest first
//! - `generate_bins`: fill free space with standard catalog sizes
//!
//! Placement checks go through [`crate::validator`]; the occupancy map is
//! only used to find candidate gaps.

mod auto_sort;
mod gaps;
mod generate;
mod occupancy;

pub use auto_sort::{auto_sort, packing_order, SortResult};
pub use gaps::{find_gaps, find_gaps_in, Gap};
pub use generate::{generate_bins, FillReport};
pub use occupancy::OccupancyGrid;
