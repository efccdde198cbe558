//! FILENAME: core/aggregation-wizard/src/grouping/mod.rs
//! Group-by element of the aggregation editor.
//!
//! Layers:
//! - `model`: Editable groupings (date / values) and their defaults
//! - `validation`: Per-grouping inline validation
//! - `conversion`: Pivot lists <-> grouping list mapping
//! - `element`: Form-level operations (create, remove, validate) and the
//!   element registration

pub mod model;
pub mod validation;
pub mod conversion;
pub mod element;

pub use model::*;
pub use validation::{validate_grouping, GroupByErrors, GroupingErrors};
pub use conversion::{from_config, group_by_to_config, grouping_to_pivot, pivot_to_grouping, to_config};
pub use element::{on_create, on_create_with, on_remove, validate, GroupByElement};
