//! FILENAME: core/widget-config/src/lib.rs
//! Aggregation widget configuration for the log-management front end.
//!
//! This crate holds the persisted shape of an aggregation widget as it is
//! exchanged with the configuration API. It knows nothing about editing;
//! the `aggregation-wizard` crate converts it to and from editable forms.
//!
//! Layers:
//! - `pivot`: Grouping axis entries (`{field, type, config}`)
//! - `series`: Metric definitions and their function text
//! - `config`: The widget configuration and its builder

pub mod pivot;
pub mod series;
pub mod config;

pub use pivot::*;
pub use series::*;
pub use config::{AggregationWidgetConfig, AggregationWidgetConfigBuilder};
