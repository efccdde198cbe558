//! FILENAME: core/widget-config/src/config.rs
//! The aggregation widget configuration and its builder.
//!
//! The configuration is an immutable snapshot; edits go through
//! `to_builder()` and produce a new snapshot with `build()`.

use serde::{Deserialize, Serialize};

use crate::pivot::Pivot;
use crate::series::Series;

/// Persisted configuration of an aggregation widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationWidgetConfig {
    /// Pivots of the row axis, outermost first.
    #[serde(default)]
    pub row_pivots: Vec<Pivot>,

    /// Pivots of the column axis, outermost first.
    #[serde(default)]
    pub column_pivots: Vec<Pivot>,

    #[serde(default)]
    pub series: Vec<Series>,

    /// Visualization name, e.g. "table" or "bar".
    #[serde(default = "default_visualization")]
    pub visualization: String,

    /// Whether column values are additionally rolled up into a total.
    #[serde(default = "default_true")]
    pub rollup: bool,
}

fn default_visualization() -> String {
    "table".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AggregationWidgetConfig {
    fn default() -> Self {
        AggregationWidgetConfig {
            row_pivots: Vec::new(),
            column_pivots: Vec::new(),
            series: Vec::new(),
            visualization: default_visualization(),
            rollup: true,
        }
    }
}

impl AggregationWidgetConfig {
    pub fn builder() -> AggregationWidgetConfigBuilder {
        AggregationWidgetConfigBuilder::default()
    }

    pub fn to_builder(&self) -> AggregationWidgetConfigBuilder {
        AggregationWidgetConfigBuilder {
            config: self.clone(),
        }
    }

    /// True when neither axis has a pivot.
    pub fn has_no_pivots(&self) -> bool {
        self.row_pivots.is_empty() && self.column_pivots.is_empty()
    }
}

/// Chaining builder for `AggregationWidgetConfig`.
#[derive(Debug, Clone, Default)]
pub struct AggregationWidgetConfigBuilder {
    config: AggregationWidgetConfig,
}

impl AggregationWidgetConfigBuilder {
    pub fn row_pivots(mut self, pivots: Vec<Pivot>) -> Self {
        self.config.row_pivots = pivots;
        self
    }

    pub fn column_pivots(mut self, pivots: Vec<Pivot>) -> Self {
        self.config.column_pivots = pivots;
        self
    }

    pub fn series(mut self, series: Vec<Series>) -> Self {
        self.config.series = series;
        self
    }

    pub fn visualization(mut self, visualization: impl Into<String>) -> Self {
        self.config.visualization = visualization.into();
        self
    }

    pub fn rollup(mut self, rollup: bool) -> Self {
        self.config.rollup = rollup;
        self
    }

    pub fn build(self) -> AggregationWidgetConfig {
        self.config
    }
}
