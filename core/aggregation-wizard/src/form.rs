//! FILENAME: core/aggregation-wizard/src/form.rs
//! The whole editable state of an aggregation widget and its errors.
//!
//! Each element owns one optional key of these structs; an absent key
//! means "not started" in values and "no errors" in errors.

use serde::{Deserialize, Serialize};

use crate::grouping::{GroupByErrors, GroupByFormValues};
use crate::metric::{MetricError, MetricFormValues};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfigFormValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupByFormValues>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricFormValues>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfigFormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupByErrors>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricError>>,
}

impl WidgetConfigFormErrors {
    pub fn is_empty(&self) -> bool {
        self.group_by.is_none() && self.metrics.is_none()
    }

    /// Combines the errors of two elements; keys set in `other` win.
    pub fn merge(self, other: WidgetConfigFormErrors) -> WidgetConfigFormErrors {
        WidgetConfigFormErrors {
            group_by: other.group_by.or(self.group_by),
            metrics: other.metrics.or(self.metrics),
        }
    }
}

/// Positional errors collapse to `None` when every entry is clean.
pub(crate) fn positional_errors<T>(errors: Vec<T>, is_empty: impl Fn(&T) -> bool) -> Option<Vec<T>> {
    if errors.iter().all(|e| is_empty(e)) {
        None
    } else {
        Some(errors)
    }
}
