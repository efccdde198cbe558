//! FILENAME: core/aggregation-wizard/src/grouping/validation.rs
//! Inline validation of single groupings.
//!
//! Failures are values, one optional message per input of the grouping
//! row; an empty `GroupingErrors` means the grouping is valid.

use serde::Serialize;
use widget_config::Interval;

use crate::error::ValidationError;

use super::model::{DateGrouping, Grouping, ValuesGrouping};

/// Upper bound (inclusive) of the auto interval scaling.
pub const MAX_AUTO_SCALING: f64 = 10.0;

/// Messages for the inputs of one grouping row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupingErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<ValidationError>,
}

impl GroupingErrors {
    pub fn is_empty(&self) -> bool {
        self.field.is_none() && self.limit.is_none() && self.interval.is_none()
    }
}

/// Errors of all groupings, index-aligned with the grouping list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupByErrors {
    pub groupings: Vec<GroupingErrors>,
}

fn has_field(field: Option<&str>) -> bool {
    field.map_or(false, |f| !f.is_empty())
}

fn validate_interval(interval: &Interval) -> Option<ValidationError> {
    match interval {
        Interval::Auto { scaling: None } => Some(ValidationError::ScalingRequired),
        Interval::Auto {
            scaling: Some(scaling),
        } => {
            // NaN falls outside the range as well
            if *scaling > 0.0 && *scaling <= MAX_AUTO_SCALING {
                None
            } else {
                Some(ValidationError::ScalingOutOfRange)
            }
        }
        Interval::Timeunit { value: None, .. } => Some(ValidationError::ValueRequired),
        Interval::Timeunit {
            value: Some(value), ..
        } if *value <= 0 => Some(ValidationError::MustBePositive),
        Interval::Timeunit { .. } => None,
    }
}

fn validate_date_grouping(grouping: &DateGrouping) -> GroupingErrors {
    GroupingErrors {
        field: (!has_field(grouping.field.as_deref())).then(|| ValidationError::FieldRequired),
        limit: None,
        interval: validate_interval(&grouping.interval),
    }
}

fn validate_values_grouping(grouping: &ValuesGrouping) -> GroupingErrors {
    let limit = match grouping.limit {
        None => Some(ValidationError::LimitRequired),
        Some(limit) if limit <= 0 => Some(ValidationError::MustBePositive),
        Some(_) => None,
    };

    GroupingErrors {
        field: (!has_field(grouping.field.as_deref())).then(|| ValidationError::FieldRequired),
        limit,
        interval: None,
    }
}

pub fn validate_grouping(grouping: &Grouping) -> GroupingErrors {
    match grouping {
        Grouping::Date(g) => validate_date_grouping(g),
        Grouping::Values(g) => validate_values_grouping(g),
    }
}
