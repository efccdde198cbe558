//! FILENAME: core/widget-config/src/pivot.rs
//! Pivot definitions - the persisted form of one grouping axis entry.
//!
//! On the wire a pivot is `{ "field": .., "type": .., "config": .. }`.
//! The `type` tag and the `config` payload are kept as separate fields so
//! that pivots of unknown kinds, or with a payload that does not match
//! their tag, survive deserialization and can be rejected by the caller
//! with a precise error.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// TIME INTERVALS
// ============================================================================

/// Units for fixed-width time buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl Default for TimeUnit {
    fn default() -> Self {
        TimeUnit::Minutes
    }
}

/// Bucket width of a time pivot.
///
/// Numeric parameters are optional because the editor lets users clear
/// them; a persisted configuration normally carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Interval {
    /// Width derived from the searched time range, multiplied by `scaling`.
    Auto {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scaling: Option<f64>,
    },
    /// Explicit `value` x `unit` width.
    Timeunit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<i64>,
        unit: TimeUnit,
    },
}

impl Interval {
    pub fn auto(scaling: f64) -> Self {
        Interval::Auto {
            scaling: Some(scaling),
        }
    }

    pub fn timeunit(value: i64, unit: TimeUnit) -> Self {
        Interval::Timeunit {
            value: Some(value),
            unit,
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::auto(1.0)
    }
}

// ============================================================================
// PIVOT TYPE
// ============================================================================

/// The kind tag of a pivot.
///
/// Any name other than `time` or `values` is kept verbatim in
/// `Unsupported` instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PivotType {
    Time,
    Values,
    Unsupported(String),
}

impl PivotType {
    pub fn as_str(&self) -> &str {
        match self {
            PivotType::Time => "time",
            PivotType::Values => "values",
            PivotType::Unsupported(name) => name,
        }
    }
}

impl From<String> for PivotType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "time" => PivotType::Time,
            "values" => PivotType::Values,
            _ => PivotType::Unsupported(name),
        }
    }
}

impl From<&str> for PivotType {
    fn from(name: &str) -> Self {
        PivotType::from(name.to_string())
    }
}

impl From<PivotType> for String {
    fn from(pivot_type: PivotType) -> Self {
        match pivot_type {
            PivotType::Unsupported(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PivotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PIVOT CONFIG
// ============================================================================

/// Configuration of a `time` pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeConfig {
    pub interval: Interval,
}

/// Configuration of a `values` pivot: keep the top `limit` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValuesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Kind-specific pivot payload, recognised by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PivotConfig {
    Time(TimeConfig),
    Values(ValuesConfig),
    /// Payload of a pivot kind this crate does not model.
    Opaque(Map<String, Value>),
}

// ============================================================================
// PIVOT
// ============================================================================

/// One entry of the row or column grouping axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    /// Name of the message field to group by.
    pub field: String,

    #[serde(rename = "type")]
    pub pivot_type: PivotType,

    pub config: PivotConfig,
}

impl Pivot {
    pub fn new(field: impl Into<String>, pivot_type: PivotType, config: PivotConfig) -> Self {
        Pivot {
            field: field.into(),
            pivot_type,
            config,
        }
    }

    /// Time-bucketing pivot over `field`.
    pub fn time(field: impl Into<String>, interval: Interval) -> Self {
        Pivot::new(
            field,
            PivotType::Time,
            PivotConfig::Time(TimeConfig { interval }),
        )
    }

    /// Top-N values pivot over `field`.
    pub fn values(field: impl Into<String>, limit: i64) -> Self {
        Pivot::new(
            field,
            PivotType::Values,
            PivotConfig::Values(ValuesConfig { limit: Some(limit) }),
        )
    }
}
