//! FILENAME: core/aggregation-wizard/src/settings.rs
//! Defaults applied when the editor creates new entries.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::grouping::Direction;

/// Editor defaults. Every key is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardSettings {
    /// Top-N limit of a newly added values grouping.
    pub default_limit: i64,
    /// Axis of a newly added grouping.
    pub default_direction: Direction,
    /// Rollup flag used when grouping configuration is first started.
    pub default_column_rollup: bool,
    /// Auto interval scaling used when a grouping is switched to the date kind.
    pub default_auto_scaling: f64,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            default_limit: 15,
            default_direction: Direction::Row,
            default_column_rollup: true,
            default_auto_scaling: 1.0,
        }
    }
}

impl WizardSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}
