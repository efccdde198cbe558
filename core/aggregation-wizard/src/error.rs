//! FILENAME: core/aggregation-wizard/src/error.rs

use serde::Serialize;
use thiserror::Error;

use crate::form::WidgetConfigFormErrors;

/// The persisted configuration and the editor disagree about its shape.
///
/// These are never user-facing validation failures; they indicate a bug or
/// an aggregation this editor cannot represent without losing data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("pivot type \"{pivot_type}\" of field \"{field}\" is not supported by the aggregation editor")]
    UnsupportedPivotType { field: String, pivot_type: String },

    #[error("pivot \"{field}\" has type \"{pivot_type}\" but a config of another kind")]
    MismatchedPivotConfig { field: String, pivot_type: String },

    #[error("grouping {id} of kind \"{kind}\" does not carry the parameters of that kind")]
    MismatchedGrouping { id: String, kind: String },
}

/// A single inline validation message, serialized as its text.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ValidationError {
    #[error("field required")]
    FieldRequired,

    #[error("scaling required")]
    ScalingRequired,

    #[error("must be > 0 and <= 10")]
    ScalingOutOfRange,

    #[error("value required")]
    ValueRequired,

    #[error("must be > 0")]
    MustBePositive,

    #[error("limit required")]
    LimitRequired,

    #[error("function required")]
    FunctionRequired,

    #[error("field required for function {0}")]
    FieldRequiredForFunction(String),

    #[error("percentile required")]
    PercentileRequired,
}

impl From<ValidationError> for String {
    fn from(error: ValidationError) -> Self {
        error.to_string()
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid wizard settings: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("no aggregation element with key \"{0}\"")]
    UnknownElement(String),

    #[error("element \"{0}\" does not allow creating entries")]
    CreateNotAllowed(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("form has validation errors")]
    Invalid(WidgetConfigFormErrors),
}
