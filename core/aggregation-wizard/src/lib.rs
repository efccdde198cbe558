//! FILENAME: core/aggregation-wizard/src/lib.rs
//! Aggregation editor model for the log-management front end.
//!
//! Converts a persisted `AggregationWidgetConfig` into editable form values,
//! lets an editor create, remove and validate entries, and writes the form
//! back into a configuration. All operations are pure functions over
//! values; the only shared state is the identity generator passed in.
//!
//! Layers:
//! - `grouping`: Group-by element (pivots <-> groupings)
//! - `metric`: Metrics element (series <-> metrics)
//! - `element`: The element contract
//! - `wizard`: Runs all elements over one configuration
//! - `form`: Whole-form values and errors
//! - `identity`, `settings`, `error`, `logging`: Supporting pieces

pub mod logging;
pub mod error;
pub mod identity;
pub mod settings;
pub mod form;
pub mod element;
pub mod grouping;
pub mod metric;
pub mod wizard;

pub use element::AggregationElement;
pub use error::{ConversionError, SettingsError, ValidationError, WizardError};
pub use form::{WidgetConfigFormErrors, WidgetConfigFormValues};
pub use grouping::{
    create_default_grouping, DateGrouping, Direction, GroupByElement, GroupByErrors,
    GroupByFormValues, GroupByState, Grouping, GroupingErrors, GroupingKind, ValuesGrouping,
};
pub use identity::{GroupingId, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use metric::{MetricElement, MetricError, MetricFormValues};
pub use settings::WizardSettings;
pub use wizard::AggregationWizard;
