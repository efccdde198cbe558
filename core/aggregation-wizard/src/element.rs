//! FILENAME: core/aggregation-wizard/src/element.rs
//! The contract every section of the aggregation editor implements.

use widget_config::{AggregationWidgetConfig, AggregationWidgetConfigBuilder};

use crate::error::ConversionError;
use crate::form::{WidgetConfigFormErrors, WidgetConfigFormValues};
use crate::identity::IdGenerator;

/// One section of the editor (group-by, metrics, ...).
///
/// Each element owns one key of `WidgetConfigFormValues` and converts it
/// from and to the persisted configuration.
pub trait AggregationElement: Send + Sync {
    /// Form key owned by this element, e.g. `groupBy`.
    fn key(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Position of the section; lower comes first.
    fn order(&self) -> u32;

    fn allow_create(&self, _values: &WidgetConfigFormValues) -> bool {
        true
    }

    /// Fills this element's key of `values` from `config`.
    fn from_config(
        &self,
        config: &AggregationWidgetConfig,
        values: &mut WidgetConfigFormValues,
        ids: &dyn IdGenerator,
    ) -> Result<(), ConversionError>;

    fn to_config(
        &self,
        values: &WidgetConfigFormValues,
        builder: AggregationWidgetConfigBuilder,
    ) -> AggregationWidgetConfigBuilder;

    fn on_create(&self, values: WidgetConfigFormValues, ids: &dyn IdGenerator) -> WidgetConfigFormValues;

    fn on_remove(&self, index: usize, values: WidgetConfigFormValues) -> WidgetConfigFormValues;

    fn validate(&self, values: &WidgetConfigFormValues) -> WidgetConfigFormErrors;
}
