//! FILENAME: core/aggregation-wizard/src/grouping/element.rs
//! Form-level group-by operations and the `groupBy` element.

use widget_config::{AggregationWidgetConfig, AggregationWidgetConfigBuilder};

use crate::element::AggregationElement;
use crate::error::ConversionError;
use crate::form::{positional_errors, WidgetConfigFormErrors, WidgetConfigFormValues};
use crate::identity::IdGenerator;
use crate::log_debug;
use crate::settings::WizardSettings;

use super::conversion;
use super::model::{create_default_grouping_with, GroupByFormValues, Grouping};
use super::validation::{validate_grouping, GroupByErrors, GroupingErrors};

// ============================================================================
// OPERATIONS
// ============================================================================

/// Validates every grouping in order.
///
/// The result is index-aligned with the grouping list. When all groupings
/// are valid the `group_by` key is absent rather than an empty list.
pub fn validate(values: &WidgetConfigFormValues) -> WidgetConfigFormErrors {
    let group_by = values.group_by.as_ref().and_then(|group_by| {
        let errors: Vec<GroupingErrors> = group_by.groupings.iter().map(validate_grouping).collect();
        positional_errors(errors, |e| e.is_empty())
    });

    WidgetConfigFormErrors {
        group_by: group_by.map(|groupings| GroupByErrors { groupings }),
        metrics: None,
    }
}

/// Appends a default grouping, starting the group-by state if needed.
pub fn on_create(values: WidgetConfigFormValues, ids: &dyn IdGenerator) -> WidgetConfigFormValues {
    on_create_with(&WizardSettings::default(), values, ids)
}

pub fn on_create_with(
    settings: &WizardSettings,
    values: WidgetConfigFormValues,
    ids: &dyn IdGenerator,
) -> WidgetConfigFormValues {
    let grouping: Grouping = create_default_grouping_with(settings, ids).into();
    let group_by = match values.group_by {
        Some(mut group_by) => {
            group_by.groupings.push(grouping);
            group_by
        }
        None => GroupByFormValues {
            column_rollup: settings.default_column_rollup,
            groupings: vec![grouping],
        },
    };

    WidgetConfigFormValues {
        group_by: Some(group_by),
        ..values
    }
}

/// Removes the grouping at `index`.
///
/// Positional: callers holding an identity must resolve it to an index
/// right before calling. Out-of-range indexes and a not-started group-by
/// state leave the values unchanged.
pub fn on_remove(index: usize, values: WidgetConfigFormValues) -> WidgetConfigFormValues {
    let group_by = values.group_by.map(|group_by| GroupByFormValues {
        column_rollup: group_by.column_rollup,
        groupings: group_by
            .groupings
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, g)| g)
            .collect(),
    });
    log_debug!("GROUPBY", "removed grouping index={}", index);

    WidgetConfigFormValues { group_by, ..values }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// The `groupBy` section of the aggregation editor.
#[derive(Debug, Clone, Default)]
pub struct GroupByElement {
    settings: WizardSettings,
}

impl GroupByElement {
    pub fn new(settings: WizardSettings) -> Self {
        GroupByElement { settings }
    }
}

impl AggregationElement for GroupByElement {
    fn key(&self) -> &'static str {
        "groupBy"
    }

    fn title(&self) -> &'static str {
        "Group By"
    }

    fn order(&self) -> u32 {
        1
    }

    fn from_config(
        &self,
        config: &AggregationWidgetConfig,
        values: &mut WidgetConfigFormValues,
        ids: &dyn IdGenerator,
    ) -> Result<(), ConversionError> {
        values.group_by = conversion::from_config(config, ids)?;
        Ok(())
    }

    fn to_config(
        &self,
        values: &WidgetConfigFormValues,
        builder: AggregationWidgetConfigBuilder,
    ) -> AggregationWidgetConfigBuilder {
        conversion::to_config(values, builder)
    }

    fn on_create(&self, values: WidgetConfigFormValues, ids: &dyn IdGenerator) -> WidgetConfigFormValues {
        on_create_with(&self.settings, values, ids)
    }

    fn on_remove(&self, index: usize, values: WidgetConfigFormValues) -> WidgetConfigFormValues {
        on_remove(index, values)
    }

    fn validate(&self, values: &WidgetConfigFormValues) -> WidgetConfigFormErrors {
        validate(values)
    }
}
