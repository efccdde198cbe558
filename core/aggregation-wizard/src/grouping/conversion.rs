//! FILENAME: core/aggregation-wizard/src/grouping/conversion.rs
//! Pivot lists <-> grouping list conversion.
//!
//! Field mapping:
//! - Row pivots -> groupings with `Direction::Row`, in axis order
//! - Column pivots -> groupings with `Direction::Column`, in axis order
//! - `time` pivot <-> `DateGrouping` (interval copied verbatim)
//! - `values` pivot <-> `ValuesGrouping` (limit copied verbatim)
//! - `rollup` <-> `column_rollup`
//!
//! Pivots carry no identity, so every grouping produced here gets a fresh
//! one. Pivots the editor cannot represent abort the conversion instead of
//! being dropped.

use widget_config::{
    AggregationWidgetConfig, AggregationWidgetConfigBuilder, Pivot, PivotConfig, PivotType,
    TimeConfig, ValuesConfig,
};

use crate::error::ConversionError;
use crate::form::WidgetConfigFormValues;
use crate::identity::IdGenerator;
use crate::{log_debug, log_warn};

use super::model::{DateGrouping, Direction, GroupByFormValues, Grouping, ValuesGrouping};

// ============================================================================
// CONFIG -> FORM
// ============================================================================

/// Converts one pivot into a grouping on `direction`.
pub fn pivot_to_grouping(
    pivot: &Pivot,
    direction: Direction,
    ids: &dyn IdGenerator,
) -> Result<Grouping, ConversionError> {
    match (&pivot.pivot_type, &pivot.config) {
        (PivotType::Time, PivotConfig::Time(config)) => Ok(DateGrouping::new(
            ids.next_id(),
            direction,
            Some(pivot.field.clone()),
            config.interval.clone(),
        )
        .into()),
        (PivotType::Values, PivotConfig::Values(config)) => Ok(ValuesGrouping::new(
            ids.next_id(),
            direction,
            Some(pivot.field.clone()),
            config.limit,
        )
        .into()),
        (PivotType::Unsupported(name), _) => Err(ConversionError::UnsupportedPivotType {
            field: pivot.field.clone(),
            pivot_type: name.clone(),
        }),
        (pivot_type, _) => Err(ConversionError::MismatchedPivotConfig {
            field: pivot.field.clone(),
            pivot_type: pivot_type.to_string(),
        }),
    }
}

/// Builds the editable group-by state of `config`.
///
/// Returns `Ok(None)` when neither axis has a pivot, i.e. grouping has not
/// been started.
pub fn from_config(
    config: &AggregationWidgetConfig,
    ids: &dyn IdGenerator,
) -> Result<Option<GroupByFormValues>, ConversionError> {
    let rows = config
        .row_pivots
        .iter()
        .map(|pivot| pivot_to_grouping(pivot, Direction::Row, ids));
    let columns = config
        .column_pivots
        .iter()
        .map(|pivot| pivot_to_grouping(pivot, Direction::Column, ids));

    let groupings = rows
        .chain(columns)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            log_warn!("GROUPBY", "cannot edit aggregation: {}", e);
            e
        })?;

    if groupings.is_empty() {
        return Ok(None);
    }

    log_debug!(
        "GROUPBY",
        "from_config rows={} columns={} rollup={}",
        config.row_pivots.len(),
        config.column_pivots.len(),
        config.rollup
    );

    Ok(Some(GroupByFormValues {
        column_rollup: config.rollup,
        groupings,
    }))
}

// ============================================================================
// FORM -> CONFIG
// ============================================================================

/// Converts one grouping back into its pivot. An unset field is written
/// as an empty name.
pub fn grouping_to_pivot(grouping: &Grouping) -> Pivot {
    match grouping {
        Grouping::Date(g) => Pivot::new(
            g.field.clone().unwrap_or_default(),
            PivotType::Time,
            PivotConfig::Time(TimeConfig {
                interval: g.interval.clone(),
            }),
        ),
        Grouping::Values(g) => Pivot::new(
            g.field.clone().unwrap_or_default(),
            PivotType::Values,
            PivotConfig::Values(ValuesConfig { limit: g.limit }),
        ),
    }
}

fn pivots_on(group_by: &GroupByFormValues, direction: Direction) -> Vec<Pivot> {
    group_by
        .groupings
        .iter()
        .filter(|g| g.direction() == direction)
        .map(grouping_to_pivot)
        .collect()
}

/// Writes the group-by state onto `builder`.
pub fn group_by_to_config(
    group_by: &GroupByFormValues,
    builder: AggregationWidgetConfigBuilder,
) -> AggregationWidgetConfigBuilder {
    let row_pivots = pivots_on(group_by, Direction::Row);
    let column_pivots = pivots_on(group_by, Direction::Column);

    log_debug!(
        "GROUPBY",
        "to_config rows={} columns={} rollup={}",
        row_pivots.len(),
        column_pivots.len(),
        group_by.column_rollup
    );

    builder
        .row_pivots(row_pivots)
        .column_pivots(column_pivots)
        .rollup(group_by.column_rollup)
}

/// Writes the form's group-by state onto `builder`. Without group-by state
/// both pivot lists are cleared and the builder's rollup is left as is.
pub fn to_config(
    values: &WidgetConfigFormValues,
    builder: AggregationWidgetConfigBuilder,
) -> AggregationWidgetConfigBuilder {
    match &values.group_by {
        Some(group_by) => group_by_to_config(group_by, builder),
        None => builder.row_pivots(Vec::new()).column_pivots(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SequentialIdGenerator;
    use widget_config::{Interval, TimeUnit};

    fn config(rows: Vec<Pivot>, columns: Vec<Pivot>, rollup: bool) -> AggregationWidgetConfig {
        AggregationWidgetConfig::builder()
            .row_pivots(rows)
            .column_pivots(columns)
            .rollup(rollup)
            .build()
    }

    #[test]
    fn test_empty_config_is_not_started() {
        let ids = SequentialIdGenerator::default();
        let result = from_config(&config(vec![], vec![], true), &ids).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_single_values_pivot() {
        let ids = SequentialIdGenerator::new("g");
        let group_by = from_config(
            &config(vec![Pivot::values("http_method", 10)], vec![], true),
            &ids,
        )
        .unwrap()
        .unwrap();

        assert!(group_by.column_rollup);
        assert_eq!(group_by.groupings.len(), 1);
        match &group_by.groupings[0] {
            Grouping::Values(g) => {
                assert_eq!(g.id().as_str(), "g-1");
                assert_eq!(g.direction, Direction::Row);
                assert_eq!(g.field.as_deref(), Some("http_method"));
                assert_eq!(g.limit, Some(10));
            }
            other => panic!("expected values grouping, got {:?}", other),
        }
    }

    #[test]
    fn test_time_pivot_keeps_interval() {
        let ids = SequentialIdGenerator::default();
        let interval = Interval::timeunit(15, TimeUnit::Minutes);
        let group_by = from_config(
            &config(vec![], vec![Pivot::time("timestamp", interval.clone())], false),
            &ids,
        )
        .unwrap()
        .unwrap();

        assert!(!group_by.column_rollup);
        match &group_by.groupings[0] {
            Grouping::Date(g) => {
                assert_eq!(g.direction, Direction::Column);
                assert_eq!(g.interval, interval);
            }
            other => panic!("expected date grouping, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_precede_columns() {
        let ids = SequentialIdGenerator::default();
        let group_by = from_config(
            &config(
                vec![Pivot::values("a", 1), Pivot::values("b", 2)],
                vec![Pivot::values("c", 3)],
                true,
            ),
            &ids,
        )
        .unwrap()
        .unwrap();

        let fields: Vec<_> = group_by.groupings.iter().map(|g| g.field_name()).collect();
        assert_eq!(fields, vec![Some("a"), Some("b"), Some("c")]);
    }

    #[test]
    fn test_unsupported_pivot_type_fails() {
        let ids = SequentialIdGenerator::default();
        let geo = Pivot::new(
            "source_ip",
            PivotType::from("geo"),
            PivotConfig::Opaque(Default::default()),
        );
        let err = from_config(&config(vec![Pivot::values("a", 1)], vec![geo], true), &ids)
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedPivotType {
                field: "source_ip".to_string(),
                pivot_type: "geo".to_string(),
            }
        );
    }

    #[test]
    fn test_mismatched_pivot_config_fails() {
        let ids = SequentialIdGenerator::default();
        let broken = Pivot::new(
            "timestamp",
            PivotType::Time,
            PivotConfig::Values(ValuesConfig { limit: Some(5) }),
        );
        let err = from_config(&config(vec![broken], vec![], true), &ids).unwrap_err();
        assert!(matches!(err, ConversionError::MismatchedPivotConfig { .. }));
    }

    #[test]
    fn test_partition_is_stable() {
        let ids = SequentialIdGenerator::default();
        let mut group_by = from_config(
            &config(
                vec![Pivot::values("a", 1), Pivot::values("b", 2)],
                vec![Pivot::values("c", 3)],
                true,
            ),
            &ids,
        )
        .unwrap()
        .unwrap();

        // Interleave: c, a, b
        group_by.move_grouping(2, 0);

        let built = group_by_to_config(&group_by, AggregationWidgetConfig::builder()).build();
        assert_eq!(
            built.row_pivots,
            vec![Pivot::values("a", 1), Pivot::values("b", 2)]
        );
        assert_eq!(built.column_pivots, vec![Pivot::values("c", 3)]);
    }

    #[test]
    fn test_unset_field_writes_empty_name() {
        let ids = SequentialIdGenerator::default();
        let grouping: Grouping = crate::grouping::create_default_grouping(&ids).into();
        let pivot = grouping_to_pivot(&grouping);
        assert_eq!(pivot.field, "");
        assert_eq!(pivot.pivot_type, PivotType::Values);
        assert_eq!(pivot.config, PivotConfig::Values(ValuesConfig { limit: Some(15) }));
    }

    #[test]
    fn test_to_config_without_group_by_clears_pivots() {
        let base = config(vec![Pivot::values("a", 1)], vec![Pivot::values("b", 1)], false);
        let built = to_config(&WidgetConfigFormValues::default(), base.to_builder()).build();
        assert!(built.has_no_pivots());
        assert!(!built.rollup);
    }
}
