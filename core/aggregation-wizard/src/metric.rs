//! FILENAME: core/aggregation-wizard/src/metric.rs
//! Metrics element: series <-> editable metric list.

use serde::{Deserialize, Serialize};
use widget_config::{
    parse_series, AggregationWidgetConfig, AggregationWidgetConfigBuilder, Series,
};

use crate::element::AggregationElement;
use crate::error::{ConversionError, ValidationError};
use crate::form::{positional_errors, WidgetConfigFormErrors, WidgetConfigFormValues};
use crate::identity::IdGenerator;
use crate::log_debug;

/// Function that does not need a field.
const COUNT_FUNCTION: &str = "count";
const PERCENTILE_FUNCTION: &str = "percentile";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricFormValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentile: Option<ValidationError>,
}

impl MetricError {
    pub fn is_empty(&self) -> bool {
        self.function.is_none() && self.field.is_none() && self.percentile.is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn validate_metric(metric: &MetricFormValues) -> MetricError {
    let function = non_empty(metric.function.as_deref());
    let mut error = MetricError::default();

    match function {
        None => error.function = Some(ValidationError::FunctionRequired),
        Some(func) => {
            if func != COUNT_FUNCTION && non_empty(metric.field.as_deref()).is_none() {
                error.field = Some(ValidationError::FieldRequiredForFunction(func.to_string()));
            }
            if func == PERCENTILE_FUNCTION && metric.percentile.is_none() {
                error.percentile = Some(ValidationError::PercentileRequired);
            }
        }
    }

    error
}

fn series_to_metric(series: &Series) -> MetricFormValues {
    let name = series.config.name.clone();
    match parse_series(&series.function) {
        Some(parsed) => MetricFormValues {
            function: Some(parsed.function),
            field: parsed.field,
            name,
            percentile: parsed.percentile.and_then(|p| p.parse().ok()),
        },
        None => MetricFormValues {
            name,
            ..MetricFormValues::default()
        },
    }
}

fn metric_to_series(metric: &MetricFormValues) -> Series {
    Series::create(
        metric.function.as_deref().unwrap_or_default(),
        metric.field.as_deref(),
        metric.percentile,
    )
    .with_name(metric.name.clone())
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// One metric per series, in order.
pub fn from_config(config: &AggregationWidgetConfig) -> Vec<MetricFormValues> {
    config.series.iter().map(series_to_metric).collect()
}

pub fn to_config(
    values: &WidgetConfigFormValues,
    builder: AggregationWidgetConfigBuilder,
) -> AggregationWidgetConfigBuilder {
    let series = values
        .metrics
        .iter()
        .flatten()
        .map(metric_to_series)
        .collect();
    builder.series(series)
}

/// Index-aligned metric errors; `metrics` is absent when all are valid.
pub fn validate(values: &WidgetConfigFormValues) -> WidgetConfigFormErrors {
    let metrics = values.metrics.as_ref().and_then(|metrics| {
        let errors: Vec<MetricError> = metrics.iter().map(validate_metric).collect();
        positional_errors(errors, MetricError::is_empty)
    });

    WidgetConfigFormErrors {
        group_by: None,
        metrics,
    }
}

pub fn on_create(values: WidgetConfigFormValues) -> WidgetConfigFormValues {
    let mut metrics = values.metrics.unwrap_or_default();
    metrics.push(MetricFormValues::default());
    log_debug!("METRIC", "created metric index={}", metrics.len() - 1);

    WidgetConfigFormValues {
        metrics: Some(metrics),
        ..values
    }
}

pub fn on_remove(index: usize, values: WidgetConfigFormValues) -> WidgetConfigFormValues {
    let metrics = values.metrics.map(|metrics| {
        metrics
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, m)| m)
            .collect()
    });
    log_debug!("METRIC", "removed metric index={}", index);

    WidgetConfigFormValues { metrics, ..values }
}

// ============================================================================
// ELEMENT
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricElement;

impl AggregationElement for MetricElement {
    fn key(&self) -> &'static str {
        "metrics"
    }

    fn title(&self) -> &'static str {
        "Metrics"
    }

    fn order(&self) -> u32 {
        2
    }

    fn from_config(
        &self,
        config: &AggregationWidgetConfig,
        values: &mut WidgetConfigFormValues,
        _ids: &dyn IdGenerator,
    ) -> Result<(), ConversionError> {
        values.metrics = Some(from_config(config));
        Ok(())
    }

    fn to_config(
        &self,
        values: &WidgetConfigFormValues,
        builder: AggregationWidgetConfigBuilder,
    ) -> AggregationWidgetConfigBuilder {
        to_config(values, builder)
    }

    fn on_create(&self, values: WidgetConfigFormValues, _ids: &dyn IdGenerator) -> WidgetConfigFormValues {
        on_create(values)
    }

    fn on_remove(&self, index: usize, values: WidgetConfigFormValues) -> WidgetConfigFormValues {
        on_remove(index, values)
    }

    fn validate(&self, values: &WidgetConfigFormValues) -> WidgetConfigFormErrors {
        validate(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(function: Option<&str>, field: Option<&str>, percentile: Option<f64>) -> MetricFormValues {
        MetricFormValues {
            function: function.map(str::to_string),
            field: field.map(str::to_string),
            name: None,
            percentile,
        }
    }

    fn form(metrics: Vec<MetricFormValues>) -> WidgetConfigFormValues {
        WidgetConfigFormValues {
            metrics: Some(metrics),
            ..WidgetConfigFormValues::default()
        }
    }

    #[test]
    fn test_from_config() {
        let config = AggregationWidgetConfig::builder()
            .series(vec![
                Series::create("count", None, None),
                Series::create("percentile", Some("took_ms"), Some(95.0))
                    .with_name(Some("p95".to_string())),
            ])
            .build();

        let metrics = from_config(&config);
        assert_eq!(metrics[0], metric(Some("count"), None, None));
        assert_eq!(metrics[1].function.as_deref(), Some("percentile"));
        assert_eq!(metrics[1].field.as_deref(), Some("took_ms"));
        assert_eq!(metrics[1].percentile, Some(95.0));
        assert_eq!(metrics[1].name.as_deref(), Some("p95"));
    }

    #[test]
    fn test_to_config() {
        let values = form(vec![
            metric(Some("avg"), Some("bytes"), None),
            MetricFormValues {
                name: Some("total".to_string()),
                ..metric(Some("count"), None, None)
            },
        ]);
        let config = to_config(&values, AggregationWidgetConfig::builder()).build();
        assert_eq!(config.series[0].function, "avg(bytes)");
        assert_eq!(config.series[1].function, "count()");
        assert_eq!(config.series[1].config.name.as_deref(), Some("total"));
    }

    #[test]
    fn test_validate() {
        let values = form(vec![
            metric(Some("count"), None, None),
            metric(None, None, None),
            metric(Some("max"), None, None),
            metric(Some("percentile"), Some("took_ms"), None),
        ]);
        let errors = validate(&values).metrics.unwrap();

        assert!(errors[0].is_empty());
        assert_eq!(errors[1].function, Some(ValidationError::FunctionRequired));
        assert_eq!(
            errors[2].field,
            Some(ValidationError::FieldRequiredForFunction("max".to_string()))
        );
        assert_eq!(errors[3].percentile, Some(ValidationError::PercentileRequired));
        assert_eq!(errors[3].field, None);
    }

    #[test]
    fn test_valid_metrics_have_no_key() {
        let values = form(vec![metric(Some("sum"), Some("bytes"), None)]);
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn test_create_and_remove() {
        let values = on_create(on_create(WidgetConfigFormValues::default()));
        assert_eq!(values.metrics.as_ref().unwrap().len(), 2);

        let values = on_remove(0, values);
        assert_eq!(values.metrics.unwrap().len(), 1);
    }
}
