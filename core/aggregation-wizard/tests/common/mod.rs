//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for aggregation editor integration tests.

#![allow(dead_code)]

use aggregation_wizard::{AggregationWizard, SequentialIdGenerator, WizardSettings};
use widget_config::{AggregationWidgetConfig, Interval, Pivot, Series, TimeUnit};

/// Wizard with deterministic `g-<n>` identities.
pub struct WizardHarness {
    pub wizard: AggregationWizard,
}

impl WizardHarness {
    pub fn new() -> Self {
        Self::with_settings(WizardSettings::default())
    }

    pub fn with_settings(settings: WizardSettings) -> Self {
        WizardHarness {
            wizard: AggregationWizard::with_id_generator(
                settings,
                Box::new(SequentialIdGenerator::new("g")),
            ),
        }
    }
}

/// Fixture configurations.
pub struct ConfigFixture;

impl ConfigFixture {
    /// One values row pivot on `http_method` with limit 10, rollup on.
    pub fn http_method() -> AggregationWidgetConfig {
        AggregationWidgetConfig::builder()
            .row_pivots(vec![Pivot::values("http_method", 10)])
            .column_pivots(Vec::new())
            .rollup(true)
            .build()
    }

    /// Two row pivots (time, values), one column pivot, two series.
    pub fn mixed() -> AggregationWidgetConfig {
        AggregationWidgetConfig::builder()
            .row_pivots(vec![
                Pivot::time("timestamp", Interval::auto(1.0)),
                Pivot::values("source", 5),
            ])
            .column_pivots(vec![Pivot::time(
                "timestamp",
                Interval::timeunit(1, TimeUnit::Hours),
            )])
            .series(vec![
                Series::create("count", None, None),
                Series::create("avg", Some("took_ms"), None),
            ])
            .visualization("bar")
            .rollup(false)
            .build()
    }

    pub fn empty() -> AggregationWidgetConfig {
        AggregationWidgetConfig::default()
    }
}
