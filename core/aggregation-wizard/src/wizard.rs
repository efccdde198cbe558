//! FILENAME: core/aggregation-wizard/src/wizard.rs
//! Drives all editor elements over one widget configuration.
//!
//! The wizard is stateless apart from its element list and identity
//! generator; the form values it hands out are owned by the caller's edit
//! session.

use widget_config::AggregationWidgetConfig;

use crate::element::AggregationElement;
use crate::error::{ConversionError, WizardError};
use crate::form::{WidgetConfigFormErrors, WidgetConfigFormValues};
use crate::grouping::GroupByElement;
use crate::identity::{IdGenerator, UuidGenerator};
use crate::metric::MetricElement;
use crate::settings::WizardSettings;
use crate::{log_debug, log_info, log_warn};

pub struct AggregationWizard {
    elements: Vec<Box<dyn AggregationElement>>,
    ids: Box<dyn IdGenerator>,
}

impl AggregationWizard {
    /// Group-by and metrics elements with random identities.
    pub fn new(settings: WizardSettings) -> Self {
        Self::with_id_generator(settings, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(settings: WizardSettings, ids: Box<dyn IdGenerator>) -> Self {
        let elements: Vec<Box<dyn AggregationElement>> = vec![
            Box::new(GroupByElement::new(settings)),
            Box::new(MetricElement),
        ];
        Self::with_elements(elements, ids)
    }

    pub fn with_elements(
        mut elements: Vec<Box<dyn AggregationElement>>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        elements.sort_by_key(|e| e.order());
        AggregationWizard { elements, ids }
    }

    /// Elements in display order.
    pub fn elements(&self) -> impl Iterator<Item = &dyn AggregationElement> {
        self.elements.iter().map(|e| e.as_ref())
    }

    fn element(&self, key: &str) -> Result<&dyn AggregationElement, WizardError> {
        self.elements()
            .find(|e| e.key() == key)
            .ok_or_else(|| WizardError::UnknownElement(key.to_string()))
    }

    /// Builds the editable form of `config`. Fails on the first element
    /// that cannot represent its part of the configuration.
    pub fn form_from_config(
        &self,
        config: &AggregationWidgetConfig,
    ) -> Result<WidgetConfigFormValues, ConversionError> {
        let mut values = WidgetConfigFormValues {
            visualization: Some(config.visualization.clone()),
            ..WidgetConfigFormValues::default()
        };
        for element in self.elements() {
            element.from_config(config, &mut values, self.ids.as_ref())?;
        }
        Ok(values)
    }

    /// Writes the form onto a copy of `base`; settings no element owns are
    /// kept from `base`.
    pub fn form_to_config(
        &self,
        values: &WidgetConfigFormValues,
        base: &AggregationWidgetConfig,
    ) -> AggregationWidgetConfig {
        let mut builder = base.to_builder();
        if let Some(visualization) = &values.visualization {
            builder = builder.visualization(visualization.clone());
        }
        for element in self.elements() {
            builder = element.to_config(values, builder);
        }
        builder.build()
    }

    pub fn validate(&self, values: &WidgetConfigFormValues) -> WidgetConfigFormErrors {
        self.elements()
            .map(|e| e.validate(values))
            .fold(WidgetConfigFormErrors::default(), WidgetConfigFormErrors::merge)
    }

    pub fn create_element(
        &self,
        key: &str,
        values: WidgetConfigFormValues,
    ) -> Result<WidgetConfigFormValues, WizardError> {
        let element = self.element(key)?;
        if !element.allow_create(&values) {
            return Err(WizardError::CreateNotAllowed(key.to_string()));
        }
        log_debug!("WIZARD", "create in element={}", key);
        Ok(element.on_create(values, self.ids.as_ref()))
    }

    pub fn remove_from_element(
        &self,
        key: &str,
        index: usize,
        values: WidgetConfigFormValues,
    ) -> Result<WidgetConfigFormValues, WizardError> {
        let element = self.element(key)?;
        log_debug!("WIZARD", "remove from element={} index={}", key, index);
        Ok(element.on_remove(index, values))
    }

    /// Validates the form and, only if it is valid, writes it onto `base`.
    pub fn commit(
        &self,
        values: &WidgetConfigFormValues,
        base: &AggregationWidgetConfig,
    ) -> Result<AggregationWidgetConfig, WizardError> {
        let errors = self.validate(values);
        if !errors.is_empty() {
            log_warn!("WIZARD", "commit rejected: form has validation errors");
            return Err(WizardError::Invalid(errors));
        }
        let config = self.form_to_config(values, base);
        log_info!(
            "WIZARD",
            "committed rows={} columns={} series={}",
            config.row_pivots.len(),
            config.column_pivots.len(),
            config.series.len()
        );
        Ok(config)
    }
}

impl Default for AggregationWizard {
    fn default() -> Self {
        Self::new(WizardSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SequentialIdGenerator;

    #[test]
    fn test_elements_in_order() {
        let wizard = AggregationWizard::default();
        let keys: Vec<_> = wizard.elements().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["groupBy", "metrics"]);
    }

    #[test]
    fn test_unknown_element() {
        let wizard = AggregationWizard::default();
        let err = wizard
            .create_element("sort", WidgetConfigFormValues::default())
            .unwrap_err();
        assert!(matches!(err, WizardError::UnknownElement(key) if key == "sort"));
    }

    #[test]
    fn test_visualization_round_trip() {
        let wizard = AggregationWizard::with_id_generator(
            WizardSettings::default(),
            Box::new(SequentialIdGenerator::default()),
        );
        let config = AggregationWidgetConfig::builder().visualization("bar").build();
        let values = wizard.form_from_config(&config).unwrap();
        assert_eq!(values.visualization.as_deref(), Some("bar"));
        assert!(values.group_by.is_none());
        assert_eq!(values.metrics, Some(Vec::new()));

        let back = wizard.form_to_config(&values, &AggregationWidgetConfig::default());
        assert_eq!(back.visualization, "bar");
    }
}
