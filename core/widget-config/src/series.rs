//! FILENAME: core/widget-config/src/series.rs
//! Series (metric) definitions.
//!
//! A series is stored as function text, e.g. `count()`, `avg(took_ms)` or
//! `percentile(took_ms,95)`, plus presentation config.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `name(field)` or `name(field,percentile)`; field may be empty.
static SERIES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+)\(([^,()]*)(?:,\s*([0-9]+(?:\.[0-9]+)?))?\)$")
        .expect("series pattern is a valid regex")
});

/// Presentation settings of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Custom display name; the function text is shown when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One metric of an aggregation widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub function: String,
    #[serde(default)]
    pub config: SeriesConfig,
}

impl Series {
    /// Builds the function text from its parts.
    pub fn create(function: &str, field: Option<&str>, percentile: Option<f64>) -> Self {
        let field = field.unwrap_or("");
        let text = match percentile {
            Some(p) => format!("{}({},{})", function, field, p),
            None => format!("{}({})", function, field),
        };
        Series {
            function: text,
            config: SeriesConfig::default(),
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.config.name = name;
        self
    }
}

/// The parts of a series function text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSeries {
    pub function: String,
    pub field: Option<String>,
    pub percentile: Option<String>,
}

/// Splits function text into its parts, `None` if it is not `name(args)`.
pub fn parse_series(function: &str) -> Option<ParsedSeries> {
    let caps = SERIES_PATTERN.captures(function.trim())?;
    let field = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|f| !f.is_empty())
        .map(str::to_string);

    Some(ParsedSeries {
        function: caps[1].to_string(),
        field,
        percentile: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        let parsed = parse_series("count()").unwrap();
        assert_eq!(parsed.function, "count");
        assert_eq!(parsed.field, None);
        assert_eq!(parsed.percentile, None);
    }

    #[test]
    fn test_parse_field_function() {
        let parsed = parse_series("avg(took_ms)").unwrap();
        assert_eq!(parsed.function, "avg");
        assert_eq!(parsed.field.as_deref(), Some("took_ms"));
    }

    #[test]
    fn test_parse_percentile() {
        let parsed = parse_series("percentile(took_ms,95)").unwrap();
        assert_eq!(parsed.function, "percentile");
        assert_eq!(parsed.field.as_deref(), Some("took_ms"));
        assert_eq!(parsed.percentile.as_deref(), Some("95"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_series("not a series").is_none());
        assert!(parse_series("avg(a)(b)").is_none());
    }

    #[test]
    fn test_create_text() {
        assert_eq!(Series::create("count", None, None).function, "count()");
        assert_eq!(Series::create("max", Some("bytes"), None).function, "max(bytes)");
        assert_eq!(
            Series::create("percentile", Some("took_ms"), Some(99.0)).function,
            "percentile(took_ms,99)"
        );
    }
}
