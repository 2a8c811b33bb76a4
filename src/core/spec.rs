use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ChartKind;
use crate::error::{PresenterError, PresenterResult};

pub const DEFAULT_DISPLAY_NAME: &str = "User";
pub const DEFAULT_TITLE_SUFFIX: &str = "'s Weekly Eco Actions";

/// Rule deriving the chart title from an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleTemplate {
    #[serde(default = "default_display_name")]
    pub default_display_name: String,
    #[serde(default = "default_title_suffix")]
    pub suffix: String,
}

impl Default for TitleTemplate {
    fn default() -> Self {
        Self {
            default_display_name: default_display_name(),
            suffix: default_title_suffix(),
        }
    }
}

impl TitleTemplate {
    /// Only an absent name falls back to the default; an empty name is kept.
    #[must_use]
    pub fn render(&self, display_name: Option<&str>) -> String {
        let name = display_name.unwrap_or(&self.default_display_name);
        format!("{name}{}", self.suffix)
    }
}

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_owned()
}

fn default_title_suffix() -> String {
    DEFAULT_TITLE_SUFFIX.to_owned()
}

/// Title for `display_name` using the default template.
#[must_use]
pub fn chart_title(display_name: Option<&str>) -> String {
    TitleTemplate::default().render(display_name)
}

/// Immutable data bundle driving one chart.
///
/// `labels[i]` names `values[i]`. The bundle is never mutated once a
/// presenter owns it; a kind switch re-renders the same data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default)]
    kind: ChartKind,
    labels: Vec<String>,
    values: Vec<f64>,
    title: String,
}

impl ChartSpec {
    #[must_use]
    pub fn new(labels: Vec<String>, values: Vec<f64>, title: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::default(),
            labels,
            values,
            title: title.into(),
        }
    }

    /// Sets the kind used for the first render.
    #[must_use]
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Label/value pairs in positional order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn validate(&self) -> PresenterResult<()> {
        if self.labels.len() != self.values.len() {
            return Err(PresenterError::MissingData(format!(
                "labels ({}) and values ({}) must have equal length",
                self.labels.len(),
                self.values.len()
            )));
        }
        if let Some(index) = self.values.iter().position(|value| !value.is_finite()) {
            return Err(PresenterError::MissingData(format!(
                "value at index {index} must be finite"
            )));
        }
        Ok(())
    }
}

/// Data injected by the server-side template at page load.
///
/// Field aliases accept the names the page template emits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default, alias = "chartLabels")]
    pub labels: Option<Vec<String>>,
    #[serde(default, alias = "chartData")]
    pub values: Option<Vec<f64>>,
    #[serde(default)]
    pub username: Option<String>,
}

impl PageData {
    #[must_use]
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels: Some(labels),
            values: Some(values),
            username: None,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn from_json_str(input: &str) -> PresenterResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PresenterError::MissingData(format!("failed to parse page data: {e}")))
    }

    /// Builds the chart spec with the default title template.
    pub fn to_chart_spec(&self) -> PresenterResult<ChartSpec> {
        self.to_chart_spec_with(&TitleTemplate::default())
    }

    pub fn to_chart_spec_with(&self, template: &TitleTemplate) -> PresenterResult<ChartSpec> {
        let labels = self
            .labels
            .clone()
            .ok_or_else(|| PresenterError::MissingData("chart labels are absent".to_owned()))?;
        let values = self
            .values
            .clone()
            .ok_or_else(|| PresenterError::MissingData("chart values are absent".to_owned()))?;

        let spec = ChartSpec::new(labels, values, template.render(self.username.as_deref()));
        spec.validate()?;
        debug!(
            points = spec.len(),
            has_username = self.username.is_some(),
            "built chart spec from page data"
        );
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartSpec, PageData, TitleTemplate, chart_title};
    use crate::error::PresenterError;

    #[test]
    fn title_falls_back_to_default_name() {
        assert_eq!(chart_title(Some("Alex")), "Alex's Weekly Eco Actions");
        assert_eq!(chart_title(None), "User's Weekly Eco Actions");
    }

    #[test]
    fn custom_template_is_applied() {
        let template = TitleTemplate {
            default_display_name: "Guest".to_owned(),
            suffix: " - eco log".to_owned(),
        };
        assert_eq!(template.render(None), "Guest - eco log");
    }

    #[test]
    fn unequal_lengths_are_missing_data() {
        let spec = ChartSpec::new(vec!["Mon".to_owned()], vec![1.0, 2.0], "t");
        assert!(matches!(spec.validate(), Err(PresenterError::MissingData(_))));
    }

    #[test]
    fn page_data_accepts_template_field_names() {
        let data = PageData::from_json_str(
            r#"{"chartLabels":["Mon","Tue"],"chartData":[1,3],"username":"Sam"}"#,
        )
        .expect("page data");
        let spec = data.to_chart_spec().expect("spec");
        assert_eq!(spec.labels(), ["Mon", "Tue"]);
        assert_eq!(spec.values(), [1.0, 3.0]);
        assert_eq!(spec.title(), "Sam's Weekly Eco Actions");
    }

    #[test]
    fn absent_values_are_missing_data() {
        let data = PageData {
            labels: Some(vec!["Mon".to_owned()]),
            values: None,
            username: None,
        };
        assert!(matches!(
            data.to_chart_spec(),
            Err(PresenterError::MissingData(_))
        ));
    }

    #[test]
    fn empty_spec_is_valid() {
        let spec = ChartSpec::new(Vec::new(), Vec::new(), "t");
        assert!(spec.validate().is_ok());
        assert!(spec.is_empty());
    }
}
