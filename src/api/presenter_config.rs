use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, PlotMargins, TitleTemplate, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{AnimationConfig, DatasetStyle, ValueAxisConfig};

/// Presenter bootstrap configuration.
///
/// Every field has a serde default so hosts can ship a partial JSON document
/// and only override what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenterConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default)]
    pub dataset: DatasetStyle,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub value_axis: ValueAxisConfig,
    #[serde(default)]
    pub title: TitleTemplate,
    #[serde(default = "default_title_font_size_px")]
    pub title_font_size_px: f64,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    /// Fraction of each category band covered by its bar.
    #[serde(default = "default_bar_width_ratio")]
    pub bar_width_ratio: f64,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: PlotMargins::default(),
            dataset: DatasetStyle::default(),
            animation: AnimationConfig::default(),
            value_axis: ValueAxisConfig::default(),
            title: TitleTemplate::default(),
            title_font_size_px: default_title_font_size_px(),
            axis_font_size_px: default_axis_font_size_px(),
            bar_width_ratio: default_bar_width_ratio(),
        }
    }
}

impl PresenterConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse presenter config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (name, value) in [
            ("margins.top", self.margins.top),
            ("margins.right", self.margins.right),
            ("margins.bottom", self.margins.bottom),
            ("margins.left", self.margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        PlotArea::for_viewport(self.viewport, self.margins)?;
        for (name, value) in [
            ("title_font_size_px", self.title_font_size_px),
            ("axis_font_size_px", self.axis_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.bar_width_ratio.is_finite()
            || self.bar_width_ratio <= 0.0
            || self.bar_width_ratio > 1.0
        {
            return Err(ChartError::InvalidData(
                "`bar_width_ratio` must be finite and in (0, 1]".to_owned(),
            ));
        }
        self.dataset.validate()?;
        self.value_axis.validate()
    }
}

fn default_title_font_size_px() -> f64 {
    18.0
}

fn default_axis_font_size_px() -> f64 {
    12.0
}

fn default_bar_width_ratio() -> f64 {
    0.72
}
