use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, ChartSpec, Easing};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual style of the single data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyle {
    pub label: String,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    /// Whether the area under the series is filled. Derived from the kind.
    pub fill: bool,
    /// Curve tension for line kinds. Segments are drawn straight.
    pub tension: f64,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            label: "Eco Actions".to_owned(),
            background_color: Color::from_css_rgba(25, 135, 84, 0.6),
            border_color: Color::from_css_rgba(25, 135, 84, 1.0),
            border_width: 1.0,
            fill: true,
            tension: 0.3,
        }
    }
}

impl DatasetStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.background_color.validate()?;
        self.border_color.validate()?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "dataset border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tension.is_finite() || !(0.0..=1.0).contains(&self.tension) {
            return Err(ChartError::InvalidData(
                "dataset tension must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Entrance animation replayed on every redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: Easing::EaseOutBounce,
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleConfig {
    pub display: bool,
    pub text: String,
    pub font_size_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginsConfig {
    pub legend_display: bool,
    pub tooltip_enabled: bool,
    pub title: TitleConfig,
}

/// Value (y) axis behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisConfig {
    pub begin_at_zero: bool,
    pub step_size: f64,
    pub max_ticks: usize,
}

impl Default for ValueAxisConfig {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            step_size: 1.0,
            max_ticks: 11,
        }
    }
}

impl ValueAxisConfig {
    pub fn validate(self) -> ChartResult<()> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "value axis step size must be finite and > 0".to_owned(),
            ));
        }
        if self.max_ticks < 2 {
            return Err(ChartError::InvalidData(
                "value axis max ticks must be >= 2".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Full configuration of one rendered chart instance.
///
/// Built from an immutable `ChartSpec` plus a kind; switching kind builds a
/// new config and leaves the `ChartSpec` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub dataset: DatasetStyle,
    pub animation: AnimationConfig,
    pub plugins: PluginsConfig,
    pub value_axis: ValueAxisConfig,
}

impl ChartConfig {
    pub fn build(
        spec: &ChartSpec,
        kind: ChartKind,
        dataset: &DatasetStyle,
        animation: AnimationConfig,
        title_font_size_px: f64,
        value_axis: ValueAxisConfig,
    ) -> ChartResult<Self> {
        let config = Self {
            kind,
            labels: spec.labels().to_vec(),
            values: spec.values().to_vec(),
            dataset: DatasetStyle {
                fill: kind.fills_area(),
                ..dataset.clone()
            },
            animation,
            plugins: PluginsConfig {
                legend_display: false,
                tooltip_enabled: true,
                title: TitleConfig {
                    display: true,
                    text: spec.title().to_owned(),
                    font_size_px: title_font_size_px,
                },
            },
            value_axis,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.labels.len() != self.values.len() {
            return Err(ChartError::InvalidData(
                "config labels and values must have equal length".to_owned(),
            ));
        }
        self.dataset.validate()?;
        if !self.plugins.title.font_size_px.is_finite() || self.plugins.title.font_size_px <= 0.0
        {
            return Err(ChartError::InvalidData(
                "title font size must be finite and > 0".to_owned(),
            ));
        }
        self.value_axis.validate()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.plugins.title.text
    }
}
