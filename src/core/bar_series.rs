use serde::{Deserialize, Serialize};

use crate::core::{CategoryAxis, PlotArea, ValueAxis};
use crate::error::{ChartError, ChartResult};

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    pub index: usize,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl CategoryBar {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x_right - self.x_left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_bottom - self.y_top
    }
}

/// Projects category values into vertical bars growing from the zero line.
///
/// `width_ratio` is the fraction of each category band covered by its bar.
/// `progress` scales every value toward the baseline and is driven by the
/// entrance animation.
pub fn project_category_bars(
    values: &[f64],
    categories: CategoryAxis,
    value_axis: &ValueAxis,
    area: PlotArea,
    width_ratio: f64,
    progress: f64,
) -> ChartResult<Vec<CategoryBar>> {
    if !width_ratio.is_finite() || width_ratio <= 0.0 || width_ratio > 1.0 {
        return Err(ChartError::InvalidData(
            "bar width ratio must be finite and in (0, 1]".to_owned(),
        ));
    }
    if !progress.is_finite() {
        return Err(ChartError::InvalidData(
            "animation progress must be finite".to_owned(),
        ));
    }
    if values.len() != categories.count() {
        return Err(ChartError::InvalidData(format!(
            "{} values for {} categories",
            values.len(),
            categories.count()
        )));
    }

    let baseline_y = value_axis.baseline_pixel(area)?;
    let half_width = categories.band_width(area) * width_ratio * 0.5;

    let mut bars = Vec::with_capacity(values.len());
    for (index, value) in values.iter().copied().enumerate() {
        let x_center = categories.position(index, area)?;
        let y_value = value_axis.value_to_pixel(value * progress, area)?;
        bars.push(CategoryBar {
            index,
            x_left: x_center - half_width,
            x_right: x_center + half_width,
            y_top: y_value.min(baseline_y),
            y_bottom: y_value.max(baseline_y),
        });
    }

    Ok(bars)
}
