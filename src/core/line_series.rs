use serde::{Deserialize, Serialize};

use crate::core::{CategoryAxis, PlotArea, ValueAxis};
use crate::error::{ChartError, ChartResult};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects category values into adjacent line segments.
///
/// Fewer than two values produce no segments. Like bars, each point is
/// pulled toward the zero line by `1 - progress`.
pub fn project_category_line(
    values: &[f64],
    categories: CategoryAxis,
    value_axis: &ValueAxis,
    area: PlotArea,
    progress: f64,
) -> ChartResult<Vec<LineSegment>> {
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
    if values.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(values.len());
    for (index, value) in values.iter().copied().enumerate() {
        let x = categories.position(index, area)?;
        let y = value_axis.value_to_pixel(value * progress, area)?;
        mapped.push((x, y));
    }

    let segments = mapped
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        })
        .collect();

    Ok(segments)
}
