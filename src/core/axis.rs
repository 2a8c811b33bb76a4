use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Evenly spaced positions for labelled categories along x.
///
/// With `offset` each category sits in the middle of its band (bar charts);
/// without it the first and last categories touch the plot edges (line
/// charts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAxis {
    count: usize,
    offset: bool,
}

impl CategoryAxis {
    #[must_use]
    pub fn new(count: usize, offset: bool) -> Self {
        Self { count, offset }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn band_width(self, area: PlotArea) -> f64 {
        area.width() / self.count.max(1) as f64
    }

    pub fn position(self, index: usize, area: PlotArea) -> ChartResult<f64> {
        if index >= self.count {
            return Err(ChartError::InvalidData(format!(
                "category index {index} out of range for {} categories",
                self.count
            )));
        }

        let index = index as f64;
        if self.offset {
            return Ok(area.left + (index + 0.5) * self.band_width(area));
        }
        if self.count == 1 {
            return Ok(area.left + area.width() * 0.5);
        }
        Ok(area.left + index * area.width() / (self.count - 1) as f64)
    }
}

/// Vertical value axis with step-aligned bounds and ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    scale: LinearScale,
    ticks: Vec<f64>,
}

impl ValueAxis {
    /// Builds the axis covering `values`.
    ///
    /// Bounds are snapped outward to multiples of `step`. When the tick count
    /// would exceed `max_ticks` the tick spacing grows by whole multiples of
    /// `step`.
    pub fn from_values(
        values: &[f64],
        begin_at_zero: bool,
        step: f64,
        max_ticks: usize,
    ) -> ChartResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidData(
                "value axis step must be finite and > 0".to_owned(),
            ));
        }
        if max_ticks < 2 {
            return Err(ChartError::InvalidData(
                "value axis needs room for at least 2 ticks".to_owned(),
            ));
        }

        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if values.is_empty() {
            min = 0.0;
            max = 0.0;
        }
        if begin_at_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "value axis input must be finite".to_owned(),
            ));
        }

        let mut start = snap(min, step, f64::floor);
        let mut end = snap(max, step, f64::ceil);
        if end <= start {
            let pad = step.max(start.abs() * f64::EPSILON);
            if (start + pad).is_finite() {
                end = start + pad;
            } else {
                start = end - pad;
            }
        }

        // Halved so the widest finite domain still has a finite span.
        let half_span = end * 0.5 - start * 0.5;
        let intervals = (max_ticks - 1) as f64;
        let step_count = (half_span / step * 2.0).round();
        let multiplier = (step_count / intervals).ceil().max(1.0);
        let tick_step = step * multiplier;
        let tick_count = (half_span / tick_step * 2.0).ceil();
        let stepped_end = start + tick_count * tick_step;

        let ticks = if tick_step.is_finite() && stepped_end.is_finite() {
            end = stepped_end;
            (0..=tick_count as usize)
                .map(|i| start + i as f64 * tick_step)
                .collect()
        } else {
            // Step multiples overflow; spread the ticks evenly instead.
            (0..max_ticks)
                .map(|i| lerp(start, end, i as f64 / intervals))
                .collect()
        };
        Ok(Self {
            scale: LinearScale::new(start, end)?,
            ticks,
        })
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.scale.domain()
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Maps `value` to pixel Y inside `area`, larger values higher up.
    pub fn value_to_pixel(&self, value: f64, area: PlotArea) -> ChartResult<f64> {
        self.scale.domain_to_pixel(value, area.bottom, area.top)
    }

    /// Pixel Y of the zero line, clamped into the axis domain.
    pub fn baseline_pixel(&self, area: PlotArea) -> ChartResult<f64> {
        let (start, end) = self.domain();
        self.value_to_pixel(0.0_f64.clamp(start, end), area)
    }
}

/// Rounds `value` to a multiple of `step`, keeping `value` when that overflows.
fn snap(value: f64, step: f64, round: fn(f64) -> f64) -> f64 {
    let snapped = round(value / step) * step;
    if snapped.is_finite() { snapped } else { value }
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

#[cfg(test)]
mod tests {
    use super::{CategoryAxis, ValueAxis};
    use crate::core::PlotArea;
    use approx::assert_relative_eq;

    fn area() -> PlotArea {
        PlotArea {
            left: 0.0,
            top: 0.0,
            right: 300.0,
            bottom: 100.0,
        }
    }

    #[test]
    fn value_axis_begins_at_zero_with_unit_ticks() {
        let axis = ValueAxis::from_values(&[2.0, 0.0, 5.0], true, 1.0, 11).expect("axis");
        assert_eq!(axis.domain(), (0.0, 5.0));
        assert_eq!(axis.ticks(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn value_axis_thins_ticks_for_large_ranges() {
        let axis = ValueAxis::from_values(&[95.0], true, 1.0, 11).expect("axis");
        assert_eq!(axis.ticks().len(), 11);
        assert_eq!(axis.domain(), (0.0, 100.0));
    }

    #[test]
    fn empty_values_still_produce_a_domain() {
        let axis = ValueAxis::from_values(&[], true, 1.0, 11).expect("axis");
        assert_eq!(axis.domain(), (0.0, 1.0));
    }

    #[test]
    fn extreme_finite_range_keeps_finite_domain_and_ticks() {
        for values in [[1e308, -1e308], [f64::MAX, -f64::MAX]] {
            let axis = ValueAxis::from_values(&values, true, 1.0, 11).expect("axis");
            let (start, end) = axis.domain();
            assert!(start.is_finite() && end.is_finite() && start < end);
            assert!(axis.ticks().iter().all(|tick| tick.is_finite()));
            assert!(axis.ticks().len() <= 12);
            let top = axis.value_to_pixel(values[0], area()).expect("top");
            assert!((0.0..=100.0).contains(&top));
        }
    }

    #[test]
    fn single_max_value_without_zero_still_spans() {
        let axis = ValueAxis::from_values(&[f64::MAX], false, 1.0, 11).expect("axis");
        let (start, end) = axis.domain();
        assert!(start.is_finite() && end.is_finite() && start < end);
        let px = axis.value_to_pixel(f64::MAX, area()).expect("pixel");
        assert!((-1.0..=101.0).contains(&px));
    }

    #[test]
    fn baseline_sits_at_plot_bottom_for_positive_data() {
        let axis = ValueAxis::from_values(&[4.0], true, 1.0, 11).expect("axis");
        assert_relative_eq!(axis.baseline_pixel(area()).expect("baseline"), 100.0);
        assert_relative_eq!(axis.value_to_pixel(4.0, area()).expect("top"), 0.0);
    }

    #[test]
    fn category_positions_follow_offset_mode() {
        let bars = CategoryAxis::new(3, true);
        assert_relative_eq!(bars.position(0, area()).expect("p0"), 50.0);
        assert_relative_eq!(bars.position(2, area()).expect("p2"), 250.0);

        let line = CategoryAxis::new(3, false);
        assert_relative_eq!(line.position(0, area()).expect("p0"), 0.0);
        assert_relative_eq!(line.position(2, area()).expect("p2"), 300.0);
        assert!(line.position(3, area()).is_err());
    }
}
