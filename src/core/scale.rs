use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel range.
///
/// The pixel range may be reversed (`start > end`), which is how the value
/// axis maps larger values upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> ChartResult<f64> {
        validate_pixel_range(pixel_start, pixel_end)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        // Halved operands keep the span finite for domains as wide as f64 allows.
        let span = self.domain_end * 0.5 - self.domain_start * 0.5;
        let normalized = (value * 0.5 - self.domain_start * 0.5) / span;
        Ok(pixel_start + normalized * (pixel_end - pixel_start))
    }
}

fn validate_pixel_range(pixel_start: f64, pixel_end: f64) -> ChartResult<()> {
    if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
        return Err(ChartError::InvalidData(
            "pixel range must be finite and non-empty".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LinearScale;
    use approx::assert_relative_eq;

    #[test]
    fn reversed_pixel_range_maps_upward() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale");
        let px = scale.domain_to_pixel(2.5, 100.0, 0.0).expect("to pixel");
        assert_relative_eq!(px, 75.0);
    }

    #[test]
    fn full_width_domain_maps_without_overflow() {
        let scale = LinearScale::new(-f64::MAX, f64::MAX).expect("scale");
        assert_relative_eq!(scale.domain_to_pixel(0.0, 100.0, 0.0).expect("zero"), 50.0);
        assert_relative_eq!(
            scale.domain_to_pixel(f64::MAX, 100.0, 0.0).expect("top"),
            0.0
        );
        assert_relative_eq!(
            scale.domain_to_pixel(-f64::MAX, 100.0, 0.0).expect("bottom"),
            100.0
        );
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new(3.0, 3.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    }
}
