//! Page-level glue around the chart presenter: event dispatch, PNG export
//! and the scroll-triggered footer reveal.

mod controller;
mod export;
mod footer;
mod static_page;

pub use controller::{PageController, PageElements, TickOutcome};
pub use export::{ChartExport, PNG_MIME_TYPE, export_png};
pub use footer::{FooterCheck, FooterElement, FooterRevealer, ScrollMetrics};
pub use static_page::{ClassList, StaticPage};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_SURFACE_ID: &str = "ecoChart";
pub const DEFAULT_SELECTOR_ID: &str = "chartTypeSelector";
pub const DEFAULT_FOOTER_ID: &str = "page-footer";
pub const DEFAULT_EXPORT_BUTTON_SELECTOR: &str = ".export-btn";
pub const DEFAULT_EXPORT_FILENAME: &str = "eco-chart.png";
pub const DEFAULT_FOOTER_CLASS: &str = "footer-animate";

/// Element identifiers and footer tuning for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_surface_id")]
    pub surface_id: String,
    #[serde(default = "default_selector_id")]
    pub selector_id: String,
    #[serde(default = "default_footer_id")]
    pub footer_id: String,
    #[serde(default = "default_export_button_selector")]
    pub export_button_selector: String,
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
    #[serde(default = "default_footer_class")]
    pub footer_class: String,
    #[serde(default = "default_footer_threshold_px")]
    pub footer_threshold_px: f64,
    #[serde(default = "default_scroll_throttle_ms")]
    pub scroll_throttle_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            surface_id: default_surface_id(),
            selector_id: default_selector_id(),
            footer_id: default_footer_id(),
            export_button_selector: default_export_button_selector(),
            export_filename: default_export_filename(),
            footer_class: default_footer_class(),
            footer_threshold_px: default_footer_threshold_px(),
            scroll_throttle_ms: default_scroll_throttle_ms(),
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("surface_id", &self.surface_id),
            ("selector_id", &self.selector_id),
            ("footer_id", &self.footer_id),
            ("export_button_selector", &self.export_button_selector),
            ("export_filename", &self.export_filename),
            ("footer_class", &self.footer_class),
        ] {
            if value.trim().is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "page config `{name}` must not be empty"
                )));
            }
        }
        if !self.footer_threshold_px.is_finite() || self.footer_threshold_px < 0.0 {
            return Err(ChartError::InvalidData(
                "page config `footer_threshold_px` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_surface_id() -> String {
    DEFAULT_SURFACE_ID.to_owned()
}

fn default_selector_id() -> String {
    DEFAULT_SELECTOR_ID.to_owned()
}

fn default_footer_id() -> String {
    DEFAULT_FOOTER_ID.to_owned()
}

fn default_export_button_selector() -> String {
    DEFAULT_EXPORT_BUTTON_SELECTOR.to_owned()
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_owned()
}

fn default_footer_class() -> String {
    DEFAULT_FOOTER_CLASS.to_owned()
}

fn default_footer_threshold_px() -> f64 {
    50.0
}

fn default_scroll_throttle_ms() -> u64 {
    100
}
