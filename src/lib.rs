//! eco-chart: headless presenter for the weekly eco-actions chart.
//!
//! The crate keeps chart lifecycle, scene building and drawing backends
//! apart: `api::ChartPresenter` owns the single live chart, `render` turns
//! frames into pixels, and `page` wires page events (load, selector change,
//! export click, scroll) onto them.

pub mod api;
pub mod core;
pub mod error;
pub mod page;
pub mod render;
pub mod telemetry;

pub use api::{ChartPresenter, PresenterConfig};
pub use error::{ChartError, ChartResult, PresenterError, PresenterResult};
