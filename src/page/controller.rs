use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::api::{ChartPresenter, PresenterConfig};
use crate::core::PageData;
use crate::error::{ChartResult, PresenterError};
use crate::render::{Renderer, SurfaceSnapshot};

use super::{ChartExport, FooterCheck, FooterElement, FooterRevealer, PageConfig, ScrollMetrics};

/// Element lookups the page host provides.
pub trait PageElements {
    type Surface: Renderer;
    type Footer: FooterElement;

    /// Resolves and hands over the drawing surface registered under `id`.
    fn take_surface(&mut self, id: &str) -> Option<Self::Surface>;

    /// Whether an element matching `selector` exists on the page.
    fn has_element(&self, selector: &str) -> bool;

    fn footer_mut(&mut self, id: &str) -> Option<&mut Self::Footer>;

    fn scroll_metrics(&self) -> ScrollMetrics;
}

/// What one `on_tick` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub animating: bool,
    pub footer: FooterCheck,
}

/// Dispatches page events to the chart presenter, exporter and footer.
///
/// Every failure is logged and swallowed: page events never propagate
/// errors to the host.
pub struct PageController<P: PageElements> {
    config: PageConfig,
    elements: P,
    presenter: ChartPresenter<P::Surface>,
    footer: FooterRevealer,
}

impl<P: PageElements> PageController<P> {
    pub fn new(config: PageConfig, presenter: PresenterConfig, elements: P) -> ChartResult<Self> {
        config.validate()?;
        let footer = FooterRevealer::new(
            config.footer_class.clone(),
            config.scroll_throttle(),
            config.footer_threshold_px,
        );
        Ok(Self {
            presenter: ChartPresenter::new(presenter)?,
            config,
            elements,
            footer,
        })
    }

    /// Page-load handler: builds the chart from injected data.
    pub fn on_load(&mut self, data: &PageData) -> bool {
        let spec = match data.to_chart_spec_with(&self.presenter.config().title) {
            Ok(spec) => spec,
            Err(err) => {
                warn!(error = %err, "chart data not found; chart not rendered");
                return false;
            }
        };
        let surface = self.elements.take_surface(&self.config.surface_id);
        match self.presenter.initialize(spec, surface) {
            Ok(()) => {
                debug!(surface_id = %self.config.surface_id, "chart rendered on page load");
                true
            }
            Err(err) => {
                warn!(error = %err, surface_id = %self.config.surface_id, "chart not rendered");
                false
            }
        }
    }

    /// Selector change handler. Ignored when the page has no selector.
    pub fn on_kind_selected(&mut self, value: &str) -> bool {
        if !self.elements.has_element(&self.config.selector_id) {
            trace!(value, "no chart kind selector on page; ignoring selection");
            return false;
        }
        match self.presenter.select_kind(value) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, value, "chart kind change failed");
                false
            }
        }
    }

    pub fn on_scroll(&mut self, now: Instant) -> bool {
        self.footer.on_scroll(now)
    }

    /// Timer handler: runs a due footer check and steps the chart animation.
    pub fn on_tick(&mut self, now: Instant, delta: Duration) -> TickOutcome {
        let metrics = self.elements.scroll_metrics();
        let footer = self.footer.poll(
            now,
            metrics,
            self.elements.footer_mut(&self.config.footer_id),
        );

        let animating = match self.presenter.advance_animation(delta) {
            Ok(running) => running,
            Err(PresenterError::NotInitialized) => false,
            Err(err) => {
                warn!(error = %err, "chart animation frame failed");
                false
            }
        };

        TickOutcome { animating, footer }
    }

    #[must_use]
    pub fn presenter(&self) -> &ChartPresenter<P::Surface> {
        &self.presenter
    }

    #[must_use]
    pub fn elements(&self) -> &P {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut P {
        &mut self.elements
    }

    #[must_use]
    pub fn footer(&self) -> &FooterRevealer {
        &self.footer
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }
}

impl<P> PageController<P>
where
    P: PageElements,
    P::Surface: SurfaceSnapshot,
{
    /// Export button handler. Needs both the export button and a rendered chart.
    pub fn on_export_clicked(&mut self) -> Option<ChartExport> {
        if !self.elements.has_element(&self.config.export_button_selector) {
            trace!("no export button on page; ignoring click");
            return None;
        }
        match self.presenter.export_png(&self.config.export_filename) {
            Ok(export) => Some(export),
            Err(err) => {
                warn!(error = %err, "chart export failed");
                None
            }
        }
    }
}
