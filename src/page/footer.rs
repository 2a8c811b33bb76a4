use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Scroll geometry sampled when a footer check runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub page_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_y: f64, viewport_height: f64, page_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            page_height,
        }
    }

    /// Whether the viewport's bottom edge is within `threshold_px` of the page end.
    #[must_use]
    pub fn is_near_bottom(self, threshold_px: f64) -> bool {
        self.scroll_y + self.viewport_height >= self.page_height - threshold_px
    }
}

/// Element able to receive a CSS class.
pub trait FooterElement {
    fn add_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Result of one `FooterRevealer::poll` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterCheck {
    /// Nothing was due.
    Idle,
    NotNearBottom,
    Revealed,
    /// The check was due but the footer element could not be found.
    FooterMissing,
}

/// Throttled, one-shot footer reveal.
///
/// A scroll event schedules at most one pending check `throttle` later.
/// Once the footer has been revealed the revealer ignores all further input.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterRevealer {
    class: String,
    throttle: Duration,
    threshold_px: f64,
    animated: bool,
    pending_deadline: Option<Instant>,
}

impl FooterRevealer {
    #[must_use]
    pub fn new(class: impl Into<String>, throttle: Duration, threshold_px: f64) -> Self {
        Self {
            class: class.into(),
            throttle,
            threshold_px,
            animated: false,
            pending_deadline: None,
        }
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_deadline
    }

    /// Records a scroll event. Returns whether a new check was scheduled.
    pub fn on_scroll(&mut self, now: Instant) -> bool {
        if self.animated || self.pending_deadline.is_some() {
            return false;
        }
        self.pending_deadline = Some(now + self.throttle);
        trace!(throttle_ms = self.throttle.as_millis() as u64, "scheduled footer check");
        true
    }

    /// Runs the pending check if its deadline has passed.
    pub fn poll<F: FooterElement + ?Sized>(
        &mut self,
        now: Instant,
        metrics: ScrollMetrics,
        footer: Option<&mut F>,
    ) -> FooterCheck {
        match self.pending_deadline {
            Some(deadline) if now >= deadline => {}
            _ => return FooterCheck::Idle,
        }
        self.pending_deadline = None;

        if !metrics.is_near_bottom(self.threshold_px) {
            return FooterCheck::NotNearBottom;
        }
        let Some(footer) = footer else {
            warn!("footer element missing; reveal skipped");
            return FooterCheck::FooterMissing;
        };

        footer.add_class(&self.class);
        self.animated = true;
        debug!(class = %self.class, "footer revealed");
        FooterCheck::Revealed
    }
}
