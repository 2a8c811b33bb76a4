use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartKind, EntranceAnimation};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartConfig, PresenterConfig, scene_builder::build_chart_frame};

/// Identifier of one chart instance; never reused by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(u64);

impl InstanceId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart#{}", self.0)
    }
}

/// Read-only view of the live chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInstanceHandle {
    pub id: InstanceId,
    pub kind: ChartKind,
}

/// The single chart currently painted on a drawing surface.
///
/// Instances are never reconfigured: a kind change destroys this one and
/// builds a new one. `destroy` consumes the instance so a released chart
/// cannot be drawn again.
#[derive(Debug)]
pub struct ChartInstance {
    id: InstanceId,
    config: ChartConfig,
    animation: EntranceAnimation,
}

impl ChartInstance {
    /// Builds the instance and paints its first animation frame.
    pub(super) fn create<R: Renderer>(
        id: InstanceId,
        config: ChartConfig,
        presenter: &PresenterConfig,
        surface: &mut R,
    ) -> ChartResult<Self> {
        let animation = EntranceAnimation::new(config.animation.duration(), config.animation.easing);
        let instance = Self {
            id,
            config,
            animation,
        };
        instance.draw(presenter, surface)?;
        debug!(id = %instance.id, kind = %instance.config.kind, "created chart instance");
        Ok(instance)
    }

    pub(super) fn draw<R: Renderer>(
        &self,
        presenter: &PresenterConfig,
        surface: &mut R,
    ) -> ChartResult<()> {
        let frame = build_chart_frame(&self.config, presenter, self.animation.progress())?;
        surface.render(&frame)
    }

    /// Steps the entrance animation and redraws when it moved.
    ///
    /// Returns whether the animation is still running afterwards.
    pub(super) fn tick<R: Renderer>(
        &mut self,
        delta: Duration,
        presenter: &PresenterConfig,
        surface: &mut R,
    ) -> ChartResult<bool> {
        if self.animation.is_finished() {
            return Ok(false);
        }
        self.animation.advance(delta);
        self.draw(presenter, surface)?;
        Ok(!self.animation.is_finished())
    }

    pub(super) fn destroy<R: Renderer>(self, surface: &mut R) -> ChartResult<()> {
        surface.release()?;
        debug!(id = %self.id, kind = %self.config.kind, "destroyed chart instance");
        Ok(())
    }

    #[must_use]
    pub fn handle(&self) -> ChartInstanceHandle {
        ChartInstanceHandle {
            id: self.id,
            kind: self.config.kind,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn animation(&self) -> &EntranceAnimation {
        &self.animation
    }
}
