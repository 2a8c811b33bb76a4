use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::core::{ChartKind, ChartSpec};
use crate::error::{ChartResult, PresenterError, PresenterResult};
use crate::render::Renderer;

use super::{ChartConfig, ChartInstance, ChartInstanceHandle, InstanceId, PresenterConfig};

/// Owns one chart bound to one drawing surface.
///
/// The presenter is either uninitialized (no spec) or initialized. While
/// initialized it holds at most one live `ChartInstance`, and exactly one
/// after every successful call; `set_kind` is the only way to replace it, and
/// the old instance is always released on the surface before the new one is
/// painted.
pub struct ChartPresenter<R: Renderer> {
    config: PresenterConfig,
    surface: Option<R>,
    spec: Option<ChartSpec>,
    instance: Option<ChartInstance>,
    instances_created: u64,
}

impl<R: Renderer> ChartPresenter<R> {
    pub fn new(config: PresenterConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            surface: None,
            spec: None,
            instance: None,
            instances_created: 0,
        })
    }

    /// Binds `spec` to `surface` and paints the first chart using `spec.kind()`.
    ///
    /// `surface` is `None` when the host could not resolve the drawing
    /// surface. On any error no instance is created.
    pub fn initialize(&mut self, spec: ChartSpec, surface: Option<R>) -> PresenterResult<()> {
        let Some(mut surface) = surface else {
            warn!("chart surface missing; skipping chart render");
            return Err(PresenterError::MissingSurface);
        };
        if let Err(err) = spec.validate() {
            warn!(error = %err, "chart data malformed; skipping chart render");
            return Err(err);
        }

        let chart_config = build_config(&spec, spec.kind(), &self.config)?;
        self.teardown()?;

        let instance = paint_instance(
            &self.config,
            &mut self.instances_created,
            chart_config,
            &mut surface,
        )?;
        debug!(
            points = spec.len(),
            kind = %spec.kind(),
            "chart presenter initialized"
        );
        self.surface = Some(surface);
        self.spec = Some(spec);
        self.instance = Some(instance);
        Ok(())
    }

    /// Replaces the live chart with one showing the same data as `kind`.
    ///
    /// The new config is built before anything is released. If painting the
    /// new chart fails after the old one was released, the slot stays empty
    /// while the presenter remains initialized, so a later switch repaints.
    pub fn set_kind(&mut self, kind: ChartKind) -> PresenterResult<()> {
        let (Some(spec), Some(surface)) = (self.spec.as_ref(), self.surface.as_mut()) else {
            warn!(%kind, "chart kind change before initialization");
            return Err(PresenterError::NotInitialized);
        };
        let chart_config = build_config(spec, kind, &self.config)?;

        if let Some(previous) = self.instance.take() {
            previous.destroy(surface)?;
        }

        let instance = paint_instance(
            &self.config,
            &mut self.instances_created,
            chart_config,
            surface,
        )
        .inspect_err(|err| warn!(error = %err, %kind, "chart kind switch failed to paint"))?;
        debug!(id = %instance.handle().id, %kind, "chart kind switched");
        self.instance = Some(instance);
        Ok(())
    }

    /// Parses a selector value such as `"line"` and applies it.
    pub fn select_kind(&mut self, value: &str) -> PresenterResult<()> {
        let kind = value.parse::<ChartKind>().inspect_err(|err| {
            warn!(error = %err, "ignoring chart kind selection");
        })?;
        self.set_kind(kind)
    }

    /// Advances the entrance animation of the live chart by `delta`.
    ///
    /// Returns whether further ticks are needed.
    pub fn advance_animation(&mut self, delta: Duration) -> PresenterResult<bool> {
        let (Some(instance), Some(surface)) = (self.instance.as_mut(), self.surface.as_mut())
        else {
            return Err(PresenterError::NotInitialized);
        };
        let running = instance.tick(delta, &self.config, surface)?;
        trace!(
            id = %instance.handle().id,
            progress = instance.animation().progress(),
            running,
            "advanced chart animation"
        );
        Ok(running)
    }

    #[must_use]
    pub fn current_instance(&self) -> Option<ChartInstanceHandle> {
        self.instance.as_ref().map(ChartInstance::handle)
    }

    #[must_use]
    pub fn current_config(&self) -> Option<&ChartConfig> {
        self.instance.as_ref().map(ChartInstance::config)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.spec.is_some()
    }

    #[must_use]
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&R> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Total instances built over the presenter's lifetime.
    #[must_use]
    pub fn instances_created(&self) -> u64 {
        self.instances_created
    }

    /// Releases the live instance and forgets the bound spec and surface.
    fn teardown(&mut self) -> PresenterResult<()> {
        if let (Some(instance), Some(surface)) = (self.instance.take(), self.surface.as_mut()) {
            instance.destroy(surface)?;
        }
        self.spec = None;
        self.surface = None;
        Ok(())
    }
}

/// Paints `chart_config` under the next id; the counter only moves on success.
fn paint_instance<R: Renderer>(
    config: &PresenterConfig,
    instances_created: &mut u64,
    chart_config: ChartConfig,
    surface: &mut R,
) -> PresenterResult<ChartInstance> {
    let id = InstanceId::new(*instances_created + 1);
    let instance = ChartInstance::create(id, chart_config, config, surface)?;
    *instances_created = id.raw();
    Ok(instance)
}

fn build_config(
    spec: &ChartSpec,
    kind: ChartKind,
    config: &PresenterConfig,
) -> ChartResult<ChartConfig> {
    ChartConfig::build(
        spec,
        kind,
        &config.dataset,
        config.animation,
        config.title_font_size_px,
        config.value_axis,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ChartPresenter;
    use crate::api::PresenterConfig;
    use crate::core::{ChartKind, ChartSpec};
    use crate::error::{ChartError, ChartResult, PresenterError};
    use crate::render::{NullRenderer, RenderFrame, Renderer};

    /// Fails exactly the `fail_on`-th render.
    struct FlakyRenderer {
        renders: usize,
        fail_on: usize,
    }

    impl Renderer for FlakyRenderer {
        fn render(&mut self, _frame: &RenderFrame) -> ChartResult<()> {
            self.renders += 1;
            if self.renders == self.fail_on {
                return Err(ChartError::InvalidData("surface lost".to_owned()));
            }
            Ok(())
        }
    }

    fn spec() -> ChartSpec {
        ChartSpec::new(
            vec!["Mon".to_owned(), "Tue".to_owned(), "Wed".to_owned()],
            vec![2.0, 0.0, 5.0],
            "Alex's Weekly Eco Actions",
        )
    }

    fn presenter() -> ChartPresenter<NullRenderer> {
        ChartPresenter::new(PresenterConfig::default()).expect("presenter")
    }

    #[test]
    fn set_kind_before_initialize_fails() {
        let mut presenter = presenter();
        assert!(matches!(
            presenter.set_kind(ChartKind::Line),
            Err(PresenterError::NotInitialized)
        ));
        assert!(presenter.current_instance().is_none());
    }

    #[test]
    fn missing_surface_creates_nothing() {
        let mut presenter = presenter();
        assert!(matches!(
            presenter.initialize(spec(), None),
            Err(PresenterError::MissingSurface)
        ));
        assert!(!presenter.is_initialized());
        assert_eq!(presenter.instances_created(), 0);
    }

    #[test]
    fn kind_switch_releases_previous_instance() {
        let mut presenter = presenter();
        presenter
            .initialize(spec(), Some(NullRenderer::default()))
            .expect("initialize");
        let first = presenter.current_instance().expect("first instance");

        presenter.set_kind(ChartKind::Line).expect("switch");
        let second = presenter.current_instance().expect("second instance");

        assert_ne!(first.id, second.id);
        assert_eq!(second.kind, ChartKind::Line);
        let surface = presenter.surface().expect("surface");
        assert_eq!(surface.release_count, 1);
        assert_eq!(surface.render_count, 2);
    }

    #[test]
    fn animation_runs_until_duration_elapses() {
        let mut presenter = presenter();
        presenter
            .initialize(spec(), Some(NullRenderer::default()))
            .expect("initialize");

        assert!(
            presenter
                .advance_animation(Duration::from_millis(400))
                .expect("tick")
        );
        assert!(
            !presenter
                .advance_animation(Duration::from_millis(600))
                .expect("tick")
        );
        assert!(
            !presenter
                .advance_animation(Duration::from_millis(16))
                .expect("tick")
        );
        // initial frame + two animated frames; the idle tick does not redraw.
        assert_eq!(presenter.surface().expect("surface").render_count, 3);
    }

    #[test]
    fn unsupported_selector_value_keeps_current_chart() {
        let mut presenter = presenter();
        presenter
            .initialize(spec(), Some(NullRenderer::default()))
            .expect("initialize");
        let before = presenter.current_instance();

        assert!(matches!(
            presenter.select_kind("radar"),
            Err(PresenterError::UnsupportedKind(_))
        ));
        assert_eq!(presenter.current_instance(), before);
    }

    #[test]
    fn failed_switch_leaves_empty_slot_and_keeps_id_counter() {
        let mut presenter = ChartPresenter::new(PresenterConfig::default()).expect("presenter");
        presenter
            .initialize(
                spec(),
                Some(FlakyRenderer {
                    renders: 0,
                    fail_on: 2,
                }),
            )
            .expect("initialize");

        assert!(matches!(
            presenter.set_kind(ChartKind::Line),
            Err(PresenterError::Render(_))
        ));
        assert!(presenter.is_initialized());
        assert!(presenter.current_instance().is_none());
        assert_eq!(presenter.instances_created(), 1);

        presenter.set_kind(ChartKind::Line).expect("retry switch");
        let handle = presenter.current_instance().expect("repainted instance");
        assert_eq!(handle.id.raw(), 2);
        assert_eq!(handle.kind, ChartKind::Line);
    }
}
