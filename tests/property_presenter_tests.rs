use eco_chart::api::{ChartPresenter, PresenterConfig};
use eco_chart::core::{ChartKind, ChartSpec};
use eco_chart::render::NullRenderer;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ChartKind> {
    prop_oneof![Just(ChartKind::Bar), Just(ChartKind::Line)]
}

fn spec_from(values: Vec<f64>) -> ChartSpec {
    let labels = (0..values.len()).map(|i| format!("Day {i}")).collect();
    ChartSpec::new(labels, values, "User's Weekly Eco Actions")
}

proptest! {
    #[test]
    fn initialize_always_yields_live_instance(
        values in proptest::collection::vec(0.0f64..500.0, 0..40)
    ) {
        let mut presenter =
            ChartPresenter::new(PresenterConfig::default()).expect("presenter init");
        presenter
            .initialize(spec_from(values), Some(NullRenderer::default()))
            .expect("initialize");
        prop_assert!(presenter.current_instance().is_some());
    }

    #[test]
    fn any_finite_magnitude_renders_both_kinds(
        values in proptest::collection::vec(
            prop::num::f64::NORMAL | prop::num::f64::ZERO | prop::num::f64::SUBNORMAL,
            0..12
        )
    ) {
        let mut presenter =
            ChartPresenter::new(PresenterConfig::default()).expect("presenter init");
        presenter
            .initialize(spec_from(values), Some(NullRenderer::default()))
            .expect("initialize");
        prop_assert!(presenter.current_instance().is_some());
        presenter.set_kind(ChartKind::Line).expect("switch");
        prop_assert!(presenter.current_instance().is_some());
    }

    #[test]
    fn exactly_one_live_instance_after_every_switch(
        values in proptest::collection::vec(-50.0f64..50.0, 0..16),
        kinds in proptest::collection::vec(kind_strategy(), 1..24)
    ) {
        let spec = spec_from(values);
        let mut presenter =
            ChartPresenter::new(PresenterConfig::default()).expect("presenter init");
        presenter
            .initialize(spec.clone(), Some(NullRenderer::default()))
            .expect("initialize");

        for kind in kinds {
            presenter.set_kind(kind).expect("switch");

            let handle = presenter.current_instance().expect("live instance");
            prop_assert_eq!(handle.kind, kind);
            prop_assert_eq!(handle.id.raw(), presenter.instances_created());

            let surface = presenter.surface().expect("surface");
            let live = presenter.instances_created() - surface.release_count as u64;
            prop_assert_eq!(live, 1);

            prop_assert_eq!(presenter.spec(), Some(&spec));
        }
    }

    #[test]
    fn mismatched_lengths_never_create_instances(
        labels_len in 0usize..12,
        values_len in 0usize..12
    ) {
        prop_assume!(labels_len != values_len);
        let spec = ChartSpec::new(
            (0..labels_len).map(|i| i.to_string()).collect(),
            vec![1.0; values_len],
            "t",
        );
        let mut presenter =
            ChartPresenter::new(PresenterConfig::default()).expect("presenter init");
        prop_assert!(presenter.initialize(spec, Some(NullRenderer::default())).is_err());
        prop_assert!(presenter.current_instance().is_none());
    }
}
