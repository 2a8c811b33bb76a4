use std::time::{Duration, Instant};

use eco_chart::api::PresenterConfig;
use eco_chart::core::{ChartKind, PageData};
use eco_chart::page::{
    FooterCheck, FooterElement, PageConfig, PageController, ScrollMetrics, StaticPage,
};
use eco_chart::render::{ImageRenderer, NullRenderer};

fn page_data() -> PageData {
    PageData::new(
        vec!["Mon".to_owned(), "Tue".to_owned(), "Wed".to_owned()],
        vec![2.0, 0.0, 5.0],
    )
    .with_username("Alex")
}

fn full_page() -> StaticPage<NullRenderer> {
    StaticPage::new()
        .with_surface("ecoChart", NullRenderer::default())
        .with_element("chartTypeSelector")
        .with_element(".export-btn")
        .with_footer("page-footer")
}

fn controller(page: StaticPage<NullRenderer>) -> PageController<StaticPage<NullRenderer>> {
    PageController::new(PageConfig::default(), PresenterConfig::default(), page)
        .expect("controller init")
}

#[test]
fn load_renders_bar_chart_and_selector_switches_kind() {
    let mut controller = controller(full_page());
    assert!(controller.on_load(&page_data()));
    assert_eq!(
        controller.presenter().current_instance().map(|h| h.kind),
        Some(ChartKind::Bar)
    );

    assert!(controller.on_kind_selected("line"));
    assert_eq!(
        controller.presenter().current_instance().map(|h| h.kind),
        Some(ChartKind::Line)
    );
}

#[test]
fn missing_surface_is_silent() {
    let page = StaticPage::new().with_element("chartTypeSelector");
    let mut controller = controller(page);

    assert!(!controller.on_load(&page_data()));
    assert!(controller.presenter().current_instance().is_none());
    assert!(!controller.on_kind_selected("line"));
}

#[test]
fn missing_data_leaves_surface_untouched() {
    let mut controller = controller(full_page());
    assert!(!controller.on_load(&PageData::default()));
    assert!(!controller.presenter().is_initialized());
}

#[test]
fn selection_without_selector_element_is_ignored() {
    let page = StaticPage::new().with_surface("ecoChart", NullRenderer::default());
    let mut controller = controller(page);
    assert!(controller.on_load(&page_data()));

    assert!(!controller.on_kind_selected("line"));
    assert_eq!(
        controller.presenter().current_instance().map(|h| h.kind),
        Some(ChartKind::Bar)
    );
}

#[test]
fn export_click_produces_named_png() {
    let page = StaticPage::new()
        .with_surface("ecoChart", ImageRenderer::new(800, 400).expect("raster"))
        .with_element(".export-btn");
    let mut controller =
        PageController::new(PageConfig::default(), PresenterConfig::default(), page)
            .expect("controller init");
    assert!(controller.on_load(&page_data()));

    let export = controller.on_export_clicked().expect("export");
    assert_eq!(export.filename(), "eco-chart.png");
    assert!(export.data_uri().starts_with("data:image/png;base64,"));

    let decoded = image::load_from_memory(export.bytes()).expect("decodable png");
    assert_eq!(decoded.width(), 800);
    assert_eq!(decoded.height(), 400);
}

#[test]
fn export_without_button_does_nothing() {
    let page = StaticPage::new()
        .with_surface("ecoChart", ImageRenderer::new(100, 100).expect("raster"));
    let mut controller = PageController::new(
        PageConfig::default(),
        PresenterConfig::default().with_viewport(eco_chart::core::Viewport::new(100, 100)),
        page,
    )
    .expect("controller init");
    assert!(controller.on_load(&page_data()));
    assert!(controller.on_export_clicked().is_none());
}

#[test]
fn footer_reveals_once_after_throttle_near_bottom() {
    let mut controller = controller(full_page());
    controller
        .elements_mut()
        .set_scroll(ScrollMetrics::new(1_200.0, 800.0, 2_000.0));

    let start = Instant::now();
    assert!(controller.on_scroll(start));
    assert!(!controller.on_scroll(start + Duration::from_millis(20)));

    let early = controller.on_tick(start + Duration::from_millis(50), Duration::from_millis(50));
    assert_eq!(early.footer, FooterCheck::Idle);

    let due = controller.on_tick(start + Duration::from_millis(100), Duration::from_millis(50));
    assert_eq!(due.footer, FooterCheck::Revealed);
    let footer = controller
        .elements()
        .footer("page-footer")
        .expect("footer element");
    assert!(footer.has_class("footer-animate"));
    assert!(controller.footer().is_animated());
    assert!(!controller.on_scroll(start + Duration::from_millis(500)));
}

#[test]
fn ticks_drive_chart_animation_to_completion() {
    let mut controller = controller(full_page());
    assert!(controller.on_load(&page_data()));

    let start = Instant::now();
    let first = controller.on_tick(start, Duration::from_millis(500));
    assert!(first.animating);
    let second = controller.on_tick(start, Duration::from_millis(500));
    assert!(!second.animating);

    assert!(controller.on_kind_selected("line"));
    let restarted = controller.on_tick(start, Duration::from_millis(16));
    assert!(restarted.animating);
}

#[test]
fn ticks_before_load_are_harmless() {
    let mut controller = controller(full_page());
    let outcome = controller.on_tick(Instant::now(), Duration::from_millis(16));
    assert!(!outcome.animating);
    assert_eq!(outcome.footer, FooterCheck::Idle);
}
