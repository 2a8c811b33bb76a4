use tracing::trace;

use crate::core::{
    CategoryAxis, ChartKind, PlotArea, ValueAxis, project_category_bars, project_category_line,
};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartConfig, PresenterConfig};

const GRID_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);
const AXIS_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.25);
const TEXT_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
const TITLE_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const TICK_LABEL_GAP_PX: f64 = 6.0;

/// Materializes one draw pass for `config` at eased animation `progress`.
///
/// Axes, grid and title are static; only series geometry depends on
/// `progress`.
pub fn build_chart_frame(
    config: &ChartConfig,
    presenter: &PresenterConfig,
    progress: f64,
) -> ChartResult<RenderFrame> {
    let viewport = presenter.viewport;
    let area = PlotArea::for_viewport(viewport, presenter.margins)?;
    let value_axis = ValueAxis::from_values(
        &config.values,
        config.value_axis.begin_at_zero,
        config.value_axis.step_size,
        config.value_axis.max_ticks,
    )?;
    let categories = CategoryAxis::new(config.values.len(), config.kind == ChartKind::Bar);

    let mut frame = RenderFrame::new(viewport);
    append_value_axis(&mut frame, &value_axis, area, presenter.axis_font_size_px)?;
    append_category_axis(
        &mut frame,
        &config.labels,
        categories,
        area,
        presenter.axis_font_size_px,
    )?;

    match config.kind {
        ChartKind::Bar => {
            let bars = project_category_bars(
                &config.values,
                categories,
                &value_axis,
                area,
                presenter.bar_width_ratio,
                progress,
            )?;
            for bar in bars {
                let fill_color = if config.dataset.fill {
                    config.dataset.background_color
                } else {
                    Color::rgba(0.0, 0.0, 0.0, 0.0)
                };
                frame.rects.push(
                    RectPrimitive::new(bar.x_left, bar.y_top, bar.width(), bar.height(), fill_color)
                        .with_border(config.dataset.border_width, config.dataset.border_color),
                );
            }
        }
        ChartKind::Line => {
            let segments =
                project_category_line(&config.values, categories, &value_axis, area, progress)?;
            let stroke_width = if config.dataset.border_width > 0.0 {
                config.dataset.border_width
            } else {
                1.0
            };
            for segment in segments {
                frame.lines.push(LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    stroke_width,
                    config.dataset.border_color,
                ));
            }
        }
    }

    let title = &config.plugins.title;
    if title.display && !title.text.is_empty() {
        frame.texts.push(TextPrimitive::new(
            title.text.clone(),
            f64::from(viewport.width) * 0.5,
            (presenter.margins.top - title.font_size_px).max(0.0) * 0.5,
            title.font_size_px,
            TITLE_COLOR,
            TextHAlign::Center,
        ));
    }

    trace!(
        kind = %config.kind,
        progress,
        rects = frame.rects.len(),
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        "built chart frame"
    );
    Ok(frame)
}

fn append_value_axis(
    frame: &mut RenderFrame,
    axis: &ValueAxis,
    area: PlotArea,
    font_size_px: f64,
) -> ChartResult<()> {
    for tick in axis.ticks() {
        let y = axis.value_to_pixel(*tick, area)?;
        frame
            .lines
            .push(LinePrimitive::new(area.left, y, area.right, y, 1.0, GRID_COLOR));
        frame.texts.push(TextPrimitive::new(
            format!("{tick}"),
            area.left - TICK_LABEL_GAP_PX,
            y - font_size_px * 0.5,
            font_size_px,
            TEXT_COLOR,
            TextHAlign::Right,
        ));
    }
    frame.lines.push(LinePrimitive::new(
        area.left,
        area.top,
        area.left,
        area.bottom,
        1.0,
        AXIS_COLOR,
    ));
    Ok(())
}

fn append_category_axis(
    frame: &mut RenderFrame,
    labels: &[String],
    categories: CategoryAxis,
    area: PlotArea,
    font_size_px: f64,
) -> ChartResult<()> {
    frame.lines.push(LinePrimitive::new(
        area.left,
        area.bottom,
        area.right,
        area.bottom,
        1.0,
        AXIS_COLOR,
    ));
    for (index, label) in labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            label.clone(),
            categories.position(index, area)?,
            area.bottom + TICK_LABEL_GAP_PX,
            font_size_px,
            TEXT_COLOR,
            TextHAlign::Center,
        ));
    }
    Ok(())
}
