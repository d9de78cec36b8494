use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use plotters_backend::DrawingErrorKind;

use crate::groups::{GroupSeries, Trait};
use crate::model::panel::PanelFit;
use crate::model::regression::{fitted_line, segment_extent};
use crate::report::layout::{FigureSpec, axis_range, panel_decor, rounded_rect};

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const SCATTER_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const FIT_COLOR: RGBColor = RGBColor(0xff, 0x00, 0x00);

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid figure: {0}")]
    InvalidFigure(String),
    #[error("font unavailable: {0}")]
    Font(String),
    #[error("drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        match err {
            DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(e)) => {
                RenderError::Font(e.to_string())
            }
            other => RenderError::Drawing(other.to_string()),
        }
    }
}

fn font(px: f64) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, px, FontStyle::Normal).color(&BLACK)
}

/// Renders every panel into one `rows x groups` figure and writes it as PNG.
pub fn render_figure(
    path: &Path,
    spec: &FigureSpec,
    groups: &[GroupSeries],
    panels: &[PanelFit],
) -> Result<(), RenderError> {
    if spec.dpi == 0 {
        return Err(RenderError::InvalidFigure("dpi must be positive".to_string()));
    }
    if groups.is_empty() {
        return Err(RenderError::InvalidFigure(
            "no plotting groups to render".to_string(),
        ));
    }
    let n_rows = Trait::ALL.len();
    let n_cols = groups.len();

    let (w, h) = spec.pixel_size();
    let root = BitMapBackend::new(path, (w, h)).into_drawing_area();
    root.fill(&WHITE)?;

    let (top, bottom) = spec.content_rows_px();
    let (left, right) = spec.content_cols_px();
    let content = root.margin(top, h.saturating_sub(bottom), left, w.saturating_sub(right));
    let cells = content.split_evenly((n_rows, n_cols));

    for panel in panels {
        if panel.row >= n_rows || panel.col >= n_cols {
            return Err(RenderError::InvalidFigure(format!(
                "panel ({}, {}) outside {}x{} grid",
                panel.row, panel.col, n_rows, n_cols
            )));
        }
        let cell = &cells[panel.row * n_cols + panel.col];
        draw_panel(&root, cell, spec, &groups[panel.col], panel)?;
    }

    root.present()?;
    tracing::info!(path = %path.display(), width = w, height = h, dpi = spec.dpi, "wrote figure");
    Ok(())
}

pub(crate) fn draw_panel(
    root: &Area<'_>,
    cell: &Area<'_>,
    spec: &FigureSpec,
    group: &GroupSeries,
    panel: &PanelFit,
) -> Result<(), RenderError> {
    let decor = panel_decor(panel.variable, panel.col, &group.name);
    let x = group.green_area_ratio.as_slice();
    let y = group.trait_series(panel.variable);

    // NaN coordinates have no marker.
    let points: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect();
    let line = match &panel.fit {
        Some(fit) => fitted_line(fit, x),
        None => Vec::new(),
    };

    let x_range = axis_range(
        points
            .iter()
            .map(|p| p.0)
            .chain(line.iter().flatten().map(|p| p.0)),
    );
    let y_range = axis_range(
        points
            .iter()
            .map(|p| p.1)
            .chain(line.iter().flatten().map(|p| p.1)),
    );

    let (title_area, plot_area) = cell.split_vertically(spec.title_strip_px());
    if let Some(title) = decor.title {
        let (tw, th) = title_area.dim_in_pixel();
        let style = font(spec.pt_to_px(spec.title_font_pt)).pos(Pos::new(HPos::Center, VPos::Center));
        title_area.draw(&Text::new(title, ((tw / 2) as i32, (th / 2) as i32), style))?;
    }

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(spec.panel_margin_px())
        .x_label_area_size(spec.x_label_area_px())
        .y_label_area_size(spec.y_label_area_px())
        .build_cartesian_2d(x_range, y_range)?;

    let label_style = font(spec.pt_to_px(spec.base_font_pt));
    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .x_labels(6)
        .y_labels(6)
        .x_desc(decor.x_label)
        .label_style(label_style.clone())
        .axis_desc_style(label_style);
    if let Some(y_label) = decor.y_label {
        mesh.y_desc(y_label);
    }
    mesh.draw()?;

    let radius = spec.marker_radius_px().round().max(1.0) as u32;
    chart.draw_series(
        points
            .iter()
            .map(|&p| Circle::new(p, radius, SCATTER_COLOR.filled())),
    )?;

    let stroke = spec.pt_to_px(spec.line_width_pt).round().max(1.0) as u32;
    // Vertices follow series order, not x order; stroke each segment
    // between its x extremes.
    for segment in &line {
        if let Some(ends) = segment_extent(segment) {
            chart.draw_series(LineSeries::new(ends, FIT_COLOR.stroke_width(stroke)))?;
        }
    }

    let (px, py) = chart.plotting_area().get_pixel_range();
    draw_annotation(root, spec, &decor.annotation, px, py)
}

/// Group label anchored at 5 % / 95 % of the plot area, top-left aligned,
/// on a white rounded box.
fn draw_annotation(
    root: &Area<'_>,
    spec: &FigureSpec,
    text: &str,
    px: Range<i32>,
    py: Range<i32>,
) -> Result<(), RenderError> {
    let font_px = spec.pt_to_px(spec.annotation_font_pt);
    let style = font(font_px).pos(Pos::new(HPos::Left, VPos::Top));
    let (tw, th) = root.estimate_text_size(text, &style)?;

    let pad = (0.3 * font_px).round() as i32;
    let ax = px.start + ((px.end - px.start) as f64 * 0.05).round() as i32;
    let ay = py.start + ((py.end - py.start) as f64 * 0.05).round() as i32;

    let outline = rounded_rect(
        ax - pad,
        ay - pad,
        ax + tw as i32 + pad,
        ay + th as i32 + pad,
        pad,
    );
    let mut border = outline.clone();
    if let Some(&first) = outline.first() {
        border.push(first);
    }
    let edge = spec.pt_to_px(1.0).round().max(1.0) as u32;

    root.draw(&Polygon::new(outline, WHITE.filled()))?;
    root.draw(&PathElement::new(border, BLACK.stroke_width(edge)))?;
    root.draw(&Text::new(text, (ax, ay), style))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/figure.rs"]
mod tests;
