use std::ops::Range;

use crate::groups::Trait;

pub const X_LABEL: &str = "Green Area Ratio";
pub const Y_LABEL: &str = "Residuals";
/// Grid column that carries the row title.
pub const TITLE_COLUMN: usize = 2;
/// Column that carries the y-axis label.
pub const Y_LABEL_COLUMN: usize = 0;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Fixed figure geometry. Sizes in points convert to pixels via `dpi / 72`.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub base_font_pt: f64,
    pub title_font_pt: f64,
    pub annotation_font_pt: f64,
    pub marker_area_pt2: f64,
    pub line_width_pt: f64,
    /// `[left, bottom, right, top]` in figure fractions.
    pub layout_rect: [f64; 4],
}

impl FigureSpec {
    pub fn publication() -> Self {
        FigureSpec {
            width_in: 25.0,
            height_in: 20.0,
            dpi: 400,
            base_font_pt: 16.0,
            title_font_pt: 20.0,
            annotation_font_pt: 14.0,
            marker_area_pt2: 60.0,
            line_width_pt: 3.0,
            layout_rect: [0.0, 0.01, 1.0, 0.99],
        }
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi as f64 / 72.0
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        let w = (self.width_in * self.dpi as f64).round() as u32;
        let h = (self.height_in * self.dpi as f64).round() as u32;
        (w, h)
    }

    /// Marker radius in pixels for a marker of `marker_area_pt2` square points.
    pub fn marker_radius_px(&self) -> f64 {
        self.pt_to_px(self.marker_area_pt2.sqrt() / 2.0)
    }

    /// Pixel band `(top, bottom)` reserved for panels inside `layout_rect`.
    pub fn content_rows_px(&self) -> (u32, u32) {
        let (_, h) = self.pixel_size();
        let hf = h as f64;
        let top = (hf * (1.0 - self.layout_rect[3])).round() as u32;
        let bottom = (hf * (1.0 - self.layout_rect[1])).round() as u32;
        (top, bottom)
    }

    pub fn content_cols_px(&self) -> (u32, u32) {
        let (w, _) = self.pixel_size();
        let wf = w as f64;
        let left = (wf * self.layout_rect[0]).round() as u32;
        let right = (wf * self.layout_rect[2]).round() as u32;
        (left, right)
    }

    /// Height of the title strip above every panel, so plot areas line up
    /// whether or not the panel carries a title.
    pub fn title_strip_px(&self) -> u32 {
        (self.pt_to_px(self.title_font_pt) * 1.6).ceil() as u32
    }

    pub fn x_label_area_px(&self) -> u32 {
        (self.pt_to_px(self.base_font_pt) * 3.2).ceil() as u32
    }

    pub fn y_label_area_px(&self) -> u32 {
        (self.pt_to_px(self.base_font_pt) * 4.8).ceil() as u32
    }

    pub fn panel_margin_px(&self) -> u32 {
        (self.pt_to_px(self.base_font_pt) * 0.6).ceil() as u32
    }
}

impl Default for FigureSpec {
    fn default() -> Self {
        FigureSpec::publication()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDecor {
    pub title: Option<&'static str>,
    pub x_label: &'static str,
    pub y_label: Option<&'static str>,
    pub annotation: String,
}

pub fn panel_decor(row_trait: Trait, col: usize, group_name: &str) -> PanelDecor {
    PanelDecor {
        title: (col == TITLE_COLUMN).then(|| row_trait.name()),
        x_label: X_LABEL,
        y_label: (col == Y_LABEL_COLUMN).then_some(Y_LABEL),
        annotation: group_name.to_string(),
    }
}

/// Data limits of the finite values, padded by 5 % of the span on each side.
/// A single distinct value is widened to ±0.5; no values yields `0..1`.
pub fn axis_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5)..(hi + 0.5);
    }
    let pad = span * AXIS_MARGIN;
    (lo - pad)..(hi + pad)
}

/// Corners of a rounded rectangle as a closed polygon, clockwise from the
/// top-left arc. `radius` is clamped to half the shorter side.
pub fn rounded_rect(
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    radius: i32,
) -> Vec<(i32, i32)> {
    let w = (right - left).max(0);
    let h = (bottom - top).max(0);
    let r = radius.clamp(0, w.min(h) / 2);
    if r == 0 {
        return vec![(left, top), (right, top), (right, bottom), (left, bottom)];
    }
    const STEPS: usize = 6;
    let corners = [
        (left + r, top + r, std::f64::consts::PI),
        (right - r, top + r, 1.5 * std::f64::consts::PI),
        (right - r, bottom - r, 0.0),
        (left + r, bottom - r, 0.5 * std::f64::consts::PI),
    ];
    let mut out = Vec::with_capacity(corners.len() * (STEPS + 1));
    for (cx, cy, start) in corners {
        for i in 0..=STEPS {
            let a = start + std::f64::consts::FRAC_PI_2 * i as f64 / STEPS as f64;
            let x = cx as f64 + r as f64 * a.cos();
            let y = cy as f64 + r as f64 * a.sin();
            out.push((x.round() as i32, y.round() as i32));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/layout.rs"]
mod tests;
