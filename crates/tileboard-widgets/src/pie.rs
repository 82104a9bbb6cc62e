//! Braille pie chart over a fixed dataset, with a value legend.

use crate::chrome::{legend_lines, LegendItem};
use crate::datasets::{palette_color, PieData};
use crate::placeholder::centered_message;
use crate::renderer::Renderer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::f64::consts::{FRAC_PI_2, TAU};
use tileboard_core::ActiveWidget;

/// Pie chart renderer for a category -> count dataset.
#[derive(Debug, Clone)]
pub struct PieChart {
    data: PieData,
}

impl PieChart {
    pub fn new(data: PieData) -> Self {
        Self { data }
    }

    fn legend(&self) -> Vec<LegendItem> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, d)| LegendItem::new(d.label, d.value, palette_color(i)))
            .collect()
    }
}

/// Cumulative upper bounds of each slice as fractions of the whole.
///
/// Returns an empty vector when the total is zero.
pub fn slice_bounds(values: impl IntoIterator<Item = u64>) -> Vec<f64> {
    let values: Vec<u64> = values.into_iter().collect();
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut running = 0u64;
    values
        .iter()
        .map(|v| {
            running += v;
            running as f64 / total as f64
        })
        .collect()
}

/// Index of the slice containing `fraction` (0.0 at twelve o'clock, growing
/// clockwise).
pub fn slice_at(bounds: &[f64], fraction: f64) -> Option<usize> {
    if bounds.is_empty() {
        return None;
    }
    let idx = bounds.partition_point(|&b| b <= fraction);
    Some(idx.min(bounds.len() - 1))
}

/// Fraction of a full turn for the point `(x, y)`, clockwise from the top.
fn turn_fraction(x: f64, y: f64) -> f64 {
    (FRAC_PI_2 - y.atan2(x)).rem_euclid(TAU) / TAU
}

/// Canvas points in the unit disc, grouped by slice index.
///
/// `cols` x `rows` is the dot resolution of the drawing surface.
pub fn slice_points(bounds: &[f64], cols: u16, rows: u16) -> Vec<Vec<(f64, f64)>> {
    let mut groups = vec![Vec::new(); bounds.len()];
    if bounds.is_empty() || cols == 0 || rows == 0 {
        return groups;
    }
    let dx = 2.0 / f64::from(cols);
    let dy = 2.0 / f64::from(rows);
    for row in 0..rows {
        let y = 1.0 - dy * (f64::from(row) + 0.5);
        for col in 0..cols {
            let x = -1.0 + dx * (f64::from(col) + 0.5);
            if x * x + y * y > 1.0 {
                continue;
            }
            if let Some(idx) = slice_at(bounds, turn_fraction(x, y)) {
                groups[idx].push((x, y));
            }
        }
    }
    groups
}

/// Slices narrower than this share of the whole get no value label.
const MIN_LABEL_SHARE: f64 = 0.03;

/// Canvas position for the value label of each slice wide enough to hold one:
/// the middle of the slice's arc, a little over halfway out from the center.
pub fn slice_labels(bounds: &[f64]) -> Vec<(usize, (f64, f64))> {
    let mut start = 0.0;
    let mut labels = Vec::with_capacity(bounds.len());
    for (i, &end) in bounds.iter().enumerate() {
        if end - start >= MIN_LABEL_SHARE {
            let angle = (start + end) / 2.0 * TAU;
            labels.push((i, (0.6 * angle.sin(), 0.6 * angle.cos())));
        }
        start = end;
    }
    labels
}

/// Widest rect centered in `area` whose cells form a roughly circular canvas
/// (terminal cells are about twice as tall as they are wide).
fn square_rect(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = area.height.min(width.div_ceil(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

impl Renderer for PieChart {
    fn render(&self, _widget: &ActiveWidget, frame: &mut Frame, area: Rect) {
        let bounds = slice_bounds(self.data.iter().map(|d| d.value));
        if bounds.is_empty() {
            centered_message(frame, area, "No Graph data available!", Style::default().fg(Color::DarkGray));
            return;
        }

        let legend = legend_lines(&self.legend(), area.width);
        let legend_height = (legend.len() as u16).min(area.height.saturating_sub(1));
        let [chart_area, legend_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(legend_height)]).areas(area);

        let chart_area = square_rect(chart_area);
        // Braille packs 2x4 dots into each cell.
        let groups = slice_points(&bounds, chart_area.width * 2, chart_area.height * 4);
        let labels = slice_labels(&bounds);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for (i, coords) in groups.iter().enumerate() {
                    ctx.draw(&Points {
                        coords: coords.as_slice(),
                        color: palette_color(i),
                    });
                }
                ctx.layer();
                for (i, (x, y)) in labels.iter().copied() {
                    let value = self.data[i].value.to_string();
                    // Shift left by half the text so the label centers on its anchor.
                    let half = value.len() as f64 / f64::from(chart_area.width.max(1));
                    ctx.print(x - half, y, Line::styled(value, Style::default().fg(Color::White)));
                }
            });
        frame.render_widget(canvas, chart_area);
        frame.render_widget(Paragraph::new(legend).centered(), legend_area);
    }
}
