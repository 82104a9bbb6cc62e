//! Headline figure over a static fill bar, with a severity legend.

use crate::chrome::{legend_lines, LegendItem};
use crate::datasets::StatData;
use crate::renderer::Renderer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;
use tileboard_core::ActiveWidget;

/// Visual style configuration for the [`StatBar`] renderer.
#[derive(Debug, Clone)]
pub struct StatBarStyle {
    /// Style applied to the filled portion of the bar.
    pub filled: Style,
    /// Style applied to the unfilled portion of the bar.
    pub unfilled: Style,
    /// Style of the headline figure.
    pub headline: Style,
    /// Bullet colors for the legend, in order.
    pub legend_colors: Vec<Color>,
}

impl Default for StatBarStyle {
    fn default() -> Self {
        Self {
            filled: Style::default().fg(Color::Rgb(0xEF, 0x44, 0x44)).bg(Color::DarkGray),
            unfilled: Style::default().fg(Color::DarkGray),
            headline: Style::default().add_modifier(Modifier::BOLD),
            legend_colors: vec![Color::Rgb(0xDC, 0x26, 0x26), Color::Rgb(0xF9, 0x73, 0x16)],
        }
    }
}

/// Renders a [`StatData`]: `<total> <noun>`, a gauge, and the legend row.
#[derive(Debug, Clone)]
pub struct StatBar {
    data: StatData,
    style: StatBarStyle,
    show_percentage: bool,
}

impl StatBar {
    pub fn new(data: StatData) -> Self {
        Self {
            data,
            style: StatBarStyle::default(),
            show_percentage: true,
        }
    }

    pub fn with_style(mut self, style: StatBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a custom foreground color for the filled portion of the bar.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.style.filled = self.style.filled.fg(color);
        self
    }

    /// Toggle the percentage label inside the bar. Default is `true`.
    pub fn with_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    fn headline(&self) -> String {
        format!("{} {}", self.data.total, self.data.noun)
    }

    fn legend(&self) -> Vec<LegendItem> {
        self.data
            .legend
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let color = self
                    .style
                    .legend_colors
                    .get(i)
                    .copied()
                    .unwrap_or(Color::Gray);
                LegendItem::new(d.label, d.value, color)
            })
            .collect()
    }
}

impl Renderer for StatBar {
    fn render(&self, _widget: &ActiveWidget, frame: &mut Frame, area: Rect) {
        let legend = legend_lines(&self.legend(), area.width);
        let [headline_area, bar_area, legend_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(legend.len() as u16),
        ])
        .spacing(1)
        .areas(area);

        frame.render_widget(
            Paragraph::new(self.headline()).style(self.style.headline),
            headline_area,
        );

        let ratio = self.data.ratio.clamp(0.0, 1.0);
        let label = if self.show_percentage {
            format!("{:.0}%", ratio * 100.0)
        } else {
            String::new()
        };
        let gauge = Gauge::default()
            .gauge_style(self.style.filled)
            .style(self.style.unfilled)
            .ratio(ratio)
            .label(label);
        frame.render_widget(gauge, bar_area);

        frame.render_widget(Paragraph::new(legend), legend_area);
    }
}
