//! Renderers for cards that have nothing to chart.

use crate::renderer::Renderer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use tileboard_core::ActiveWidget;

/// Draw `text` centered horizontally and vertically in `area`.
pub fn centered_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let paragraph = Paragraph::new(text.to_owned())
        .style(style)
        .centered()
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, row);
}

const ADD_WIDGET_HINT: &str = "+ Add Widget";

/// Placeholder for kinds that exist but have no dataset behind them.
#[derive(Debug, Clone)]
pub struct NoData {
    message: String,
    style: Style,
    add_hint: bool,
}

impl NoData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: Style::default().fg(Color::DarkGray),
            add_hint: false,
        }
    }

    /// Offer "+ Add Widget" in the card title, pointing at the picker.
    pub fn with_add_hint(mut self) -> Self {
        self.add_hint = true;
        self
    }
}

impl Default for NoData {
    fn default() -> Self {
        Self::new("No Graph data available!")
    }
}

impl Renderer for NoData {
    fn render(&self, _widget: &ActiveWidget, frame: &mut Frame, area: Rect) {
        centered_message(frame, area, &self.message, self.style);
    }

    fn card_action(&self) -> Option<&str> {
        self.add_hint.then_some(ADD_WIDGET_HINT)
    }
}

/// Fallback for kinds with no registered renderer.
#[derive(Debug, Clone)]
pub struct UnknownWidget {
    style: Style,
}

impl Default for UnknownWidget {
    fn default() -> Self {
        Self {
            style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

impl Renderer for UnknownWidget {
    fn render(&self, widget: &ActiveWidget, frame: &mut Frame, area: Rect) {
        let text = format!("Unknown widget kind: {}", widget.kind);
        centered_message(frame, area, &text, self.style);
    }
}
