//! Card borders and chart legends shared by the renderers.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders};
use tileboard_core::ActiveWidget;
use unicode_width::UnicodeWidthStr;

const LEGEND_BULLET: &str = "● ";
const LEGEND_GAP: &str = "   ";

/// Bordered block for a widget card.
///
/// The title is the widget title on the left and its id on the right,
/// preceded by `action` when the card's renderer offers one. The focused card
/// gets a thick cyan border; the rest are dark gray.
pub fn card_block(widget: &ActiveWidget, focused: bool, action: Option<&str>) -> Block<'static> {
    let (color, border_type) = if focused {
        (Color::Cyan, BorderType::Thick)
    } else {
        (Color::DarkGray, BorderType::Rounded)
    };
    let mut right = Vec::with_capacity(2);
    if let Some(action) = action {
        right.push(Span::styled(format!(" {action} "), Style::default().fg(Color::Blue)));
    }
    right.push(Span::styled(format!(" {} ", widget.id), Style::default().fg(Color::DarkGray)));
    Block::new()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color))
        .title(Line::from(format!(" {} ", widget.title)).style(Style::default().add_modifier(Modifier::BOLD)))
        .title(Line::from(right).right_aligned())
}

/// One legend entry: `● label (value)` with a colored bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendItem {
    pub label: String,
    pub value: u64,
    pub color: Color,
}

impl LegendItem {
    pub fn new(label: impl Into<String>, value: u64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }

    fn text(&self) -> String {
        format!("{} ({})", self.label, self.value)
    }

    fn width(&self) -> usize {
        LEGEND_BULLET.width() + self.text().width()
    }

    fn spans(&self) -> [Span<'static>; 2] {
        [
            Span::styled(LEGEND_BULLET, Style::default().fg(self.color)),
            Span::raw(self.text()),
        ]
    }
}

/// Pack legend items into as few lines as fit in `width` columns.
///
/// An item wider than `width` still gets a line of its own; the caller's
/// area clips it.
pub fn legend_lines(items: &[LegendItem], width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for item in items {
        let needed = if spans.is_empty() {
            item.width()
        } else {
            LEGEND_GAP.width() + item.width()
        };
        if !spans.is_empty() && used + needed > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(LEGEND_GAP));
            used += LEGEND_GAP.width();
        }
        spans.extend(item.spans());
        used += item.width();
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_widget;

    fn items() -> Vec<LegendItem> {
        vec![
            LegendItem::new("Failure", 5839, Color::Red),
            LegendItem::new("Warning", 584, Color::Yellow),
            LegendItem::new("Passed", 7334, Color::Green),
        ]
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn legend_fits_on_one_line_when_wide() {
        let lines = legend_lines(&items(), 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            plain(&lines[0]),
            "● Failure (5839)   ● Warning (584)   ● Passed (7334)"
        );
    }

    #[test]
    fn legend_wraps_when_narrow() {
        let lines = legend_lines(&items(), 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(plain(&lines[1]), "● Warning (584)");
    }

    #[test]
    fn legend_of_nothing_is_empty() {
        assert!(legend_lines(&[], 40).is_empty());
    }

    #[test]
    fn bullet_carries_item_color() {
        let lines = legend_lines(&items()[..1], 40);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn focused_card_uses_cyan_border() {
        let widget = sample_widget("clientAccounts");
        let focused = card_block(&widget, true, None);
        let plain_block = card_block(&widget, false, None);
        assert_ne!(focused, plain_block);
    }

    #[test]
    fn action_hint_precedes_the_id() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let widget = sample_widget("securityScore");
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(card_block(&widget, false, Some("+ Add Widget")), frame.area()))
            .unwrap();
        let top = crate::test_util::buffer_text(terminal.backend().buffer());
        let top = top.lines().next().unwrap_or_default().to_string();
        let hint = top.find("+ Add Widget").expect("hint drawn");
        let id = top.find("#1").expect("id drawn");
        assert!(hint < id);
        assert!(top.contains("Test"));
    }
}
