use crate::renderer::{Renderer, RendererRegistry};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use tileboard_core::{ActiveWidget, Board, Catalog, CatalogEntry};

/// A board-issued widget of `kind`, titled "Test".
pub fn sample_widget(kind: &'static str) -> ActiveWidget {
    let board = Board::with_seed(Catalog::default(), [CatalogEntry::new(kind, "Test")]);
    board.widgets()[0].clone()
}

pub fn render_widget(registry: &RendererRegistry, widget: &ActiveWidget, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| registry.render(widget, frame, frame.area()))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn render_widget_with(
    renderer: &impl Renderer,
    widget: &ActiveWidget,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| renderer.render(widget, frame, frame.area()))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
