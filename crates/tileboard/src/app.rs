//! The dashboard model: a header, a grid of widget cards, and a footer, with
//! the "Add Widgets" picker and a help overlay drawn on top when open.

use crate::config::{ConfigError, DashboardConfig};
use crate::keymap::BoardKeys;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tileboard_core::{Board, WidgetId};
use tileboard_runtime::{Command, Model, TerminalEvent};
use tileboard_widgets::chrome::card_block;
use tileboard_widgets::key::{help_line, help_lines, HelpStyle, KeyMap};
use tileboard_widgets::overlay::{centered_fixed, render_overlay};
use tileboard_widgets::placeholder::centered_message;
use tileboard_widgets::{Picker, PickerAction, RendererRegistry};
use unicode_width::UnicodeWidthStr;

const EMPTY_BOARD: &str = "No widgets on the board. Press a to add some.";

/// Startup data for [`Dashboard`].
pub struct DashboardFlags {
    pub board: Board,
    pub registry: RendererRegistry,
    pub title: String,
    pub range_label: String,
    pub columns: u16,
}

impl Default for DashboardFlags {
    fn default() -> Self {
        let config = DashboardConfig::default();
        Self {
            board: Board::initialize(),
            registry: RendererRegistry::with_defaults(),
            title: config.title,
            range_label: config.range_label,
            columns: config.columns,
        }
    }
}

impl DashboardFlags {
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ConfigError> {
        if config.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(Self {
            board: Board::with_seed(config.catalog()?, config.seed()),
            registry: RendererRegistry::with_defaults(),
            title: config.title.clone(),
            range_label: config.range_label.clone(),
            columns: config.columns,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
    OpenPicker,
    /// A key pressed while the picker is open.
    PickerKey(KeyEvent),
    DeleteFocused,
    Delete(WidgetId),
    ToggleHelp,
    Quit,
}

pub struct Dashboard {
    board: Board,
    registry: RendererRegistry,
    picker: Picker,
    keys: BoardKeys,
    help_style: HelpStyle,
    title: String,
    range_label: String,
    columns: usize,
    focus: usize,
    show_help: bool,
}

impl Dashboard {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the focused card.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_id(&self) -> Option<WidgetId> {
        self.board.widgets().get(self.focus).map(|w| w.id)
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    fn clamp_focus(&mut self) {
        self.focus = self.focus.min(self.board.len().saturating_sub(1));
    }

    fn move_focus(&mut self, msg: &Msg) {
        let len = self.board.len();
        if len == 0 {
            return;
        }
        let cols = self.columns;
        let f = self.focus;
        self.focus = match msg {
            Msg::FocusLeft if f % cols > 0 => f - 1,
            Msg::FocusRight if f + 1 < len && (f + 1) % cols != 0 => f + 1,
            Msg::FocusUp if f >= cols => f - cols,
            Msg::FocusDown if f + cols < len => f + cols,
            // Moving down into a short last row lands on its last card.
            Msg::FocusDown if f / cols < (len - 1) / cols => len - 1,
            _ => f,
        };
    }

    fn apply_picker_action(&mut self, action: PickerAction) {
        match action {
            PickerAction::Toggle(kind) => {
                self.board.toggle_selection(&kind);
            }
            PickerAction::Confirm => {
                let added = self.board.confirm_selection();
                if let Some(pos) = added.first().and_then(|id| self.board.position(*id)) {
                    self.focus = pos;
                }
                tracing::info!(added = added.len(), total = self.board.len(), "widgets added");
            }
            PickerAction::Cancel => self.board.cancel_picker(),
        }
    }

    fn delete(&mut self, id: WidgetId) {
        if let Some(removed) = self.board.delete_widget(id) {
            tracing::info!(id = %removed.id, kind = %removed.kind, "widget deleted");
        }
        self.clamp_focus();
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let [title_area, range_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(self.range_label.width() as u16),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(self.title.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(self.range_label.as_str()).style(Style::default().fg(Color::Gray)),
            range_area,
        );
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        let widgets = self.board.widgets();
        if widgets.is_empty() {
            centered_message(frame, area, EMPTY_BOARD, Style::default().fg(Color::DarkGray));
            return;
        }
        let rows = widgets.len().div_ceil(self.columns);
        let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);
        for (row, chunk) in widgets.chunks(self.columns).enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); self.columns]).split(row_areas[row]);
            for (col, widget) in chunk.iter().enumerate() {
                let index = row * self.columns + col;
                let action = self.registry.card_action(&widget.kind);
                let block = card_block(widget, index == self.focus, action);
                let inner = block.inner(cells[col]);
                frame.render_widget(block, cells[col]);
                self.registry.render(widget, frame, inner);
            }
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let count = match self.board.len() {
            1 => "1 widget".to_string(),
            n => format!("{n} widgets"),
        };
        let [help_area, count_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(count.width() as u16),
        ])
        .spacing(1)
        .areas(area);
        let line = help_line(&self.keys.short_help(), help_area.width, &self.help_style);
        frame.render_widget(Paragraph::new(line), help_area);
        frame.render_widget(
            Paragraph::new(count).style(Style::default().fg(Color::DarkGray)),
            count_area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let lines = help_lines(&self.keys.full_help(), &self.help_style);
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;
        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = render_overlay(frame, centered_fixed(width, height, area), &block);
        frame.render_widget(Paragraph::new(lines), inner.inner(Margin::new(1, 0)));
    }
}

impl Model for Dashboard {
    type Message = Msg;
    type Flags = DashboardFlags;

    fn init(flags: DashboardFlags) -> (Self, Command<Msg>) {
        tracing::debug!(widgets = flags.board.len(), columns = flags.columns, "dashboard ready");
        let model = Self {
            board: flags.board,
            registry: flags.registry,
            picker: Picker::new(),
            keys: BoardKeys::default(),
            help_style: HelpStyle::default(),
            title: flags.title,
            range_label: flags.range_label,
            columns: usize::from(flags.columns.max(1)),
            focus: 0,
            show_help: false,
        };
        (model, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::FocusLeft | Msg::FocusRight | Msg::FocusUp | Msg::FocusDown => {
                self.move_focus(&msg);
            }
            Msg::OpenPicker => {
                self.show_help = false;
                self.board.open_picker();
                self.picker.reset();
            }
            Msg::PickerKey(key) => {
                if !self.board.is_picker_open() {
                    return Command::none();
                }
                if let Some(action) = self.picker.handle_key(key, self.board.catalog()) {
                    self.apply_picker_action(action);
                }
            }
            Msg::DeleteFocused => {
                if let Some(id) = self.focused_id() {
                    self.delete(id);
                }
            }
            Msg::Delete(id) => self.delete(id),
            Msg::ToggleHelp => self.show_help = !self.show_help,
            Msg::Quit => return Command::quit(),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header);
        self.render_grid(frame, body);
        self.render_footer(frame, footer);

        if self.show_help {
            self.render_help(frame, area);
        }
        if self.board.is_picker_open() {
            self.picker
                .render(frame, area, self.board.catalog(), self.board.selection());
        }
    }

    fn handle_event(&self, event: TerminalEvent) -> Option<Msg> {
        let TerminalEvent::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }
        // Ctrl+C always quits, even with a dialog open.
        if key.code == KeyCode::Char('c') && self.keys.is_quit(&key) {
            return Some(Msg::Quit);
        }
        if self.board.is_picker_open() {
            return Some(Msg::PickerKey(key));
        }
        let keys = &self.keys;
        if self.show_help {
            return if keys.help.matches(&key) || key.code == KeyCode::Esc {
                Some(Msg::ToggleHelp)
            } else if keys.is_quit(&key) {
                Some(Msg::Quit)
            } else {
                None
            };
        }
        if keys.quit.matches(&key) {
            Some(Msg::Quit)
        } else if keys.add.matches(&key) {
            Some(Msg::OpenPicker)
        } else if keys.delete.matches(&key) {
            Some(Msg::DeleteFocused)
        } else if keys.help.matches(&key) {
            Some(Msg::ToggleHelp)
        } else if keys.left.matches(&key) {
            Some(Msg::FocusLeft)
        } else if keys.right.matches(&key) {
            Some(Msg::FocusRight)
        } else if keys.up.matches(&key) {
            Some(Msg::FocusUp)
        } else if keys.down.matches(&key) {
            Some(Msg::FocusDown)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tileboard_core::{Catalog, CatalogEntry, WidgetKind};
    use tileboard_runtime::testing::TestProgram;

    fn program() -> TestProgram<Dashboard> {
        TestProgram::new(DashboardFlags::default())
    }

    fn titles(prog: &TestProgram<Dashboard>) -> Vec<String> {
        prog.model().board().widgets().iter().map(|w| w.title.clone()).collect()
    }

    #[test]
    fn starts_with_seeded_board() {
        let prog = program();
        assert_eq!(prog.model().board().len(), 6);
        assert_eq!(prog.model().focus(), 0);
        assert!(!prog.model().board().is_picker_open());
    }

    #[test]
    fn renders_header_cards_and_footer() {
        let out = program().render_string(100, 30);
        assert!(out.contains("CNAPP Dashboard"));
        assert!(out.contains("Last 7 days ▼"));
        assert!(out.contains("Client Accounts"));
        assert!(out.contains("Image Security Issues"));
        assert!(out.contains("#1"));
        assert!(out.contains("6 widgets"));
        assert!(out.contains("a add widgets"));
    }

    #[test]
    fn add_first_catalog_entry() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        assert!(prog.model().board().is_picker_open());
        prog.press(KeyCode::Char(' '));
        prog.press(KeyCode::Enter);

        let board = prog.model().board();
        assert_eq!(board.len(), 7);
        assert_eq!(board.widgets()[6].title, "Widget 1");
        assert_eq!(board.widgets()[6].kind, WidgetKind::WIDGET_1);
        assert!(!board.is_picker_open());
        assert!(board.selection().is_empty());
        assert_eq!(prog.model().focus(), 6);
    }

    #[test]
    fn added_catalog_card_shows_no_data() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        prog.press(KeyCode::Char(' '));
        prog.press(KeyCode::Enter);
        let out = prog.render_string(160, 40);
        assert!(out.contains("Widget 1"));
        assert!(out.contains("#7"));
        assert!(out.contains("No Graph data available!"));
        assert!(!out.contains("Unknown widget kind"));
    }

    #[test]
    fn empty_reference_cards_offer_add_hint() {
        let out = program().render_string(160, 40);
        assert_eq!(out.matches("+ Add Widget").count(), 2);
    }

    #[test]
    fn add_several_in_toggle_order() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        prog.press(KeyCode::Char('2'));
        prog.press(KeyCode::Char('1'));
        prog.press(KeyCode::Enter);
        let t = titles(&prog);
        assert_eq!(&t[6..], ["Widget 2", "Widget 1"]);
    }

    #[test]
    fn escape_cancels_without_adding() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        prog.press(KeyCode::Char(' '));
        prog.press(KeyCode::Esc);
        assert_eq!(prog.model().board().len(), 6);
        assert!(!prog.model().board().is_picker_open());
        assert!(prog.model().board().selection().is_empty());
    }

    #[test]
    fn double_toggle_adds_nothing() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        prog.press(KeyCode::Char('3'));
        prog.press(KeyCode::Char('3'));
        prog.press(KeyCode::Enter);
        assert_eq!(prog.model().board().len(), 6);
    }

    #[test]
    fn picker_swallows_board_keys() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        prog.press(KeyCode::Char('q'));
        prog.press(KeyCode::Char('d'));
        assert!(!prog.quit_requested());
        assert_eq!(prog.model().board().len(), 6);
        assert!(prog.model().board().is_picker_open());
    }

    #[test]
    fn picker_is_drawn_over_the_board() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        let out = prog.render_string(100, 30);
        assert!(out.contains("Add Widgets"));
        assert!(out.contains("[ ] Widget 1"));
    }

    #[test]
    fn reopening_picker_starts_fresh() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        prog.press(KeyCode::Down);
        prog.press(KeyCode::Char(' '));
        prog.press(KeyCode::Esc);
        prog.press(KeyCode::Char('a'));
        assert!(prog.model().board().selection().is_empty());
        prog.press(KeyCode::Char(' '));
        prog.press(KeyCode::Enter);
        assert_eq!(titles(&prog).last().map(String::as_str), Some("Widget 1"));
    }

    #[test]
    fn delete_removes_focused_card() {
        let mut prog = program();
        let first = prog.model().focused_id().unwrap();
        prog.press(KeyCode::Char('d'));
        let board = prog.model().board();
        assert_eq!(board.len(), 5);
        assert!(board.get(first).is_none());
        assert_eq!(board.widgets()[0].title, "Cloud Account Risk Assessment");
    }

    #[test]
    fn delete_by_id_message() {
        let mut prog = program();
        let third = prog.model().board().widgets()[2].id;
        prog.send(Msg::Delete(third));
        assert_eq!(prog.model().board().len(), 5);
        prog.send(Msg::Delete(third));
        assert_eq!(prog.model().board().len(), 5);
    }

    #[test]
    fn focus_moves_across_the_grid() {
        let mut prog = program();
        prog.press(KeyCode::Right);
        assert_eq!(prog.model().focus(), 1);
        prog.press(KeyCode::Right);
        assert_eq!(prog.model().focus(), 1);
        prog.press(KeyCode::Char('j'));
        assert_eq!(prog.model().focus(), 3);
        prog.press(KeyCode::Left);
        assert_eq!(prog.model().focus(), 2);
        prog.press(KeyCode::Char('k'));
        assert_eq!(prog.model().focus(), 0);
        prog.press(KeyCode::Up);
        assert_eq!(prog.model().focus(), 0);
    }

    #[test]
    fn down_into_short_row_lands_on_last_card() {
        let flags = DashboardFlags {
            board: Board::with_seed(Catalog::default(), tileboard_core::default_seed().into_iter().take(3)),
            ..DashboardFlags::default()
        };
        let mut prog = TestProgram::<Dashboard>::new(flags);
        prog.press(KeyCode::Right);
        prog.press(KeyCode::Down);
        assert_eq!(prog.model().focus(), 2);
    }

    #[test]
    fn focus_is_clamped_after_deleting_last_card() {
        let mut prog = program();
        prog.press(KeyCode::Down);
        prog.press(KeyCode::Down);
        prog.press(KeyCode::Right);
        assert_eq!(prog.model().focus(), 5);
        prog.press(KeyCode::Delete);
        assert_eq!(prog.model().board().len(), 5);
        assert_eq!(prog.model().focus(), 4);
    }

    #[test]
    fn emptied_board_shows_hint() {
        let mut prog = program();
        for _ in 0..6 {
            prog.press(KeyCode::Char('d'));
        }
        assert!(prog.model().board().is_empty());
        prog.press(KeyCode::Char('d'));
        prog.press(KeyCode::Right);
        assert_eq!(prog.model().focus(), 0);
        let out = prog.render_string(80, 20);
        assert!(out.contains(EMPTY_BOARD));
        assert!(out.contains("0 widgets"));
    }

    #[test]
    fn quit_keys() {
        let mut prog = program();
        prog.press(KeyCode::Char('q'));
        assert!(prog.quit_requested());

        let mut prog = program();
        prog.event(TerminalEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(prog.quit_requested());
    }

    #[test]
    fn ctrl_c_quits_from_the_picker() {
        let mut prog = program();
        prog.press(KeyCode::Char('a'));
        prog.event(TerminalEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(prog.quit_requested());
    }

    #[test]
    fn help_overlay_toggles() {
        let mut prog = program();
        prog.press(KeyCode::Char('?'));
        assert!(prog.model().is_help_visible());
        let out = prog.render_string(100, 30);
        assert!(out.contains("Help"));
        assert!(out.contains("delete widget"));

        // Board keys are inert while help is up.
        prog.press(KeyCode::Char('d'));
        assert_eq!(prog.model().board().len(), 6);

        prog.press(KeyCode::Esc);
        assert!(!prog.model().is_help_visible());
    }

    #[test]
    fn key_release_is_ignored() {
        let prog = program();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(prog.model().handle_event(TerminalEvent::Key(key)), None);
    }

    #[test]
    fn flags_from_config() {
        let config = DashboardConfig {
            title: "Prod".into(),
            columns: 3,
            catalog: Some(vec![CatalogEntry::new("custom", "Custom")]),
            seed: Some(vec![CatalogEntry::new("registryScan", "Registry Scan")]),
            ..DashboardConfig::default()
        };
        let flags = DashboardFlags::from_config(&config).unwrap();
        assert_eq!(flags.columns, 3);
        assert_eq!(flags.board.len(), 1);
        assert!(flags.board.catalog().contains(&WidgetKind::new("custom")));

        let mut prog = TestProgram::<Dashboard>::new(flags);
        prog.press(KeyCode::Char('a'));
        prog.press(KeyCode::Enter);
        assert_eq!(prog.model().board().len(), 1);
        let out = prog.render_string(60, 12);
        assert!(out.contains("Prod"));
        assert!(out.contains("1 widget"));
    }

    #[test]
    fn zero_columns_rejected() {
        let config = DashboardConfig {
            columns: 0,
            ..DashboardConfig::default()
        };
        assert!(DashboardFlags::from_config(&config).is_err());
    }
}
