//! The "Add Widgets" dialog: a checklist of catalog entries over the board.
//!
//! The picker only owns its cursor. Which entries are checked lives in the
//! board's [`Selection`]; key handling reports what the user asked for as a
//! [`PickerAction`] and the caller applies it to the board.

use crate::overlay::{centered_fixed, render_overlay};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tileboard_core::{Catalog, Selection, WidgetKind};
use unicode_width::UnicodeWidthStr;

/// What a key press inside the picker asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Flip the checkbox for this kind.
    Toggle(WidgetKind),
    /// Add every checked entry and close.
    Confirm,
    /// Close without adding anything.
    Cancel,
}

#[derive(Debug, Clone)]
struct PickerStyle {
    border: Style,
    title: Style,
    item: Style,
    cursor: Style,
    checked: Style,
    hint: Style,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Cyan),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            item: Style::default(),
            cursor: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            checked: Style::default().fg(Color::Green),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

const TITLE: &str = " Add Widgets ";
const HINT: &str = "[Space] Toggle  [Enter] Add  [Esc] Cancel";

/// Checklist dialog for choosing catalog entries to add.
#[derive(Debug, Clone)]
pub struct Picker {
    cursor: usize,
    style: PickerStyle,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            style: PickerStyle::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back to the first entry. Called whenever the dialog
    /// opens.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Interpret a key press. Navigation keys move the cursor and return
    /// `None`; everything the board must act on comes back as an action.
    pub fn handle_key(&mut self, key: KeyEvent, catalog: &Catalog) -> Option<PickerAction> {
        let len = catalog.len();
        if len > 0 && self.cursor >= len {
            self.cursor = len - 1;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(PickerAction::Cancel),
            (KeyCode::Enter, _) => Some(PickerAction::Confirm),
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
                if len > 0 {
                    self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
                }
                None
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Tab, _) => {
                if len > 0 {
                    self.cursor = (self.cursor + 1) % len;
                }
                None
            }
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.cursor = 0;
                None
            }
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => {
                self.cursor = len.saturating_sub(1);
                None
            }
            (KeyCode::Char(' '), _) | (KeyCode::Char('x'), KeyModifiers::NONE) => catalog
                .entries()
                .get(self.cursor)
                .map(|entry| PickerAction::Toggle(entry.kind.clone())),
            // Number keys jump to and toggle an entry (1-indexed)
            (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
                let idx = (c as u8 - b'1') as usize;
                let entry = catalog.entries().get(idx)?;
                self.cursor = idx;
                Some(PickerAction::Toggle(entry.kind.clone()))
            }
            _ => None,
        }
    }

    /// Size the dialog needs for `catalog`, before clamping to the screen.
    fn preferred_size(&self, catalog: &Catalog) -> (u16, u16) {
        let widest_entry = catalog
            .iter()
            .map(|e| e.title.width() + 6)
            .max()
            .unwrap_or(0);
        let content = widest_entry
            .max(HINT.width())
            .max(TITLE.width());
        let width = (content + 4).min(usize::from(u16::MAX)) as u16;
        // borders + header + blank + entries + blank + hint
        let rows = catalog.len().max(1) + 6;
        (width, rows.min(usize::from(u16::MAX)) as u16)
    }

    /// Draw the dialog centered in `area`, with checkboxes from `selection`.
    pub fn render(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, selection: &Selection) {
        let (width, height) = self.preferred_size(catalog);
        let dialog = centered_fixed(width, height, area);

        let block = Block::default()
            .title(TITLE)
            .title_style(self.style.title)
            .borders(Borders::ALL)
            .border_style(self.style.border);
        let inner = render_overlay(frame, dialog, &block);

        let [header, list, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        let count = format!("{} selected", selection.len());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Select widgets to add  "),
                Span::styled(count, self.style.hint),
            ])),
            header,
        );

        let lines: Vec<Line> = if catalog.is_empty() {
            vec![Line::styled("No widgets available", self.style.hint)]
        } else {
            catalog
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let checked = selection.contains(&entry.kind);
                    let focused = i == self.cursor;
                    let marker = if focused { "▸ " } else { "  " };
                    let checkbox = if checked { "[x] " } else { "[ ] " };
                    let box_style = if checked { self.style.checked } else { self.style.item };
                    let label_style = if focused { self.style.cursor } else { self.style.item };
                    Line::from(vec![
                        Span::styled(marker, label_style),
                        Span::styled(checkbox, box_style),
                        Span::styled(entry.title.clone(), label_style),
                    ])
                })
                .collect()
        };
        // Keep the cursor row visible when the list is taller than the dialog.
        let visible = usize::from(list.height.max(1));
        let scroll = self.cursor.saturating_sub(visible - 1) as u16;
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list);

        let hint_row = Rect {
            y: hint.y + 1,
            height: 1,
            ..hint
        }
        .intersection(inner);
        frame.render_widget(Paragraph::new(HINT).style(self.style.hint).centered(), hint_row);
    }
}
