//! Key bindings and the help text rendered from them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// How the keys are shown in help text, e.g. `"a"` or `"↑↓←→"`.
    pub label: String,
    /// What the binding does.
    pub description: String,
    /// Disabled bindings never match and are left out of help text.
    pub enabled: bool,
}

/// A single key press with optional modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Binding {
    pub fn new(key: KeyCombination, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], label, description)
    }

    pub fn with_keys(
        keys: Vec<KeyCombination>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            label: label.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` matches any of this binding's key combinations.
    /// Always `false` when the binding is disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// A key with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key held with Ctrl.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// Types that own a set of bindings and can describe them for help text.
pub trait KeyMap {
    /// The few bindings worth showing in a one-line footer.
    fn short_help(&self) -> Vec<&Binding>;
    /// Every binding, grouped under a heading for the full help overlay.
    fn full_help(&self) -> Vec<(&'static str, Vec<&Binding>)>;
}

/// Styles for rendered help text.
#[derive(Debug, Clone)]
pub struct HelpStyle {
    pub key: Style,
    pub description: Style,
    pub separator: Style,
    pub heading: Style,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            key: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Gray),
            separator: Style::default().fg(Color::DarkGray),
            heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }
}

const SEPARATOR: &str = " • ";
const ELLIPSIS: &str = "…";

/// One-line summary of `bindings` that fits in `max_width` columns.
///
/// Entries that would overflow are dropped and replaced with an ellipsis.
pub fn help_line(bindings: &[&Binding], max_width: u16, style: &HelpStyle) -> Line<'static> {
    let max = usize::from(max_width);
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for b in bindings.iter().filter(|b| b.enabled) {
        let entry = b.label.width() + 1 + b.description.width();
        let sep = if spans.is_empty() { 0 } else { SEPARATOR.width() };
        if used + sep + entry > max {
            if used + ELLIPSIS.width() + sep <= max {
                if sep > 0 {
                    spans.push(Span::styled(SEPARATOR, style.separator));
                }
                spans.push(Span::styled(ELLIPSIS, style.separator));
            }
            break;
        }
        if sep > 0 {
            spans.push(Span::styled(SEPARATOR, style.separator));
        }
        spans.push(Span::styled(b.label.clone(), style.key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(b.description.clone(), style.description));
        used += sep + entry;
    }
    Line::from(spans)
}

/// Multi-line help: a heading per group followed by aligned `key  description`
/// rows.
pub fn help_lines(groups: &[(&'static str, Vec<&Binding>)], style: &HelpStyle) -> Vec<Line<'static>> {
    let key_width = groups
        .iter()
        .flat_map(|(_, bindings)| bindings.iter())
        .filter(|b| b.enabled)
        .map(|b| b.label.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (heading, bindings) in groups {
        let active: Vec<_> = bindings.iter().filter(|b| b.enabled).collect();
        if active.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled(*heading, style.heading));
        for b in active {
            let pad = " ".repeat(key_width - b.label.width() + 2);
            lines.push(Line::from(vec![
                Span::styled(b.label.clone(), style.key),
                Span::raw(pad),
                Span::styled(b.description.clone(), style.description),
            ]));
        }
    }
    lines
}
