use crossterm::event::{KeyCode, KeyEvent};
use tileboard_widgets::key::{Binding, KeyCombination, KeyMap};

/// Board-level bindings, active while no dialog is open.
#[derive(Debug, Clone)]
pub struct BoardKeys {
    pub left: Binding,
    pub right: Binding,
    pub up: Binding,
    pub down: Binding,
    pub add: Binding,
    pub delete: Binding,
    pub help: Binding,
    pub quit: Binding,
    /// Only shown in the full help; the motion keys above do the work.
    move_hint: Binding,
    picker_hints: Vec<Binding>,
}

impl Default for BoardKeys {
    fn default() -> Self {
        let key = KeyCombination::new;
        Self {
            left: Binding::with_keys(vec![key(KeyCode::Left), key(KeyCode::Char('h'))], "←/h", "focus left"),
            right: Binding::with_keys(vec![key(KeyCode::Right), key(KeyCode::Char('l'))], "→/l", "focus right"),
            up: Binding::with_keys(vec![key(KeyCode::Up), key(KeyCode::Char('k'))], "↑/k", "focus up"),
            down: Binding::with_keys(vec![key(KeyCode::Down), key(KeyCode::Char('j'))], "↓/j", "focus down"),
            add: Binding::new(key(KeyCode::Char('a')), "a", "add widgets"),
            delete: Binding::with_keys(vec![key(KeyCode::Char('d')), key(KeyCode::Delete)], "d/del", "delete widget"),
            help: Binding::new(key(KeyCode::Char('?')), "?", "help"),
            quit: Binding::with_keys(
                vec![key(KeyCode::Char('q')), KeyCombination::ctrl(KeyCode::Char('c'))],
                "q",
                "quit",
            ),
            move_hint: Binding::with_keys(Vec::new(), "←↓↑→", "move"),
            picker_hints: vec![
                Binding::with_keys(Vec::new(), "↑/↓", "move cursor"),
                Binding::with_keys(Vec::new(), "space", "toggle entry"),
                Binding::with_keys(Vec::new(), "1-9", "toggle entry by number"),
                Binding::with_keys(Vec::new(), "enter", "add checked widgets"),
                Binding::with_keys(Vec::new(), "esc", "cancel"),
            ],
        }
    }
}

impl BoardKeys {
    /// Whether `event` is one of the quit keys.
    pub fn is_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event)
    }
}

impl KeyMap for BoardKeys {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.move_hint, &self.add, &self.delete, &self.help, &self.quit]
    }

    fn full_help(&self) -> Vec<(&'static str, Vec<&Binding>)> {
        vec![
            (
                "Board",
                vec![
                    &self.left,
                    &self.right,
                    &self.up,
                    &self.down,
                    &self.add,
                    &self.delete,
                    &self.help,
                    &self.quit,
                ],
            ),
            ("Add Widgets", self.picker_hints.iter().collect()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn vim_and_arrow_keys_both_move() {
        let keys = BoardKeys::default();
        assert!(keys.left.matches(&KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
        assert!(keys.left.matches(&KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(!keys.left.matches(&KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)));
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let keys = BoardKeys::default();
        assert!(keys.is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(keys.is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!keys.is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn hint_only_bindings_never_match() {
        let keys = BoardKeys::default();
        for b in keys.short_help() {
            if b.keys.is_empty() {
                assert!(!b.matches(&KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)));
            }
        }
    }

    #[test]
    fn full_help_lists_every_board_binding() {
        let keys = BoardKeys::default();
        let groups = keys.full_help();
        assert_eq!(groups[0].0, "Board");
        assert_eq!(groups[0].1.len(), 8);
        assert_eq!(groups[1].0, "Add Widgets");
    }
}
