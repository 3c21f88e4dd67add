//! Suggestion filtering and dropdown state for autocomplete inputs.

/// Suggestions containing `query`, ignoring case, in their original order.
pub fn filter_suggestions<S: AsRef<str>>(suggestions: &[S], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    suggestions
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| s.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// What a key press did to the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; let the browser have it.
    Ignored,
    /// Highlight moved or the list closed.
    Handled,
    Selected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autocomplete {
    filtered: Vec<String>,
    open: bool,
    highlight: Option<usize>,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Re-filter after the field changed or gained focus.
    pub fn update<S: AsRef<str>>(&mut self, value: &str, suggestions: &[S]) {
        self.highlight = None;
        if value.is_empty() {
            self.filtered.clear();
            self.open = false;
            return;
        }
        self.filtered = filter_suggestions(suggestions, value);
        self.open = !self.filtered.is_empty();
    }

    pub fn hover(&mut self, index: usize) {
        if index < self.filtered.len() {
            self.highlight = Some(index);
        }
    }

    /// Pick an entry by index, closing the list.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let value = self.filtered.get(index).cloned()?;
        self.close();
        Some(value)
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlight = None;
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.open || self.filtered.is_empty() {
            return KeyOutcome::Ignored;
        }
        let len = self.filtered.len();
        match key {
            Key::ArrowDown => {
                self.highlight = Some(match self.highlight {
                    Some(i) => (i + 1) % len,
                    None => 0,
                });
                KeyOutcome::Handled
            }
            Key::ArrowUp => {
                self.highlight = Some(match self.highlight {
                    Some(0) | None => len - 1,
                    Some(i) => i - 1,
                });
                KeyOutcome::Handled
            }
            Key::Enter => match self.highlight {
                Some(i) => self
                    .select(i)
                    .map(KeyOutcome::Selected)
                    .unwrap_or(KeyOutcome::Ignored),
                None => KeyOutcome::Ignored,
            },
            Key::Escape => {
                self.close();
                KeyOutcome::Handled
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAMES: [&str; 5] = [
        "STAR LOTTO",
        "BINGO4",
        "Lucky Tuesday",
        "GOLDEN SOUVENIR",
        "ENDOWMENT LOTTO",
    ];

    #[test]
    fn test_filter_case_insensitive() {
        let matches = filter_suggestions(&GAMES, "lotto");
        assert_eq!(matches, vec!["STAR LOTTO", "ENDOWMENT LOTTO"]);

        let matches = filter_suggestions(&GAMES, "LUCKY");
        assert_eq!(matches, vec!["Lucky Tuesday"]);
    }

    #[test]
    fn test_typing_shows_matches_and_clearing_hides() {
        let mut ac = Autocomplete::new();
        ac.update("Lot", &GAMES);
        assert!(ac.is_open());
        assert_eq!(ac.filtered().len(), 2);

        ac.update("", &GAMES);
        assert!(!ac.is_open());
        assert!(ac.filtered().is_empty());
    }

    #[test]
    fn test_no_matches_stays_closed() {
        let mut ac = Autocomplete::new();
        ac.update("zzz", &GAMES);
        assert!(!ac.is_open());
    }

    #[test]
    fn test_select_closes_and_returns_value() {
        let mut ac = Autocomplete::new();
        ac.update("o", &GAMES);
        let picked = ac.select(1);
        assert_eq!(picked.as_deref(), Some("BINGO4"));
        assert!(!ac.is_open());
        assert_eq!(ac.select(99), None);
    }

    #[test]
    fn test_hover_sets_highlight() {
        let mut ac = Autocomplete::new();
        ac.update("lotto", &GAMES);
        ac.hover(1);
        assert_eq!(ac.highlight(), Some(1));
        ac.hover(5);
        assert_eq!(ac.highlight(), Some(1));
    }

    #[test]
    fn test_keyboard_navigation_wraps() {
        let mut ac = Autocomplete::new();
        ac.update("lotto", &GAMES);

        assert_eq!(ac.handle_key(Key::ArrowDown), KeyOutcome::Handled);
        assert_eq!(ac.highlight(), Some(0));
        ac.handle_key(Key::ArrowDown);
        assert_eq!(ac.highlight(), Some(1));
        ac.handle_key(Key::ArrowDown);
        assert_eq!(ac.highlight(), Some(0));
        ac.handle_key(Key::ArrowUp);
        assert_eq!(ac.highlight(), Some(1));
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let mut ac = Autocomplete::new();
        ac.update("lotto", &GAMES);
        assert_eq!(ac.handle_key(Key::Enter), KeyOutcome::Ignored);

        ac.handle_key(Key::ArrowUp);
        assert_eq!(
            ac.handle_key(Key::Enter),
            KeyOutcome::Selected("ENDOWMENT LOTTO".to_string())
        );
        assert!(!ac.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut ac = Autocomplete::new();
        ac.update("lotto", &GAMES);
        assert_eq!(ac.handle_key(Key::Escape), KeyOutcome::Handled);
        assert!(!ac.is_open());
        assert_eq!(ac.handle_key(Key::ArrowDown), KeyOutcome::Ignored);
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom("Esc"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }
}
