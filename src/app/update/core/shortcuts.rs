use super::super::super::messages::Message;
use super::super::super::state::App;
use flipbook_core::NavKey;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Arrow keys turn pages regardless of configured shortcuts.
    pub(super) fn nav_key_for(key: &Key, modifiers: Modifiers) -> Option<NavKey> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }
        match key.as_ref() {
            Key::Named(key::Named::ArrowLeft) => Some(NavKey::ArrowLeft),
            Key::Named(key::Named::ArrowRight) => Some(NavKey::ArrowRight),
            _ => None,
        }
    }

    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else if Self::shortcut_matches(&self.config.key_reload, "r", &pressed, modifiers) {
            Some(Message::ReloadCatalog)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        if pressed != required_key.unwrap_or(fallback) {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized.replace("spacebar", "space")
        }
    }
}
