use std::{collections::VecDeque, fmt::Display, hash::Hash};

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(key: KeyCode, modifiers: Vec<KeyModifier>) -> Self {
        Self {
            code: key,
            modifiers,
        }
    }

    /// Text a key inserts into a focused input. Keys with modifiers other
    /// than shift do not produce text.
    pub fn to_text(&self) -> Option<String> {
        if self
            .modifiers
            .iter()
            .any(|modifier| *modifier != KeyModifier::Shift)
        {
            return None;
        }

        let text = match self.code {
            KeyCode::Char(c) => {
                if self.modifiers.contains(&KeyModifier::Shift) {
                    c.to_uppercase().to_string()
                } else {
                    c.to_string()
                }
            }
            KeyCode::Backslash => String::from("\\"),
            KeyCode::Bar => String::from("|"),
            KeyCode::LessThan => String::from("<"),
            KeyCode::Space => String::from(" "),
            _ => return None,
        };

        Some(text)
    }

    pub fn to_keycode_string(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();

        match self.code {
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            _ => get_key_string(self.code.to_string(), modifiers, true),
        }
    }

    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        let regex = regex::Regex::new(r"[^-<>]+|^-$|--").expect("Failed to compile regex");
        let mut codes = regex
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect::<VecDeque<_>>();

        let mut modifiers = Vec::new();
        let mut last = codes.pop_back()?;
        if last == "--" {
            last = "-";
        }

        if last.chars().count() == 1 && last.chars().last()?.is_ascii_uppercase() {
            modifiers.push(KeyModifier::Shift);
        }

        for modifier in codes {
            match modifier.to_ascii_uppercase().as_str() {
                "A" => modifiers.push(KeyModifier::Alt),
                "C" => modifiers.push(KeyModifier::Ctrl),
                "D" => modifiers.push(KeyModifier::Command),
                "S" => modifiers.push(KeyModifier::Shift),
                _ => return None,
            }
        }

        KeyCode::from_keycode_string(last).map(|code| Self { code, modifiers })
    }
}

impl Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_keycode_string().hash(state);
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        if self.code != other.code {
            return false;
        }

        if self.modifiers.len() != other.modifiers.len() {
            return false;
        }

        self.modifiers
            .iter()
            .all(|modifier| other.modifiers.contains(modifier))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_text() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{}", self.to_keycode_string()),
        }
    }
}

fn get_key_string(code: String, modifiers: Vec<KeyModifier>, force_ltgt: bool) -> String {
    if modifiers.is_empty() && !force_ltgt {
        return code;
    }

    let mut result = String::from("<");
    for modifier in modifiers {
        match modifier {
            KeyModifier::Alt => result.push_str("A-"),
            KeyModifier::Command => result.push_str("D-"),
            KeyModifier::Ctrl => result.push_str("C-"),
            KeyModifier::Shift => result.push_str("S-"),
        };
    }

    result.push_str(&code);
    result.push('>');

    result
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backslash,
    Backspace,
    Bar,
    Char(char),
    Delete,
    Down,
    End,
    Enter,
    Esc,
    Home,
    Left,
    LessThan,
    Right,
    Space,
    Tab,
    Up,
}

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        match keycode {
            "bslash" => Some(KeyCode::Backslash),
            "bs" => Some(KeyCode::Backspace),
            "bar" => Some(KeyCode::Bar),
            "del" => Some(KeyCode::Delete),
            "down" => Some(KeyCode::Down),
            "end" => Some(KeyCode::End),
            "cr" => Some(KeyCode::Enter),
            "esc" => Some(KeyCode::Esc),
            "home" => Some(KeyCode::Home),
            "left" => Some(KeyCode::Left),
            "lt" => Some(KeyCode::LessThan),
            "right" => Some(KeyCode::Right),
            "space" => Some(KeyCode::Space),
            "tab" => Some(KeyCode::Tab),
            "up" => Some(KeyCode::Up),
            code => {
                if code.chars().count() == 1 {
                    code.chars().next().map(Self::from_char)
                } else {
                    None
                }
            }
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        match c {
            '\\' => KeyCode::Backslash,
            '|' => KeyCode::Bar,
            '<' => KeyCode::LessThan,
            ' ' => KeyCode::Space,
            passed => KeyCode::Char(passed.to_lowercase().next().unwrap_or(passed)),
        }
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            KeyCode::Backslash => "bslash",
            KeyCode::Backspace => "bs",
            KeyCode::Bar => "bar",
            KeyCode::Char(c) => return write!(f, "{}", c),
            KeyCode::Delete => "del",
            KeyCode::Down => "down",
            KeyCode::End => "end",
            KeyCode::Enter => "cr",
            KeyCode::Esc => "esc",
            KeyCode::Home => "home",
            KeyCode::Left => "left",
            KeyCode::LessThan => "lt",
            KeyCode::Right => "right",
            KeyCode::Space => "space",
            KeyCode::Tab => "tab",
            KeyCode::Up => "up",
        };

        write!(f, "{}", code)
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Command,
    Ctrl,
    Shift,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_keycode_string_valid() {
        let result = Key::from_keycode_string("a");
        assert!(result.is_some(), "Expected Some(Key), got None");
    }

    #[test]
    fn from_keycode_string_dash() {
        let result = Key::from_keycode_string("-");
        assert_eq!(Some(KeyCode::Char('-')), result.map(|key| key.code));
    }

    #[test]
    fn from_keycode_string_invalid() {
        assert!(Key::from_keycode_string("<>").is_none());
        assert!(Key::from_keycode_string("").is_none());
    }

    #[test]
    fn from_keycode_string_case_sensitive() {
        let result = Key::from_keycode_string("G").unwrap();
        assert_eq!(KeyCode::Char('g'), result.code);
        assert_eq!(vec![KeyModifier::Shift], result.modifiers);
    }

    #[test]
    fn from_keycode_string_with_modifiers() {
        let result = Key::from_keycode_string("<A-C-lt>").unwrap();
        assert_eq!(KeyCode::LessThan, result.code);
        assert!(result.modifiers.contains(&KeyModifier::Alt));
        assert!(result.modifiers.contains(&KeyModifier::Ctrl));
    }

    #[test]
    fn from_keycode_string_with_invalid_modifiers() {
        assert!(Key::from_keycode_string("<A-C-invalid>").is_none());
        assert!(Key::from_keycode_string("<X-a>").is_none());
    }

    #[test]
    fn to_keycode_string_roundtrips_special_keys() {
        let key = Key::new(KeyCode::Esc, vec![]);
        assert_eq!("<esc>", key.to_keycode_string());

        let key = Key::new(KeyCode::from_char('g'), vec![KeyModifier::Shift]);
        assert_eq!("G", key.to_keycode_string());
    }

    #[test]
    fn to_text_respects_shift_and_rejects_ctrl() {
        let key = Key::new(KeyCode::from_char('a'), vec![KeyModifier::Shift]);
        assert_eq!(Some("A".to_string()), key.to_text());

        let key = Key::new(KeyCode::Space, vec![]);
        assert_eq!(Some(" ".to_string()), key.to_text());

        let key = Key::new(KeyCode::from_char('a'), vec![KeyModifier::Ctrl]);
        assert_eq!(None, key.to_text());

        let key = Key::new(KeyCode::Enter, vec![]);
        assert_eq!(None, key.to_text());
    }

    #[test]
    fn from_char_keeps_non_ascii_letters() {
        assert_eq!(KeyCode::Char('ñ'), KeyCode::from_char('Ñ'));
    }
}
