use std::fmt::Display;

use crate::key::{Key, KeyCode};

#[derive(Default)]
pub struct KeyBuffer {
    buffer: Vec<Key>,
}

impl KeyBuffer {
    pub fn add_key(&mut self, key: Key) {
        if key.code == KeyCode::Esc && !self.buffer.is_empty() {
            self.buffer.clear();
            return;
        }

        self.buffer.push(key);
    }

    pub fn get_keys(&self) -> Vec<Key> {
        self.buffer.to_vec()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn to_keycode_string(&self) -> String {
        self.buffer.iter().map(|key| key.to_keycode_string()).collect()
    }

    /// Text inserted by the buffered keys, if every key produces text.
    pub fn to_text(&self) -> Option<String> {
        self.buffer.iter().map(|key| key.to_text()).collect()
    }
}

impl Display for KeyBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for key in &self.buffer {
            write!(f, "{}", key)?;
        }

        Ok(())
    }
}
