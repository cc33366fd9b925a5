use buffer::KeyBuffer;
use key::{Key, KeyCode};
use map::KeyMap;
use message::{Binding, BindingKind, KeySequence, KeymapMessage};
use stock_list::{
    message::{ListMessage, TextModification},
    model::Mode,
};
use tree::KeyTree;

mod buffer;
pub mod conversion;
pub mod key;
mod map;
pub mod message;
mod tree;

#[derive(Debug, thiserror::Error, PartialEq)]
enum KeyMapError {
    #[error("Key sequence is incomplete.")]
    KeySequenceIncomplete,
    #[error("Mapping conflicts with an existing mapping in mode {0}.")]
    MappingConflict(String),
    #[error("Failed to add mapping for mode {0}.")]
    ModeUnresolvable(String),
    #[error("Failed to resolve valid binding.")]
    NoValidBindingFound,
    #[error("No keys left.")]
    NoKeysRemaining,
}

/// Turns key presses into messages for the current mode. The mode must be
/// kept in sync with the list state by the caller, which decides which
/// bindings (escape included) are reachable.
pub struct MessageResolver {
    buffer: KeyBuffer,
    pub mode: Mode,
    tree: KeyTree,
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self {
            buffer: KeyBuffer::default(),
            mode: Mode::default(),
            tree: KeyMap::default().into_tree(),
        }
    }
}

impl MessageResolver {
    pub fn add_key(&mut self, key: Key) -> (Vec<KeymapMessage>, KeySequence) {
        if key.code == KeyCode::Esc && !self.buffer.get_keys().is_empty() {
            let sequence = format!(
                "{}{}",
                self.buffer.to_keycode_string(),
                key.to_keycode_string()
            );

            self.buffer.clear();
            return (Vec::new(), KeySequence::Completed(sequence));
        }

        self.buffer.add_key(key);

        let keys = self.buffer.get_keys();
        let binding = resolve_binding(&self.tree, &self.mode, &keys);
        let sequence = self.buffer.to_keycode_string();

        let result = match binding {
            Ok(binding) => {
                let messages = get_messages_from_binding(&self.mode, binding);
                (messages, KeySequence::Completed(sequence))
            }
            Err(KeyMapError::KeySequenceIncomplete) => {
                return (Vec::new(), KeySequence::Changed(sequence));
            }
            Err(error) => {
                let messages = match self.buffer.to_text() {
                    Some(text) if get_passthrough_by_mode(&self.mode) => {
                        vec![KeymapMessage::List(ListMessage::Modification(
                            TextModification::Insert(text),
                        ))]
                    }
                    _ => {
                        tracing::trace!("no binding for {} in {}: {}", sequence, self.mode, error);
                        Vec::new()
                    }
                };

                (messages, KeySequence::Completed(sequence))
            }
        };

        self.buffer.clear();
        result
    }
}

fn resolve_binding(tree: &KeyTree, mode: &Mode, keys: &[Key]) -> Result<Binding, KeyMapError> {
    resolve_binding_with_count(tree, mode, keys, None)
}

fn resolve_binding_with_count(
    tree: &KeyTree,
    mode: &Mode,
    keys: &[Key],
    count: Option<usize>,
) -> Result<Binding, KeyMapError> {
    if keys.is_empty() {
        return Err(KeyMapError::NoKeysRemaining);
    }

    let (mut binding, unused_keys) = tree.get_binding(mode, keys)?;
    if binding.kind != BindingKind::Repeat {
        if binding.repeatable && count.is_some() {
            binding.repeat = count;
        }
        return Ok(binding);
    }

    let count = get_repeat(count, &binding);
    match resolve_binding_with_count(tree, mode, &unused_keys, count) {
        Err(KeyMapError::NoKeysRemaining) => Err(KeyMapError::KeySequenceIncomplete),
        result => result,
    }
}

// NOTE: digits are folded left to right, so inner zeros keep their place
fn get_repeat(count: Option<usize>, digit: &Binding) -> Option<usize> {
    match (count, digit.repeat) {
        (Some(count), Some(digit)) => Some(count.saturating_mul(10).saturating_add(digit)),
        (None, digit) => digit,
        (count, None) => count,
    }
}

fn get_messages_from_binding(mode: &Mode, binding: Binding) -> Vec<KeymapMessage> {
    let mut messages = Vec::new();
    if let Some(md) = &binding.force {
        messages.push(KeymapMessage::List(ListMessage::ChangeMode(
            mode.clone(),
            md.clone(),
        )));
    };

    let repeat = binding.repeat.unwrap_or(1);
    match binding.kind {
        BindingKind::Message(msg) => messages.push(msg),
        BindingKind::Modification(mdf) => {
            messages.push(KeymapMessage::List(ListMessage::Modification(mdf)))
        }
        BindingKind::Motion(mtn) => {
            messages.push(KeymapMessage::List(ListMessage::MoveCursor(repeat, mtn)))
        }
        BindingKind::None => {}
        BindingKind::Repeat => {
            tracing::warn!("repeat binding resolved without follow up binding");
        }
    }

    messages
}

fn get_passthrough_by_mode(mode: &Mode) -> bool {
    match mode {
        Mode::Edit | Mode::Prompt(_) => true,
        Mode::Alert | Mode::Navigation => false,
    }
}
