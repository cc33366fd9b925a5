use stock_list::{
    message::{CursorDirection, ListMessage, TextModification},
    model::Mode,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub force: Option<Mode>,
    pub kind: BindingKind,
    pub repeat: Option<usize>,
    pub repeatable: bool,
}

impl Default for Binding {
    fn default() -> Self {
        Self {
            force: None,
            kind: BindingKind::default(),
            repeat: None,
            repeatable: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BindingKind {
    Message(KeymapMessage),
    Modification(TextModification),
    Motion(CursorDirection),
    #[default]
    None,
    Repeat,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySequence {
    Completed(String),
    Changed(String),
    None,
}

impl KeySequence {
    pub fn len_or_default(&self, default: usize) -> u16 {
        let len = match self {
            KeySequence::Completed(_) => default,
            KeySequence::Changed(sequence) => sequence.chars().count(),
            KeySequence::None => default,
        };

        u16::try_from(len).unwrap_or(u16::MAX)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    DismissAlert,
    List(ListMessage),
    Quit,
}
