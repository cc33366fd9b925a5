use std::collections::HashMap;

use stock_list::{
    filter::FilterField,
    message::{CursorDirection, FocusDirection, ListMessage, SelectionDirection, TextModification},
    model::Mode,
};

use crate::{
    conversion,
    key::Key,
    message::{Binding, BindingKind, KeymapMessage},
    tree::KeyTree,
};

const PROMPTS: [Mode; 3] = [
    Mode::Prompt(FilterField::Search),
    Mode::Prompt(FilterField::StartDate),
    Mode::Prompt(FilterField::EndDate),
];

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Mode, Vec<(Vec<Key>, Binding)>>,
}

impl KeyMap {
    pub fn into_tree(self) -> KeyTree {
        let mut tree = KeyTree::default();
        for (mode, mappings) in self.mappings {
            for (keys, binding) in mappings {
                if let Err(error) = tree.add_mapping(&mode, keys, binding) {
                    tracing::error!("adding key mapping failed: {:?}", error);
                }
            }
        }
        tree
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = HashMap::new();

        add_mapping(
            &mut mappings,
            vec![Mode::Alert],
            vec![
                ("<cr>", message(KeymapMessage::DismissAlert)),
                ("<esc>", message(KeymapMessage::DismissAlert)),
            ],
        );

        let mut navigation = vec![
            ("c", list(ListMessage::ClearFilter)),
            ("dd", once(ListMessage::Delete)),
            ("e", once(ListMessage::Edit)),
            ("<cr>", once(ListMessage::Edit)),
            ("fe", force(Mode::Prompt(FilterField::EndDate))),
            ("fs", force(Mode::Prompt(FilterField::StartDate))),
            ("/", force(Mode::Prompt(FilterField::Search))),
            ("gg", motion(CursorDirection::Top)),
            ("G", motion(CursorDirection::Bottom)),
            ("<home>", motion(CursorDirection::Top)),
            ("<end>", motion(CursorDirection::Bottom)),
            ("j", motion(CursorDirection::Down)),
            ("<down>", motion(CursorDirection::Down)),
            ("k", motion(CursorDirection::Up)),
            ("<up>", motion(CursorDirection::Up)),
            ("q", message(KeymapMessage::Quit)),
        ];
        navigation.extend([
            ("0", repeat(0)),
            ("1", repeat(1)),
            ("2", repeat(2)),
            ("3", repeat(3)),
            ("4", repeat(4)),
            ("5", repeat(5)),
            ("6", repeat(6)),
            ("7", repeat(7)),
            ("8", repeat(8)),
            ("9", repeat(9)),
        ]);
        add_mapping(&mut mappings, vec![Mode::Navigation], navigation);

        add_mapping(
            &mut mappings,
            vec![Mode::Edit],
            vec![
                ("<esc>", list(ListMessage::Cancel)),
                ("<cr>", list(ListMessage::Save)),
                ("<tab>", list(ListMessage::MoveFocus(FocusDirection::Next))),
                ("<down>", list(ListMessage::MoveFocus(FocusDirection::Next))),
                (
                    "<S-tab>",
                    list(ListMessage::MoveFocus(FocusDirection::Previous)),
                ),
                ("<up>", list(ListMessage::MoveFocus(FocusDirection::Previous))),
                (
                    "<left>",
                    list(ListMessage::ChangeSelection(SelectionDirection::Previous)),
                ),
                (
                    "<right>",
                    list(ListMessage::ChangeSelection(SelectionDirection::Next)),
                ),
            ],
        );

        add_mapping(
            &mut mappings,
            PROMPTS.to_vec(),
            vec![
                ("<cr>", force(Mode::Navigation)),
                ("<esc>", force(Mode::Navigation)),
            ],
        );

        let mut editable = vec![Mode::Edit];
        editable.extend(PROMPTS);
        add_mapping(
            &mut mappings,
            editable,
            vec![(
                "<bs>",
                Binding {
                    kind: BindingKind::Modification(TextModification::DeleteCharBeforeCursor),
                    ..Default::default()
                },
            )],
        );

        Self { mappings }
    }
}

fn add_mapping(
    mappings: &mut HashMap<Mode, Vec<(Vec<Key>, Binding)>>,
    modes: Vec<Mode>,
    bindings: Vec<(&str, Binding)>,
) {
    let bindings: Vec<_> = bindings
        .into_iter()
        .map(|(keycodes, binding)| {
            let keys: Vec<_> = conversion::from_keycode_string(keycodes).into();
            (keys, binding)
        })
        .collect();

    for mode in modes {
        mappings
            .entry(mode)
            .or_insert_with(Vec::new)
            .extend(bindings.clone());
    }
}

fn force(mode: Mode) -> Binding {
    Binding {
        force: Some(mode),
        repeatable: false,
        ..Default::default()
    }
}

fn list(message: ListMessage) -> Binding {
    Binding {
        kind: BindingKind::Message(KeymapMessage::List(message)),
        ..Default::default()
    }
}

fn message(message: KeymapMessage) -> Binding {
    Binding {
        kind: BindingKind::Message(message),
        repeatable: false,
        ..Default::default()
    }
}

fn motion(direction: CursorDirection) -> Binding {
    Binding {
        kind: BindingKind::Motion(direction),
        ..Default::default()
    }
}

fn once(message: ListMessage) -> Binding {
    Binding {
        repeatable: false,
        ..list(message)
    }
}

fn repeat(count: usize) -> Binding {
    Binding {
        kind: BindingKind::Repeat,
        repeat: Some(count),
        ..Default::default()
    }
}

#[cfg(test)]
mod test {
    use stock_list::model::Mode;

    use crate::{conversion, message::BindingKind};

    use super::KeyMap;

    #[test]
    fn keycode_mappings_resolve_in_tree() {
        let tree = KeyMap::default().into_tree();

        let keys: Vec<_> = conversion::from_keycode_string("<S-tab>").into();
        let (binding, unused) = tree.get_binding(&Mode::Edit, &keys).unwrap();

        assert!(unused.is_empty());
        assert!(matches!(binding.kind, BindingKind::Message(_)));
    }

    #[test]
    fn digits_are_repeat_bindings_in_navigation_only() {
        let tree = KeyMap::default().into_tree();
        let keys: Vec<_> = conversion::from_keycode_string("7").into();

        let (binding, _) = tree.get_binding(&Mode::Navigation, &keys).unwrap();
        assert_eq!(BindingKind::Repeat, binding.kind);
        assert_eq!(Some(7), binding.repeat);

        assert!(tree.get_binding(&Mode::Edit, &keys).is_err());
    }
}
