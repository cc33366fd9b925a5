use std::{collections::HashMap, slice::Iter};

use stock_list::model::Mode;

use crate::{key::Key, message::Binding, KeyMapError};

#[derive(Debug, Default)]
pub struct KeyTree {
    modes: HashMap<Mode, Node>,
}

#[derive(Clone, Debug)]
pub enum Node {
    Binding(Binding),
    Key(HashMap<Key, Node>),
}

impl KeyTree {
    pub fn add_mapping(
        &mut self,
        mode: &Mode,
        keys: Vec<Key>,
        binding: Binding,
    ) -> Result<(), KeyMapError> {
        if keys.is_empty() {
            return Err(KeyMapError::NoKeysRemaining);
        }

        let node = self
            .modes
            .entry(mode.clone())
            .or_insert_with(|| Node::Key(HashMap::new()));

        add_mapping_node(&mut keys.iter(), node, binding, mode)
    }

    pub fn get_binding(
        &self,
        mode: &Mode,
        keys: &[Key],
    ) -> Result<(Binding, Vec<Key>), KeyMapError> {
        let node = match self.modes.get(mode) {
            Some(it) => it,
            None => return Err(KeyMapError::ModeUnresolvable(mode.to_string())),
        };

        let mut iter = keys.iter();
        match get_bindings_from_node(node, &mut iter)? {
            Node::Binding(binding) => Ok((binding, iter.cloned().collect())),
            Node::Key(_) => Err(KeyMapError::KeySequenceIncomplete),
        }
    }
}

fn add_mapping_node(
    iter: &mut Iter<'_, Key>,
    node: &mut Node,
    binding: Binding,
    mode: &Mode,
) -> Result<(), KeyMapError> {
    let map = match node {
        Node::Key(map) => map,
        Node::Binding(_) => return Err(KeyMapError::MappingConflict(mode.to_string())),
    };

    let key = match iter.next() {
        Some(it) => it,
        None => return Err(KeyMapError::MappingConflict(mode.to_string())),
    };

    if iter.len() == 0 {
        if map.contains_key(key) {
            return Err(KeyMapError::MappingConflict(mode.to_string()));
        }

        map.insert(key.clone(), Node::Binding(binding));
        Ok(())
    } else {
        let node = map
            .entry(key.clone())
            .or_insert_with(|| Node::Key(HashMap::new()));

        add_mapping_node(iter, node, binding, mode)
    }
}

fn get_bindings_from_node(node: &Node, iter: &mut Iter<'_, Key>) -> Result<Node, KeyMapError> {
    match node {
        Node::Binding(_) => Ok(node.clone()),
        Node::Key(map) => {
            let key = match iter.next() {
                Some(it) => it,
                None => return Ok(node.clone()),
            };

            match map.get(key) {
                Some(node) => get_bindings_from_node(node, iter),
                None => Err(KeyMapError::NoValidBindingFound),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use stock_list::model::Mode;

    use crate::{
        key::{Key, KeyCode},
        message::{Binding, BindingKind, KeymapMessage},
        KeyMapError,
    };

    use super::KeyTree;

    fn keys(chars: &str) -> Vec<Key> {
        chars
            .chars()
            .map(|c| Key::new(KeyCode::from_char(c), vec![]))
            .collect()
    }

    fn quit() -> Binding {
        Binding {
            kind: BindingKind::Message(KeymapMessage::Quit),
            ..Default::default()
        }
    }

    #[test]
    fn get_binding_returns_unused_keys() {
        let mut tree = KeyTree::default();
        tree.add_mapping(&Mode::Navigation, keys("q"), quit()).unwrap();

        let (binding, unused) = tree.get_binding(&Mode::Navigation, &keys("qj")).unwrap();

        assert_eq!(quit(), binding);
        assert_eq!(keys("j"), unused);
    }

    #[test]
    fn get_binding_with_prefix_is_incomplete() {
        let mut tree = KeyTree::default();
        tree.add_mapping(&Mode::Navigation, keys("dd"), quit()).unwrap();

        assert_eq!(
            Err(KeyMapError::KeySequenceIncomplete),
            tree.get_binding(&Mode::Navigation, &keys("d"))
        );
        assert_eq!(
            Err(KeyMapError::NoValidBindingFound),
            tree.get_binding(&Mode::Navigation, &keys("dx"))
        );
    }

    #[test]
    fn get_binding_for_unmapped_mode_fails() {
        let tree = KeyTree::default();

        assert_eq!(
            Err(KeyMapError::ModeUnresolvable("edit".to_string())),
            tree.get_binding(&Mode::Edit, &keys("q"))
        );
    }

    #[test]
    fn conflicting_mappings_are_rejected() {
        let mut tree = KeyTree::default();
        tree.add_mapping(&Mode::Navigation, keys("g"), quit()).unwrap();

        assert!(tree.add_mapping(&Mode::Navigation, keys("g"), quit()).is_err());
        assert!(tree.add_mapping(&Mode::Navigation, keys("gg"), quit()).is_err());
    }
}
