use crate::model::Mode;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListMessage {
    Cancel,
    ChangeMode(Mode, Mode),
    ChangeSelection(SelectionDirection),
    ClearFilter,
    Delete,
    Edit,
    Modification(TextModification),
    MoveCursor(usize, CursorDirection),
    MoveFocus(FocusDirection),
    Save,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    Insert(String),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Bottom,
    Down,
    Top,
    Up,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FocusDirection {
    Next,
    Previous,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SelectionDirection {
    Next,
    Previous,
}
