use std::fmt::Display;

use crate::filter::{FilterField, FilterState};

use self::{record::InventoryRecord, session::EditSession, viewport::ViewPort};

pub mod record;
pub mod session;
pub mod viewport;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    Alert,
    Edit,
    #[default]
    Navigation,
    Prompt(FilterField),
}

impl Mode {
    pub fn is_prompt(&self) -> bool {
        matches!(self, Mode::Prompt(_))
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Alert => write!(f, "alert"),
            Mode::Edit => write!(f, "edit"),
            Mode::Navigation => write!(f, "navigation"),
            Mode::Prompt(FilterField::Search) => write!(f, "search"),
            Mode::Prompt(FilterField::StartDate) => write!(f, "start date"),
            Mode::Prompt(FilterField::EndDate) => write!(f, "end date"),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ListState {
    #[default]
    Idle,
    Editing(EditSession),
}

#[derive(Debug, Default)]
pub struct InventoryList {
    pub cursor: usize,
    pub filter: FilterState,
    pub prompt: Option<FilterField>,
    pub show_border: bool,
    pub state: ListState,
    pub view_port: ViewPort,
}

impl InventoryList {
    /// Keymap mode matching the current state. Edit is returned exactly while
    /// a session is open, which scopes the escape binding to the session.
    pub fn mode(&self) -> Mode {
        match (&self.state, &self.prompt) {
            (ListState::Editing(_), _) => Mode::Edit,
            (ListState::Idle, Some(field)) => Mode::Prompt(*field),
            (ListState::Idle, None) => Mode::Navigation,
        }
    }

    pub fn session(&self) -> Option<&EditSession> {
        match &self.state {
            ListState::Editing(session) => Some(session),
            ListState::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.state {
            ListState::Editing(session) => Some(session),
            ListState::Idle => None,
        }
    }

    pub fn filtered<'a>(
        &self,
        products: &'a [InventoryRecord],
    ) -> Vec<(usize, &'a InventoryRecord)> {
        self.filter.apply(products)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListResult {
    Alert(String),
    Deleted(usize),
    Edited(usize),
}
