use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub list: Rect,
    pub statusline: Rect,
    pub commandline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(rect);

        Self {
            list: main[0],
            statusline: main[1],
            commandline: main[2],
        }
    }
}

#[derive(Clone, Debug)]
pub struct CommandLineLayout {
    pub message: Rect,
    pub key_sequence: Rect,
}

impl CommandLineLayout {
    pub fn new(rect: Rect, key_sequence_length: u16) -> Self {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(key_sequence_length),
            ])
            .split(rect);

        Self {
            message: layout[0],
            key_sequence: layout[1],
        }
    }
}
