use ratatui::layout::Rect;
use stock_list::model::{InventoryList, Mode};

use crate::{
    inventory::InventoryStore,
    layout::{AppLayout, CommandLineLayout},
    settings::Settings,
};

#[derive(Debug)]
pub struct Model {
    pub alert: Option<String>,
    pub commandline: CommandLine,
    pub inventory: InventoryStore,
    pub key_sequence: String,
    pub layout: AppLayout,
    pub list: InventoryList,
    pub mode: Mode,
}

impl Model {
    pub fn new(settings: &Settings, inventory: InventoryStore) -> Self {
        Self {
            alert: None,
            commandline: CommandLine::default(),
            inventory,
            key_sequence: String::new(),
            layout: AppLayout::new(Rect::default()),
            list: InventoryList {
                show_border: settings.show_border,
                ..Default::default()
            },
            mode: Mode::default(),
        }
    }
}

#[derive(Debug)]
pub struct CommandLine {
    pub content: Option<PrintContent>,
    pub layout: CommandLineLayout,
}

impl Default for CommandLine {
    fn default() -> Self {
        Self {
            content: None,
            layout: CommandLineLayout::new(Rect::default(), 0),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrintContent {
    Error(String),
    Information(String),
}
