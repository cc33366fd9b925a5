use chrono::NaiveDate;
use message::ListMessage;
use model::{record::InventoryRecord, InventoryList, ListResult};
use ratatui::{layout::Rect, Frame};

pub mod error;
pub mod filter;
pub mod message;
pub mod model;
mod update;
mod view;

/// Owner of the authoritative product collection. The list only reads
/// `products` and requests mutations through the callbacks, passing indexes
/// into `products`.
pub trait Inventory {
    fn products(&self) -> &[InventoryRecord];
    fn on_delete(&mut self, index: usize);
    fn on_edit(&mut self, index: usize, record: InventoryRecord);
}

pub fn update(
    list: &mut InventoryList,
    inventory: &mut impl Inventory,
    today: NaiveDate,
    message: &ListMessage,
) -> Vec<ListResult> {
    update::update(list, inventory, today, message)
}

pub fn view(list: &InventoryList, products: &[InventoryRecord], frame: &mut Frame, rect: Rect) {
    view::view(list, products, frame, rect)
}

pub fn set_viewport(list: &mut InventoryList, rect: Rect) {
    list.view_port.height = view::get_list_height(list.show_border, rect);
    list.view_port.update_by_cursor(list.cursor);
}
