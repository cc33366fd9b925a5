use chrono::NaiveDate;

use crate::{
    message::ListMessage,
    model::{InventoryList, ListResult, Mode},
    Inventory,
};

mod cursor;
mod filter;
mod row;
mod session;

#[tracing::instrument(skip(list, inventory))]
pub fn update(
    list: &mut InventoryList,
    inventory: &mut impl Inventory,
    today: NaiveDate,
    message: &ListMessage,
) -> Vec<ListResult> {
    let result = match message {
        ListMessage::Cancel => {
            session::cancel(list);
            Vec::new()
        }
        ListMessage::ChangeMode(from, to) => {
            filter::change_mode(list, from, to);
            Vec::new()
        }
        ListMessage::ChangeSelection(direction) => {
            if let Some(session) = list.session_mut() {
                session.change_selection(direction);
            }
            Vec::new()
        }
        ListMessage::ClearFilter => {
            list.filter.clear();
            Vec::new()
        }
        ListMessage::Delete => match row::selected_index(list, inventory.products()) {
            Some(index) => row::delete(list, inventory, index),
            None => Vec::new(),
        },
        ListMessage::Edit => {
            let products = inventory.products();
            if let Some(index) = row::selected_index(list, products) {
                session::edit(list, index, &products[index]);
            }
            Vec::new()
        }
        ListMessage::Modification(modification) => {
            match list.mode() {
                Mode::Edit => session::modify(list, modification),
                Mode::Prompt(field) => filter::modify(list, &field, modification),
                Mode::Alert | Mode::Navigation => {}
            }
            Vec::new()
        }
        ListMessage::MoveCursor(count, direction) => {
            let len = list.filtered(inventory.products()).len();
            cursor::update_by_direction(list, len, count, direction);
            Vec::new()
        }
        ListMessage::MoveFocus(direction) => {
            if let Some(session) = list.session_mut() {
                session.move_focus(direction);
            }
            Vec::new()
        }
        ListMessage::Save => session::save(list, inventory, today),
    };

    let len = list.filtered(inventory.products()).len();
    cursor::validate(list, len);

    result
}
