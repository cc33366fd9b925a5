use chrono::NaiveDate;

use crate::{
    error::SaveError,
    message::TextModification,
    model::{record::InventoryRecord, session::EditSession, InventoryList, ListResult, ListState},
    Inventory,
};

/// Opens a session on `index`. An already open session is replaced without
/// committing anything.
pub fn edit(list: &mut InventoryList, index: usize, record: &InventoryRecord) {
    if let ListState::Editing(session) = &list.state {
        tracing::debug!(
            "replacing open session on index {} with {}",
            session.index,
            index
        );
    }

    list.prompt = None;
    list.state = ListState::Editing(EditSession::new(index, record));
}

pub fn save(
    list: &mut InventoryList,
    inventory: &mut impl Inventory,
    today: NaiveDate,
) -> Vec<ListResult> {
    let session = match &list.state {
        ListState::Editing(it) => it,
        ListState::Idle => return Vec::new(),
    };

    match session.to_record(today) {
        Ok(record) => {
            let index = session.index;
            tracing::debug!("saving product at index {}: {:?}", index, record);

            inventory.on_edit(index, record);
            list.state = ListState::Idle;

            vec![ListResult::Edited(index)]
        }
        Err(error @ SaveError::FutureEntryDate) => {
            tracing::debug!("save rejected: {}", error);
            vec![ListResult::Alert(error.to_string())]
        }
        Err(error @ SaveError::IncompleteFields) => {
            // NOTE: incomplete fields keep the session open without notice
            tracing::debug!("save rejected: {}", error);
            Vec::new()
        }
    }
}

pub fn cancel(list: &mut InventoryList) {
    if let ListState::Editing(session) = &list.state {
        tracing::debug!("discarding session on index {}", session.index);
    }

    list.state = ListState::Idle;
}

pub fn modify(list: &mut InventoryList, modification: &TextModification) {
    let session = match list.session_mut() {
        Some(it) => it,
        None => return,
    };

    match modification {
        TextModification::DeleteCharBeforeCursor => session.delete_char_before_cursor(),
        TextModification::Insert(content) => session.insert(content),
    }
}
