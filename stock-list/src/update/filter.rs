use crate::{
    filter::FilterField,
    message::TextModification,
    model::{InventoryList, Mode},
};

pub fn change_mode(list: &mut InventoryList, from: &Mode, to: &Mode) {
    if from == to {
        return;
    }

    match to {
        Mode::Prompt(field) if list.session().is_none() => list.prompt = Some(*field),
        Mode::Navigation => list.prompt = None,
        Mode::Alert | Mode::Edit | Mode::Prompt(_) => {
            tracing::trace!("ignoring mode change from {} to {}", from, to);
        }
    }
}

pub fn modify(list: &mut InventoryList, field: &FilterField, modification: &TextModification) {
    let content = list.filter.get_mut(field);
    match modification {
        TextModification::DeleteCharBeforeCursor => {
            content.pop();
        }
        TextModification::Insert(text) => match field {
            FilterField::Search => content.push_str(text),
            FilterField::StartDate | FilterField::EndDate => {
                content.extend(text.chars().filter(|c| c.is_ascii_digit() || *c == '-'));
            }
        },
    }

    list.cursor = 0;
}
