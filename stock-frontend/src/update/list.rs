use chrono::NaiveDate;
use stock_list::{message::ListMessage, model::ListResult};

use crate::{
    action::Action,
    model::{Model, PrintContent},
};

pub fn update(model: &mut Model, message: &ListMessage, today: NaiveDate) -> Vec<Action> {
    if model.alert.is_some() {
        tracing::debug!("alert pending, skipping: {:?}", message);
        return Vec::new();
    }

    let results = stock_list::update(&mut model.list, &mut model.inventory, today, message);
    for result in results {
        match result {
            ListResult::Alert(text) => {
                tracing::debug!("showing alert: {}", text);
                model.alert = Some(text);
            }
            ListResult::Deleted(index) => {
                tracing::debug!("deleted product at {}", index);
                model.commandline.content =
                    Some(PrintContent::Information("Producto eliminado.".to_string()));
            }
            ListResult::Edited(index) => {
                tracing::debug!("edited product at {}", index);
                model.commandline.content =
                    Some(PrintContent::Information("Producto guardado.".to_string()));
            }
        }
    }

    Vec::new()
}
