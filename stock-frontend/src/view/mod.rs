use stock_list::Inventory;

use crate::{error::AppError, model::Model, terminal::TerminalWrapper};

mod alert;
mod commandline;
mod statusline;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = model.layout.clone();

        stock_list::view(&model.list, model.inventory.products(), frame, layout.list);
        statusline::view(model, frame, layout.statusline);
        commandline::view(model, frame);

        if let Some(text) = &model.alert {
            alert::view(text, frame, layout.list);
        }
    })
}
