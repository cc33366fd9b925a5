use crate::{error::AppError, terminal::TerminalWrapper};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Quit,
    Resize(u16, u16),
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
}

#[tracing::instrument(skip(terminal))]
pub fn exec(terminal: &mut TerminalWrapper, actions: Vec<Action>) -> Result<ActionResult, AppError> {
    let mut result = ActionResult::Normal;
    for action in actions {
        match action {
            Action::Quit => result = ActionResult::Quit,
            Action::Resize(x, y) => terminal.resize(x, y)?,
        }
    }

    Ok(result)
}
