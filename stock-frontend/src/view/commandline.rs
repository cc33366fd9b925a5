use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use stock_list::model::Mode;

use crate::model::{Model, PrintContent};

pub fn view(model: &Model, frame: &mut Frame) {
    let layout = &model.commandline.layout;

    frame.render_widget(Paragraph::new(get_content(model)), layout.message);
    frame.render_widget(
        Paragraph::new(model.key_sequence.clone()),
        layout.key_sequence,
    );
}

fn get_content(model: &Model) -> Line<'static> {
    match &model.mode {
        Mode::Edit | Mode::Prompt(_) => Line::from(Span::styled(
            format!("-- {} --", model.mode.to_string().to_uppercase()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Mode::Alert | Mode::Navigation => match &model.commandline.content {
            Some(PrintContent::Error(text)) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(Color::Red)))
            }
            Some(PrintContent::Information(text)) => Line::from(text.clone()),
            None => Line::default(),
        },
    }
}
