use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use stock_list::Inventory;

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let mode = get_mode_content(model);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(mode.width() as u16),
            Constraint::Min(0),
            Constraint::Length(position.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(mode), layout[0]);
    frame.render_widget(Paragraph::new(position), layout[2]);
}

fn get_mode_content(model: &Model) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", model.mode),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    ))
}

fn get_position_content(model: &Model) -> Line<'static> {
    let products = model.inventory.products();
    let count = model.list.filtered(products).len();

    let position = if count == 0 { 0 } else { model.list.cursor + 1 };

    let mut content = vec![Span::styled(
        format!("{}/{}", position, count),
        Style::default().fg(Color::Gray),
    )];

    if count != products.len() {
        content.push(Span::styled(
            format!(" ({})", products.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    content.push(Span::raw(" "));

    Line::from(content)
}
