use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{record::InventoryRecord, InventoryList};

mod filter;
mod row;

const TITLE: &str = "Lista de Productos";

pub fn view(list: &InventoryList, products: &[InventoryRecord], frame: &mut Frame, rect: Rect) {
    let rect = if list.show_border {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(rect);

        frame.render_widget(block, rect);

        inner
    } else {
        rect
    };

    let layout = get_layout(rect);

    let title = Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(Line::from(title)), layout[0]);
    frame.render_widget(Paragraph::new(filter::get_line(list)), layout[1]);
    frame.render_widget(Paragraph::new(get_rows(list, products)), layout[2]);
}

/// Number of rows the list area can show inside `rect`.
pub fn get_list_height(show_border: bool, rect: Rect) -> usize {
    let border = if show_border { 2 } else { 0 };
    usize::from(rect.height.saturating_sub(2 + border))
}

fn get_layout(rect: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(rect)
}

fn get_rows<'a>(list: &InventoryList, products: &[InventoryRecord]) -> Vec<Line<'a>> {
    let filtered = list.filtered(products);
    let session = list.session();

    let mut lines = Vec::new();
    for position in list.view_port.visible(filtered.len()) {
        let (index, record) = filtered[position];
        let is_selected = position == list.cursor;

        let line = match session {
            Some(session) if session.index == index => row::get_edit_line(session),
            _ => row::get_display_line(record, is_selected),
        };

        lines.push(line);
    }

    lines
}

#[cfg(test)]
pub(crate) fn to_plain(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
