use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::{filter::FilterField, model::InventoryList};

const SEARCH_PLACEHOLDER: &str = "Buscar producto...";
const DATE_PLACEHOLDER: &str = "aaaa-mm-dd";

pub fn get_line<'a>(list: &InventoryList) -> Line<'a> {
    let fields = [
        (FilterField::Search, SEARCH_PLACEHOLDER),
        (FilterField::StartDate, DATE_PLACEHOLDER),
        (FilterField::EndDate, DATE_PLACEHOLDER),
    ];

    let mut spans = Vec::new();
    for (field, placeholder) in fields {
        let content = list.filter.get(&field);
        let is_active = list.prompt.as_ref() == Some(&field);

        let mut style = if content.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        if is_active {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let content = if content.is_empty() && !is_active {
            placeholder.to_string()
        } else {
            content.to_string()
        };

        spans.push(Span::styled(format!("[{}]", content), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        "[Limpiar]",
        Style::default().fg(Color::Magenta),
    ));

    Line::from(spans)
}
