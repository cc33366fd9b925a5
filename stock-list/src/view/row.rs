use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::model::{
    record::{Category, EquipmentType, InventoryRecord},
    session::{EditField, EditSession},
};

const AMOUNT_PLACEHOLDER: &str = "Cantidad de equipos";

pub fn get_display_line<'a>(record: &InventoryRecord, is_selected: bool) -> Line<'a> {
    let style = if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(record.summary(), style),
        Span::raw("  "),
        button("Editar", Color::Blue),
        Span::raw(" "),
        button("Eliminar", Color::Red),
    ])
}

pub fn get_edit_line<'a>(session: &EditSession) -> Line<'a> {
    let category = match session.category {
        Some(category) => format!("{} ({})", category, category.building()),
        None => Category::PLACEHOLDER.to_string(),
    };

    let equipment = match session.equipment {
        Some(equipment) => equipment.to_string(),
        None => EquipmentType::PLACEHOLDER.to_string(),
    };

    let amount = session.amount_content();
    let amount = if amount.is_empty() {
        AMOUNT_PLACEHOLDER.to_string()
    } else {
        amount
    };

    let status = if session.used { "Usado" } else { "Nuevo" };
    let utility = if session.good { "Bueno" } else { "Malo" };

    let fields = [
        (EditField::Name, format!("[{}]", session.name)),
        (EditField::Category, format!("<{}>", category)),
        (
            EditField::Status,
            format!("{} equipo: {}", checkbox(session.used), status),
        ),
        (EditField::Equipment, format!("<{}>", equipment)),
        (
            EditField::Utility,
            format!("{} Condición: {}", checkbox(session.good), utility),
        ),
        (EditField::Amount, format!("[{}]", amount)),
        (EditField::EntryDate, format!("[{}]", session.entry_date)),
    ];

    let mut spans = Vec::new();
    for (field, content) in fields {
        let style = if field == session.focus {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        spans.push(Span::styled(content, style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw(" "));
    spans.push(button("Guardar", Color::Green));
    spans.push(Span::raw(" "));
    spans.push(button("Cancelar", Color::Yellow));

    Line::from(spans)
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn button<'a>(label: &'static str, color: Color) -> Span<'a> {
    Span::styled(format!("[{}]", label), Style::default().fg(color))
}
