use ratatui::{
    prelude::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DISMISS: &str = "[Aceptar]";

/// Blocking message box centered over `rect`.
pub fn view(text: &str, frame: &mut Frame, rect: Rect) {
    let area = get_area(text, rect);

    let content = vec![
        Line::from(text.to_string()),
        Line::default(),
        Line::from(Span::styled(
            DISMISS,
            Style::default().add_modifier(Modifier::REVERSED),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn get_area(text: &str, rect: Rect) -> Rect {
    let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(4).min(rect.width);
    let height = 5_u16.min(rect.height);

    Rect::new(
        rect.x + (rect.width - width) / 2,
        rect.y + (rect.height - height) / 2,
        width,
        height,
    )
}
