use processor_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    endpoint: &str,
    busy: bool,
) {
    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(theme.style(Element::Border))
        .title(Title::from(format!(" {} ", title)).alignment(Alignment::Center))
        .title_style(theme.style(Element::Title))
        .style(theme.style(Element::Text));

    let status = if busy {
        Span::styled("Processing...", theme.style(Element::Title))
    } else {
        Span::styled("Ready", theme.style(Element::Placeholder))
    };
    let line = Line::from(vec![
        status,
        Span::styled(" :: ", theme.style(Element::Border)),
        Span::styled(endpoint.to_string(), theme.style(Element::Text)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
