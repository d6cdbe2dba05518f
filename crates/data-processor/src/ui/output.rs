use processor_core::{
    projection::Projection,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Frame, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Read-only panel with the selected fields as indented JSON.
pub fn render_output(frame: &mut Frame, area: Rect, theme: &Theme, projection: &Projection) {
    let block = Block::new()
        .borders(Borders::ALL)
        .title(" API Response ")
        .title_style(theme.style(Element::Title))
        .border_style(theme.style(Element::Border))
        .style(theme.style(Element::Text));

    let paragraph = Paragraph::new(projection.render())
        .style(theme.style(Element::Output))
        .block(block);
    frame.render_widget(paragraph, area);
}
