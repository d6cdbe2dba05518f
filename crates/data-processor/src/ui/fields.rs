use processor_core::{
    selection::{FieldLabel, FieldSelection},
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Multi-select over the three fields, chips for the current choice on top.
pub fn render_field_selector(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    selection: &FieldSelection,
    cursor: usize,
    focused: bool,
) {
    let border = if focused {
        Element::FocusBorder
    } else {
        Element::Border
    };
    let block = Block::new()
        .borders(Borders::ALL)
        .title(" Choose Fields ")
        .title_style(theme.style(Element::Title))
        .border_style(theme.style(border))
        .style(theme.style(Element::Text));

    let chips = if selection.is_empty() {
        Line::from(Span::styled("No fields selected", theme.style(Element::Placeholder)))
    } else {
        let mut spans = Vec::new();
        for label in selection.labels() {
            spans.push(Span::styled(format!(" {} ", label), theme.style(Element::Chip)));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    let mut lines = vec![chips];
    for (i, label) in FieldLabel::all().enumerate() {
        let mark = if selection.contains(label) { "[x]" } else { "[ ]" };
        let style = if focused && i == cursor {
            theme.style(Element::Highlight)
        } else {
            theme.style(Element::Text)
        };
        lines.push(Line::from(Span::styled(format!("{} {}", mark, label), style)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
