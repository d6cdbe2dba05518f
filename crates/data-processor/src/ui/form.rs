use processor_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const PLACEHOLDER: &str = r#"e.g. { "data": ["A", "C", "z"] }"#;

pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    text: &str,
    line_count: usize,
    focused: bool,
) {
    let border = if focused {
        Element::FocusBorder
    } else {
        Element::Border
    };
    let block = Block::new()
        .borders(Borders::ALL)
        .title(" Enter JSON Data ")
        .title_style(theme.style(Element::Title))
        .border_style(theme.style(border))
        .style(theme.style(Element::Text));
    let inner = block.inner(area);

    if text.is_empty() {
        let placeholder = Paragraph::new(PLACEHOLDER)
            .style(theme.style(Element::Placeholder))
            .block(block);
        frame.render_widget(placeholder, area);
        if focused {
            frame.set_cursor(inner.x, inner.y);
        }
        return;
    }

    // Keep the last line in view while typing past the visible rows.
    let visible = usize::from(inner.height);
    let scroll = line_count.saturating_sub(visible);
    let paragraph = Paragraph::new(text)
        .style(theme.style(Element::Text))
        .scroll((clamp_u16(scroll), 0))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && visible > 0 {
        let last = text.rsplit('\n').next().unwrap_or_default();
        let column = last
            .chars()
            .count()
            .min(usize::from(inner.width.saturating_sub(1)));
        let row = line_count
            .saturating_sub(1)
            .saturating_sub(scroll)
            .min(visible - 1);
        frame.set_cursor(inner.x + clamp_u16(column), inner.y + clamp_u16(row));
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

pub fn render_error(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(theme.style(Element::Error))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn render_submit_button(frame: &mut Frame, area: Rect, theme: &Theme, busy: bool) {
    let label = if busy {
        "Processing..."
    } else {
        "Process Data  [Ctrl+S]"
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(theme.style(Element::Chip))
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_style(theme.style(Element::Chip)),
        );
    frame.render_widget(button, area);
}
