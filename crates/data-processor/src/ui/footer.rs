use crate::events::Focus;
use processor_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    focus: Focus,
    selector_visible: bool,
) {
    let hint = theme.style(Element::Hint);
    let key = theme.style(Element::Title);

    let mut spans = match focus {
        Focus::Input => vec![
            Span::styled("[Ctrl+S]", key),
            Span::styled(" Process Data", hint),
            Span::styled(" | ", hint),
            Span::styled("[Ctrl+L]", key),
            Span::styled(" Clear", hint),
        ],
        Focus::Fields => vec![
            Span::styled("[↑↓]", key),
            Span::styled(" Move", hint),
            Span::styled(" | ", hint),
            Span::styled("[Space]", key),
            Span::styled(" Toggle field", hint),
            Span::styled(" | ", hint),
            Span::styled("[A/N]", key),
            Span::styled(" All/None", hint),
        ],
    };
    if selector_visible {
        spans.push(Span::styled(" | ", hint));
        spans.push(Span::styled("[Tab]", key));
        spans.push(Span::styled(" Switch", hint));
    }
    spans.extend([
        Span::styled(" | ", hint),
        Span::styled("[Ctrl+T]", key),
        Span::styled(" Theme", hint),
        Span::styled(" | ", hint),
        Span::styled("[Esc]", key),
        Span::styled(" Quit", hint),
    ]);

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.style(Element::Border))
                .style(theme.style(Element::Hint)),
        );
    frame.render_widget(footer, area);
}
