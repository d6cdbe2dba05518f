use super::{
    fields::render_field_selector,
    footer::render_footer,
    form::{render_error, render_input, render_submit_button},
    header::render_header,
    output::render_output,
};
use crate::events::{AppEvent, EventHandler, Focus};
use anyhow::Result;
use crossterm::{execute, terminal::SetTitle};
use processor_core::{
    response::ApiResponse,
    selection::{FieldLabel, SelectorValue},
    settings::Settings,
    theme::{Element, Theme},
    Action, Effect, InvocationError, Invoker, Processor, RequestToken,
};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Terminal},
    widgets::{Block, Borders},
};
use std::io::Stdout;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Rows of the input area, excluding its border.
const INPUT_ROWS: u16 = 5;
const FIELD_SELECTOR_HEIGHT: u16 = 6;

/// Result of a request that ran off the event loop.
struct Completion {
    token: RequestToken,
    result: Result<ApiResponse, InvocationError>,
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    processor: Processor,
    focus: Focus,
    field_cursor: usize,
    events: EventHandler,
    shown_title: Option<String>,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl App {
    pub fn new(settings: Settings, invoker: Arc<dyn Invoker>) -> Self {
        let (completions_tx, completions_rx) = unbounded_channel();
        Self {
            should_quit: false,
            theme: Theme::new(settings.theme),
            settings,
            processor: Processor::new(invoker),
            focus: Focus::default(),
            field_cursor: 0,
            events: EventHandler::default(),
            shown_title: None,
            completions_tx,
            completions_rx,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.sync_title(terminal)?;
            self.draw(terminal)?;
            let event = self.events.next_event(self.focus)?;
            self.handle_event(event);
            self.drain_completions();
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    fn sync_title(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let title = self.processor.title();
        if self.shown_title.as_deref() != Some(title) {
            execute!(terminal.backend_mut(), SetTitle(title))?;
            self.shown_title = Some(title.to_string());
        }
        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let state = self.processor.state();
        let error = state.error_message();
        let projection = state.projection();

        terminal.draw(|frame| {
            let area = frame.size();
            frame.render_widget(
                Block::new()
                    .borders(Borders::NONE)
                    .style(self.theme.style(Element::Background)),
                area,
            );

            let app_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            render_header(
                frame,
                app_chunks[0],
                &self.theme,
                self.processor.title(),
                &self.settings.endpoint,
                state.is_busy(),
            );

            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(INPUT_ROWS + 2),
                    Constraint::Length(if error.is_some() { 1 } else { 0 }),
                    Constraint::Length(3),
                    Constraint::Length(if state.selector_visible() {
                        FIELD_SELECTOR_HEIGHT
                    } else {
                        0
                    }),
                    Constraint::Min(0),
                ])
                .split(app_chunks[1]);

            render_input(
                frame,
                body[0],
                &self.theme,
                state.input(),
                state.input_lines(),
                self.focus == Focus::Input,
            );
            if let Some(message) = &error {
                render_error(frame, body[1], &self.theme, message);
            }
            render_submit_button(frame, body[2], &self.theme, state.is_busy());

            if state.selector_visible() {
                render_field_selector(
                    frame,
                    body[3],
                    &self.theme,
                    state.selection(),
                    self.field_cursor,
                    self.focus == Focus::Fields,
                );
            }
            if let Some(projection) = &projection {
                render_output(frame, body[4], &self.theme, projection);
            }

            render_footer(
                frame,
                app_chunks[2],
                &self.theme,
                self.focus,
                state.selector_visible(),
            );
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Submit => {
                let effects = self.processor.dispatch(Action::Submit);
                self.run_effects(effects);
            }
            AppEvent::ToggleTheme => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                if let Err(e) = self.settings.save() {
                    warn!(error = %e, "could not persist theme choice");
                }
            }
            AppEvent::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Input if self.processor.state().selector_visible() => Focus::Fields,
                    _ => Focus::Input,
                };
            }
            AppEvent::Edit(edit) => {
                self.processor.dispatch(Action::Edit(edit));
            }
            AppEvent::CursorUp => {
                self.field_cursor = self.field_cursor.saturating_sub(1);
            }
            AppEvent::CursorDown => {
                let last = FieldLabel::all().count() - 1;
                self.field_cursor = (self.field_cursor + 1).min(last);
            }
            AppEvent::ToggleField => {
                if let Some(label) = FieldLabel::all().nth(self.field_cursor) {
                    self.processor.dispatch(Action::ToggleField(label));
                }
            }
            AppEvent::SelectAllFields => {
                let labels = FieldLabel::all().map(|label| label.to_string()).collect();
                self.processor
                    .dispatch(Action::SelectFields(SelectorValue::Labels(labels)));
            }
            AppEvent::ClearFields => {
                self.processor
                    .dispatch(Action::SelectFields(SelectorValue::Labels(Vec::new())));
            }
            AppEvent::None => {}
        }

        // The selector disappears while a new cycle is pending.
        if !self.processor.state().selector_visible() {
            self.focus = Focus::Input;
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Invoke { token, request } => {
                    let invoker = self.processor.invoker();
                    let tx = self.completions_tx.clone();
                    tokio::spawn(async move {
                        let result = invoker.submit(&request).await;
                        if tx.send(Completion { token, result }).is_err() {
                            debug!(?token, "form closed before request finished");
                        }
                    });
                }
                // Applied by the processor before effects are handed out.
                Effect::SetTitle(_) => {}
            }
        }
    }

    fn drain_completions(&mut self) {
        while let Ok(Completion { token, result }) = self.completions_rx.try_recv() {
            let effects = self
                .processor
                .dispatch(Action::InvocationFinished { token, result });
            self.run_effects(effects);
        }
    }
}
