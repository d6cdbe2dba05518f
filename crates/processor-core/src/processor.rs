use crate::client::Invoker;
use crate::state::{Action, Effect, FormState};
use std::sync::Arc;

pub const DEFAULT_TITLE: &str = "Data Processor";

/// Drives a [`FormState`] and owns the display title.
///
/// `dispatch` applies title updates itself and hands back the effects that
/// need outside work; `submit` runs a whole cycle inline.
pub struct Processor {
    state: FormState,
    invoker: Arc<dyn Invoker>,
    title: String,
}

impl Processor {
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self {
            state: FormState::new(),
            invoker,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Shared handle for running requests off the event loop.
    pub fn invoker(&self) -> Arc<dyn Invoker> {
        Arc::clone(&self.invoker)
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let (next, effects) = std::mem::take(&mut self.state).apply(action);
        self.state = next;

        effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::SetTitle(title) => {
                    self.title = title;
                    None
                }
                other => Some(other),
            })
            .collect()
    }

    /// Validate, send and apply the result without yielding to other input.
    pub async fn submit(&mut self) -> &FormState {
        for effect in self.dispatch(Action::Submit) {
            if let Effect::Invoke { token, request } = effect {
                let result = self.invoker.submit(&request).await;
                self.dispatch(Action::InvocationFinished { token, result });
            }
        }
        &self.state
    }
}
