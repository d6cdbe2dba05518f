//! Form state and the transitions of a submit cycle.
//!
//! `FormState` is an immutable value: every change goes through
//! [`FormState::apply`], which returns the next state together with the
//! effects the caller has to carry out (start a request, update the title).
//! A cycle always starts by clearing the previous error and response, so after
//! it ends exactly one of them describes the latest submit.

use crate::client::InvocationError;
use crate::input::{InputCapture, InputEdit};
use crate::projection::{project, Projection};
use crate::response::ApiResponse;
use crate::selection::{FieldLabel, FieldSelection, SelectorValue};
use crate::validator::{validate, ParsedRequest, ValidationError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Identifies one submit; only the latest token's result is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("API Error: {0}")]
    Invocation(#[from] InvocationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Invoking {
        token: RequestToken,
    },
    Succeeded,
    Failed,
    ValidationFailed,
}

#[derive(Debug, Clone)]
pub enum Action {
    Edit(InputEdit),
    Submit,
    InvocationFinished {
        token: RequestToken,
        result: Result<ApiResponse, InvocationError>,
    },
    SelectFields(SelectorValue),
    ToggleField(FieldLabel),
}

/// Work a transition asks the caller to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Invoke {
        token: RequestToken,
        request: ParsedRequest,
    },
    SetTitle(String),
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: InputCapture,
    selection: FieldSelection,
    response: Option<ApiResponse>,
    error: Option<SubmitError>,
    phase: Phase,
    last_token: RequestToken,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, action: Action) -> (Self, Vec<Effect>) {
        match action {
            Action::Edit(edit) => {
                let mut next = self;
                next.input.apply(edit);
                (next, Vec::new())
            }
            Action::Submit => self.submit(),
            Action::InvocationFinished { token, result } => self.finish(token, result),
            Action::SelectFields(value) => {
                let mut next = self;
                next.selection.replace(value);
                debug!(selection = ?next.selection.labels(), "field selection replaced");
                (next, Vec::new())
            }
            Action::ToggleField(label) => {
                let mut next = self;
                next.selection.toggle(label);
                debug!(selection = ?next.selection.labels(), "field selection toggled");
                (next, Vec::new())
            }
        }
    }

    fn submit(self) -> (Self, Vec<Effect>) {
        let mut next = Self {
            response: None,
            error: None,
            phase: Phase::Idle,
            ..self
        };
        // Every submit supersedes in-flight requests, including one that fails validation.
        let token = next.last_token.next();
        next.last_token = token;

        match validate(next.input.text()) {
            Ok(request) => {
                next.phase = Phase::Invoking { token };
                info!(?token, items = request.data().len(), "submitting request");
                (next, vec![Effect::Invoke { token, request }])
            }
            Err(err) => {
                warn!(?token, error = %err, "input rejected before sending");
                next.phase = Phase::ValidationFailed;
                next.error = Some(err.into());
                (next, Vec::new())
            }
        }
    }

    fn finish(
        self,
        token: RequestToken,
        result: Result<ApiResponse, InvocationError>,
    ) -> (Self, Vec<Effect>) {
        if token != self.last_token {
            warn!(?token, latest = ?self.last_token, "dropping result of superseded request");
            return (self, Vec::new());
        }

        let mut next = self;
        match result {
            Ok(response) => {
                info!(?token, "request succeeded");
                let effects = response
                    .roll_number()
                    .map(|roll| vec![Effect::SetTitle(roll.to_string())])
                    .unwrap_or_default();
                next.phase = Phase::Succeeded;
                next.response = Some(response);
                (next, effects)
            }
            Err(err) => {
                warn!(?token, error = %err, "request failed");
                next.phase = Phase::Failed;
                next.error = Some(err.into());
                (next, Vec::new())
            }
        }
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn input_lines(&self) -> usize {
        self.input.line_count()
    }

    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    pub fn response(&self) -> Option<&ApiResponse> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&SubmitError> {
        self.error.as_ref()
    }

    /// Text for the error line, if there is one to show.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Invoking { .. })
    }

    /// The field selector only appears once a response is available.
    pub fn selector_visible(&self) -> bool {
        self.response.is_some()
    }

    pub fn projection(&self) -> Option<Projection> {
        self.response
            .as_ref()
            .map(|response| project(response, &self.selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn typed(text: &str) -> FormState {
        FormState::new()
            .apply(Action::Edit(InputEdit::Replace(text.to_string())))
            .0
    }

    fn invoke_token(effects: &[Effect]) -> RequestToken {
        match effects {
            [Effect::Invoke { token, .. }] => *token,
            other => panic!("expected a single invoke effect, got {other:?}"),
        }
    }

    fn sample_response() -> ApiResponse {
        ApiResponse::try_from(json!({
            "roll_number": "X1",
            "numbers": [],
            "alphabets": ["A", "C", "z"],
            "highest_alphabet": ["z"]
        }))
        .unwrap()
    }

    #[test]
    fn test_validation_failure_emits_no_invoke() {
        let (state, effects) = typed("not json").apply(Action::Submit);
        assert!(effects.is_empty());
        assert_eq!(state.phase(), Phase::ValidationFailed);
        assert_eq!(
            state.error_message().as_deref(),
            Some("The provided input is not valid JSON.")
        );

        let (state, effects) = typed(r#"{"foo": 1}"#).apply(Action::Submit);
        assert!(effects.is_empty());
        assert_eq!(
            state.error_message().as_deref(),
            Some("The JSON should include a 'data' array.")
        );
    }

    #[test]
    fn test_valid_input_invokes_with_parsed_body() {
        let (state, effects) = typed(r#"{"data": ["A","C","z"], "k": 1}"#).apply(Action::Submit);
        assert!(state.is_busy());
        assert!(state.error().is_none());
        match &effects[..] {
            [Effect::Invoke { request, .. }] => {
                assert_eq!(request.body(), &json!({"data": ["A", "C", "z"], "k": 1}));
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn test_success_stores_response_and_sets_title() {
        let (state, effects) = typed(r#"{"data": ["A"]}"#).apply(Action::Submit);
        let token = invoke_token(&effects);

        let (state, effects) = state.apply(Action::InvocationFinished {
            token,
            result: Ok(sample_response()),
        });
        assert_eq!(state.phase(), Phase::Succeeded);
        assert!(state.selector_visible());
        assert_eq!(effects, vec![Effect::SetTitle("X1".to_string())]);
    }

    #[test]
    fn test_success_without_roll_number_keeps_title() {
        let (state, effects) = typed(r#"{"data": []}"#).apply(Action::Submit);
        let token = invoke_token(&effects);
        let response = ApiResponse::try_from(json!({"numbers": ["1"]})).unwrap();

        let (_, effects) = state.apply(Action::InvocationFinished {
            token,
            result: Ok(response),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_invocation_error_is_prefixed() {
        let (state, effects) = typed(r#"{"data": []}"#).apply(Action::Submit);
        let token = invoke_token(&effects);

        let (state, _) = state.apply(Action::InvocationFinished {
            token,
            result: Err(InvocationError::Network("timeout".to_string())),
        });
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.error_message().as_deref(), Some("API Error: timeout"));
        assert!(state.response().is_none());
        assert!(!state.selector_visible());
    }

    #[test]
    fn test_submit_clears_previous_outcome() {
        let (state, effects) = typed(r#"{"data": []}"#).apply(Action::Submit);
        let token = invoke_token(&effects);
        let (state, _) = state.apply(Action::InvocationFinished {
            token,
            result: Ok(sample_response()),
        });
        assert!(state.response().is_some());

        // A failing submit must not leave the earlier response around.
        let (state, _) = state.apply(Action::Edit(InputEdit::Replace("oops".to_string())));
        let (state, _) = state.apply(Action::Submit);
        assert!(state.response().is_none());
        assert!(state.error().is_some());

        // And a valid one clears the error before the result is known.
        let (state, _) = state.apply(Action::Edit(InputEdit::Replace(r#"{"data":[1]}"#.to_string())));
        let (state, _) = state.apply(Action::Submit);
        assert!(state.error().is_none());
        assert!(state.response().is_none());
        assert!(state.is_busy());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let (state, effects) = typed(r#"{"data": []}"#).apply(Action::Submit);
        let first = invoke_token(&effects);
        let (state, effects) = state.apply(Action::Submit);
        let second = invoke_token(&effects);
        assert!(second > first);

        let (state, effects) = state.apply(Action::InvocationFinished {
            token: second,
            result: Err(InvocationError::HttpStatus { code: 502 }),
        });
        assert!(effects.is_empty());

        let (state, effects) = state.apply(Action::InvocationFinished {
            token: first,
            result: Ok(sample_response()),
        });
        assert!(effects.is_empty());
        assert!(state.response().is_none());
        assert_eq!(
            state.error_message().as_deref(),
            Some("API Error: Request failed with status code 502")
        );
    }

    #[test]
    fn test_validation_failure_supersedes_pending_request() {
        let (state, effects) = typed(r#"{"data": []}"#).apply(Action::Submit);
        let first = invoke_token(&effects);
        let (state, _) = state.apply(Action::Edit(InputEdit::Replace("not json".to_string())));
        let (state, effects) = state.apply(Action::Submit);
        assert!(effects.is_empty());
        assert!(!state.is_busy());

        let old = ApiResponse::try_from(json!({"roll_number": "OLD", "numbers": ["1"]})).unwrap();
        let (state, effects) = state.apply(Action::InvocationFinished {
            token: first,
            result: Ok(old),
        });
        assert!(effects.is_empty());
        assert!(state.response().is_none());
        assert_eq!(state.phase(), Phase::ValidationFailed);
        assert_eq!(
            state.error_message().as_deref(),
            Some("The provided input is not valid JSON.")
        );
    }

    #[test]
    fn test_stale_failure_keeps_validation_error() {
        let (state, effects) = typed(r#"{"data": [1]}"#).apply(Action::Submit);
        let first = invoke_token(&effects);
        let (state, _) = state.apply(Action::Edit(InputEdit::Replace(r#"{"foo": 1}"#.to_string())));
        let (state, _) = state.apply(Action::Submit);

        let (state, effects) = state.apply(Action::InvocationFinished {
            token: first,
            result: Err(InvocationError::HttpStatus { code: 500 }),
        });
        assert!(effects.is_empty());
        assert_eq!(state.phase(), Phase::ValidationFailed);
        assert_eq!(
            state.error_message().as_deref(),
            Some("The JSON should include a 'data' array.")
        );
    }

    #[test]
    fn test_selection_survives_new_responses() {
        let state = typed(r#"{"data": []}"#);
        let (state, _) = state.apply(Action::SelectFields(SelectorValue::Labels(vec![
            "Numbers".to_string(),
        ])));
        let (state, effects) = state.apply(Action::Submit);
        let token = invoke_token(&effects);
        let (state, _) = state.apply(Action::InvocationFinished {
            token,
            result: Ok(sample_response()),
        });

        assert!(state.selection().contains(FieldLabel::Numbers));
        let projection = state.projection().unwrap();
        assert_eq!(projection.keys().collect::<Vec<_>>(), ["numbers"]);

        let (state, _) = state.apply(Action::ToggleField(FieldLabel::Numbers));
        assert!(state.projection().unwrap().is_empty());
    }

    #[test]
    fn test_no_projection_without_response() {
        let state = FormState::new();
        assert!(state.projection().is_none());
        assert!(!state.selector_visible());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.input_lines(), 1);
    }

    #[test]
    fn test_select_all_then_clear() {
        let (state, effects) = typed(r#"{"data": []}"#).apply(Action::Submit);
        let token = invoke_token(&effects);
        let (state, _) = state.apply(Action::InvocationFinished {
            token,
            result: Ok(sample_response()),
        });

        let all = FieldLabel::all().map(|l| l.to_string()).collect();
        let (state, _) = state.apply(Action::SelectFields(SelectorValue::Labels(all)));
        assert_eq!(
            state.projection().unwrap().keys().collect::<Vec<_>>(),
            ["numbers", "alphabets", "highest_alphabet"]
        );

        let (state, _) = state.apply(Action::SelectFields(SelectorValue::Labels(Vec::new())));
        assert!(state.selection().is_empty());
        assert!(state.projection().unwrap().is_empty());
    }
}
