//! Submitting the selection to the backend and applying the outcome

use chrono::Local;
use cli_log::*;
use std::sync::{Arc, TryLockError};
use std::time::Instant;

use crate::config::EMPTY_SELECTION_MESSAGE;
use crate::data::{ResultState, parse_result};
use crate::error::{ApiError, SubmitError};
use crate::html::{render_error_html, render_state_html};
use super::core::App;
use super::types::Mode;

/// Snapshot of what was sent, taken when the submit starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: Mode,
    pub coins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub request: SubmitRequest,
    pub result: Result<serde_json::Value, ApiError>,
}

impl App {
    /// Validates and marks a request as in flight. No network call is made here.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitError> {
        if self.busy {
            warn!("Submit ignored, a request is already in flight");
            return Err(SubmitError::Busy);
        }
        if self.selection.is_empty() {
            self.error_message = Some(EMPTY_SELECTION_MESSAGE.to_string());
            self.needs_redraw = true;
            return Err(SubmitError::EmptySelection);
        }

        let request = SubmitRequest {
            mode: self.mode,
            coins: self.selection.ids().to_vec(),
        };
        info!("Submitting {} coin(s) to {}", request.coins.len(), request.mode.endpoint());

        self.error_message = None;
        self.busy = true;
        self.results = ResultState::Loading { since: Instant::now() };
        self.needs_redraw = true;
        Ok(request)
    }

    /// Applies a finished request to the result area and clears the busy flag.
    /// Rendering follows the mode the request was sent with.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Result<(), SubmitError> {
        self.busy = false;
        self.needs_redraw = true;

        let parsed = outcome
            .result
            .map_err(SubmitError::from)
            .and_then(|body| parse_result(outcome.request.mode, body));

        match parsed {
            Ok(view) => {
                info!("Received {} result", outcome.request.mode);
                self.results = ResultState::Ready { view, received_at: Local::now() };
                Ok(())
            }
            Err(e) => {
                warn!("Submit failed: {e}");
                self.results = ResultState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Runs one submit to completion on the current task.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let request = self.begin_submit()?;
        let api = Arc::clone(&self.api);
        let result = api.post_coins(request.mode, &request.coins).await;
        self.finish_submit(SubmitOutcome { request, result })
    }

    /// Runs one submit and renders the outcome as HTML. Both branches carry
    /// the fragment to print; `Err` marks a failed submit.
    pub async fn submit_html(&mut self) -> Result<String, String> {
        match self.submit().await {
            Ok(()) => Ok(render_state_html(&self.results)),
            Err(e) => Err(render_error_html(&e.to_string())),
        }
    }

    /// Starts a submit in the background; the outcome is picked up by
    /// `process_submit_outcomes` on a later tick.
    pub fn spawn_submit(&mut self) {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(e) => {
                debug!("Submit rejected: {e}");
                return;
            }
        };

        let api = Arc::clone(&self.api);
        let outcomes = Arc::clone(&self.pending_outcomes);
        tokio::spawn(async move {
            let result = api.post_coins(request.mode, &request.coins).await;
            let outcome = SubmitOutcome { request, result };
            match outcomes.lock() {
                Ok(mut guard) => guard.push(outcome),
                Err(poisoned) => {
                    warn!("Submit outcome buffer was poisoned, recovering");
                    poisoned.into_inner().push(outcome);
                }
            }
        });
    }

    pub fn process_submit_outcomes(&mut self) {
        let outcomes = match self.pending_outcomes.try_lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(TryLockError::WouldBlock) => return,
            Err(TryLockError::Poisoned(poisoned)) => {
                warn!("Submit outcome buffer was poisoned, recovering");
                std::mem::take(&mut *poisoned.into_inner())
            }
        };

        for outcome in outcomes {
            // Already logged and shown in the result area
            let _ = self.finish_submit(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::tests::{FakeApi, app_with};
    use crate::data::ResultView;
    use serde_json::json;

    fn analysis_body() -> serde_json::Value {
        json!({
            "analysis": [{
                "coin": "Bitcoin",
                "sentiment": "bullish",
                "summary": "Momentum is strong",
                "key_factors": [{"factor": "Halving", "impact": "Supply shock"}],
                "insights": [{"prediction": "Higher highs", "confidence": 80}]
            }]
        })
    }

    #[tokio::test]
    async fn empty_selection_never_calls_backend() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);

        let err = app.submit().await.unwrap_err();
        assert_eq!(err, SubmitError::EmptySelection);
        assert_eq!(api.call_count(), 0);
        assert_eq!(app.error_message.as_deref(), Some("Please select at least one cryptocurrency"));
        assert!(!app.busy);
        assert!(matches!(app.results, ResultState::Empty));
    }

    #[tokio::test]
    async fn submit_posts_selection_to_mode_endpoint() {
        let api = FakeApi::new(Ok(json!({
            "comparison": {"winner": "Ethereum", "summary": "s", "reasons": ["a", "b"]}
        })));
        let mut app = app_with(&api);
        app.toggle_coin("solana");
        app.toggle_coin("ethereum");
        app.set_mode(Mode::Compare);

        app.submit().await.unwrap();

        assert_eq!(api.call_count(), 1);
        let last = api.last_call.lock().unwrap().clone();
        assert_eq!(last, Some((Mode::Compare, vec!["solana".to_string(), "ethereum".to_string()])));
        assert!(!app.busy);
        match &app.results {
            ResultState::Ready { view: ResultView::Comparison(c), .. } => assert_eq!(c.winner, "Ethereum"),
            other => panic!("unexpected result state {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_submit_clears_previous_validation_error() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);
        let _ = app.submit().await;
        assert!(app.error_message.is_some());

        app.toggle_coin("bitcoin");
        app.submit().await.unwrap();
        assert!(app.error_message.is_none());
    }

    #[tokio::test]
    async fn status_error_replaces_results() {
        let api = FakeApi::new(Err(ApiError::Status(500)));
        let mut app = app_with(&api);
        app.toggle_coin("bitcoin");

        let err = app.submit().await.unwrap_err();
        assert_eq!(err, SubmitError::Request(ApiError::Status(500)));
        match &app.results {
            ResultState::Failed(message) => assert_eq!(message, "Request failed"),
            other => panic!("unexpected result state {other:?}"),
        }
        assert!(!app.busy);
    }

    #[tokio::test]
    async fn mismatched_response_is_reported_not_ignored() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);
        app.toggle_coin("bitcoin");
        app.set_mode(Mode::Compare);

        let err = app.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
        match &app.results {
            ResultState::Failed(message) => assert!(message.starts_with("Malformed response")),
            other => panic!("unexpected result state {other:?}"),
        }
    }

    #[test]
    fn overlapping_submit_is_rejected_while_busy() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);
        app.toggle_coin("bitcoin");

        let request = app.begin_submit().unwrap();
        assert!(app.busy);
        assert!(app.results.is_loading());
        assert_eq!(app.begin_submit(), Err(SubmitError::Busy));

        app.finish_submit(SubmitOutcome { request, result: Ok(analysis_body()) }).unwrap();
        assert!(!app.busy);
        assert!(app.begin_submit().is_ok());
    }

    #[test]
    fn result_uses_mode_at_submit_time() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);
        app.toggle_coin("bitcoin");

        let request = app.begin_submit().unwrap();
        app.set_mode(Mode::Compare);
        app.finish_submit(SubmitOutcome { request, result: Ok(analysis_body()) }).unwrap();

        assert!(matches!(
            app.results,
            ResultState::Ready { view: ResultView::Analysis(_), .. }
        ));
    }

    #[test]
    fn poisoned_outcome_buffer_still_clears_busy() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);
        app.toggle_coin("bitcoin");
        let request = app.begin_submit().unwrap();

        let buffer = Arc::clone(&app.pending_outcomes);
        let worker = std::thread::spawn(move || {
            let mut guard = buffer.lock().unwrap();
            guard.push(SubmitOutcome { request, result: Ok(analysis_body()) });
            panic!("worker died while holding the outcome buffer");
        });
        assert!(worker.join().is_err());
        assert!(app.pending_outcomes.is_poisoned());

        app.update();
        assert!(!app.busy);
        assert!(matches!(
            app.results,
            ResultState::Ready { view: ResultView::Analysis(_), .. }
        ));
    }

    #[tokio::test]
    async fn submit_html_returns_result_fragment() {
        let api = FakeApi::new(Ok(json!({
            "comparison": {"winner": "Cardano", "summary": "s", "reasons": ["Research"]}
        })));
        let mut app = app_with(&api);
        app.toggle_coin("cardano");
        app.toggle_coin("polkadot");
        app.set_mode(Mode::Compare);

        let html = app.submit_html().await.expect("comparison renders");
        assert!(html.contains("<h2>🏆 Winner: Cardano</h2>"));
        assert!(html.contains("<div>1. Research</div>"));
    }

    #[tokio::test]
    async fn submit_html_renders_errors_as_error_fragment() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);

        let html = app.submit_html().await.unwrap_err();
        assert_eq!(
            html,
            "<p class=\"error\" style=\"color:#f87171\">Please select at least one cryptocurrency</p>"
        );
        assert_eq!(api.call_count(), 0);

        let api = FakeApi::new(Err(ApiError::Status(502)));
        let mut app = app_with(&api);
        app.toggle_coin("bitcoin");
        let html = app.submit_html().await.unwrap_err();
        assert!(html.contains(">Request failed</p>"));
    }

    #[tokio::test]
    async fn spawned_submit_is_applied_on_update() {
        let api = FakeApi::new(Ok(analysis_body()));
        let mut app = app_with(&api);
        app.toggle_coin("bitcoin");

        app.spawn_submit();
        assert!(app.busy);

        for _ in 0..100 {
            tokio::task::yield_now().await;
            app.update();
            if !app.busy {
                break;
            }
        }

        assert!(!app.busy);
        assert_eq!(api.call_count(), 1);
        assert!(matches!(
            app.results,
            ResultState::Ready { view: ResultView::Analysis(_), .. }
        ));
    }
}
