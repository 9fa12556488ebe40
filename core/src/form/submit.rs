use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::view::request::{Dispatch, RequestTracker, Ticket};

/// Submission bookkeeping shared by every overlay: the in-flight submit and
/// the inline error shown while the overlay stays open.
#[derive(Debug, Default)]
pub(crate) struct SubmitState {
    tracker: RequestTracker,
    error: Option<&'static str>,
}

impl SubmitState {
    /// Clears the previous error and dispatches. Refuses while a submit is pending.
    pub(crate) fn begin(&mut self, request: Result<HttpRequest, ApiError>, failure: &'static str) -> Option<Dispatch> {
        if self.tracker.is_awaiting() {
            tracing::warn!("submit ignored, previous submit still in flight");
            return None;
        }
        self.error = None;
        match request {
            Ok(request) => Some(self.tracker.issue(request)),
            Err(err) => {
                self.fail(failure, &err);
                None
            }
        }
    }

    pub(crate) fn settle(&mut self, ticket: Ticket) -> bool {
        self.tracker.settle(ticket)
    }

    pub(crate) fn fail(&mut self, message: &'static str, err: &ApiError) {
        tracing::error!(error = %err, "{message}");
        self.error = Some(message);
    }

    pub(crate) fn reject(&mut self, message: &'static str) {
        tracing::warn!("{message}");
        self.error = Some(message);
    }

    pub(crate) fn retire(&mut self) {
        self.tracker.retire();
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.tracker.is_awaiting()
    }

    pub(crate) fn error(&self) -> Option<&'static str> {
        self.error
    }
}
