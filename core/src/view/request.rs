//! Request tickets.
//!
//! A component tags every request it hands to the host with a fresh `Ticket`
//! and remembers the one it is waiting for. When the host reports back, the
//! component applies the outcome only if the ticket still matches. Issuing a
//! new request supersedes the previous one, and retiring a component (closing
//! an overlay, switching screens) drops its ticket, so late responses never
//! touch state that is gone.

use std::fmt;

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// What the host hands back for a dispatched request.
pub type Outcome = Result<HttpResponse, ApiError>;

/// Identifies one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(Uuid);

impl Ticket {
    fn fresh() -> Self {
        Ticket(Uuid::new_v4())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request the host must execute, paired with the ticket to report it under.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// Remembers the single request a component is currently waiting on.
#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
    awaiting: Option<Ticket>,
}

impl RequestTracker {
    pub(crate) fn issue(&mut self, request: HttpRequest) -> Dispatch {
        let ticket = Ticket::fresh();
        if let Some(previous) = self.awaiting.replace(ticket) {
            tracing::debug!(%previous, "superseding in-flight request");
        }
        tracing::debug!(%ticket, method = request.method.as_str(), path = %request.path, "dispatching request");
        Dispatch { ticket, request }
    }

    /// True (and forgets the ticket) when `ticket` is the awaited one.
    pub(crate) fn settle(&mut self, ticket: Ticket) -> bool {
        if self.awaiting == Some(ticket) {
            self.awaiting = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_awaiting(&self) -> bool {
        self.awaiting.is_some()
    }

    pub(crate) fn retire(&mut self) {
        if let Some(ticket) = self.awaiting.take() {
            tracing::debug!(%ticket, "retiring in-flight request");
        }
    }
}
