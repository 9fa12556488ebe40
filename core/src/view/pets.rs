//! Pet list screen.

use crate::client::PetstoreClient;
use crate::form::{Completion, PetForm, PetFormMode};
use crate::types::{Pet, PetStatus};
use crate::view::collection::LoadState;
use crate::view::request::{Dispatch, Outcome, RequestTracker, Ticket};

pub const FETCH_PETS_FAILED: &str = "Failed to fetch pets";

/// Pets matching the current status filter, plus at most one open overlay.
#[derive(Debug)]
pub struct PetListView {
    client: PetstoreClient,
    filter: Option<PetStatus>,
    state: LoadState<Pet>,
    fetch: RequestTracker,
    overlay: Option<PetForm>,
}

impl PetListView {
    /// Starts unmounted with the `available` filter.
    pub fn new(client: PetstoreClient) -> Self {
        Self {
            client,
            filter: Some(PetStatus::Available),
            state: LoadState::Idle,
            fetch: RequestTracker::default(),
            overlay: None,
        }
    }

    /// Fetch the collection for the current filter.
    pub fn mount(&mut self) -> Dispatch {
        self.state = LoadState::Loading;
        self.fetch.issue(self.client.build_find_pets_by_status(self.filter))
    }

    /// `None` means every status. Only a change of filter triggers a fetch.
    pub fn set_filter(&mut self, filter: Option<PetStatus>) -> Option<Dispatch> {
        if self.filter == filter {
            return None;
        }
        self.filter = filter;
        Some(self.mount())
    }

    pub fn filter(&self) -> Option<PetStatus> {
        self.filter
    }

    pub fn state(&self) -> &LoadState<Pet> {
        &self.state
    }

    pub fn items(&self) -> &[Pet] {
        self.state.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.state.error()
    }

    pub fn overlay(&self) -> Option<&PetForm> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut PetForm> {
        self.overlay.as_mut()
    }

    /// Opens the edit overlay on the listed pet with `id`. Replaces any open overlay.
    pub fn open_edit(&mut self, id: i64) -> Option<Dispatch> {
        let Some(pet) = self.state.find(id) else {
            tracing::warn!(id, "cannot edit pet that is not listed");
            return None;
        };
        let (form, dispatch) = PetForm::edit(self.client.clone(), pet);
        self.replace_overlay(form);
        Some(dispatch)
    }

    pub fn open_add(&mut self) -> Dispatch {
        let (form, dispatch) = PetForm::add(self.client.clone());
        self.replace_overlay(form);
        dispatch
    }

    fn replace_overlay(&mut self, form: PetForm) {
        if let Some(mut previous) = self.overlay.replace(form) {
            previous.retire();
        }
    }

    pub fn close_overlay(&mut self) {
        if let Some(mut form) = self.overlay.take() {
            form.retire();
        }
    }

    pub fn submit_overlay(&mut self) -> Option<Dispatch> {
        self.overlay.as_mut()?.submit()
    }

    /// Offer a finished request to this screen. Returns false if nothing here awaited it.
    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if self.fetch.settle(ticket) {
            self.state = match outcome.and_then(|response| self.client.parse_find_pets_by_status(response)) {
                Ok(pets) => {
                    tracing::debug!(count = pets.len(), filter = ?self.filter, "pets loaded");
                    LoadState::Loaded(pets)
                }
                Err(err) => {
                    tracing::error!(error = %err, "{FETCH_PETS_FAILED}");
                    LoadState::Failed(FETCH_PETS_FAILED)
                }
            };
            return true;
        }

        let Some(form) = self.overlay.as_mut() else {
            return false;
        };
        let mode = form.mode();
        match form.complete(ticket, outcome) {
            Completion::Ignored => false,
            Completion::Applied => true,
            Completion::Saved(pet) => {
                let spliced = match mode {
                    PetFormMode::Edit { .. } => self.state.replace(pet),
                    PetFormMode::Add if self.filter.is_none() || pet.status == self.filter => {
                        self.state.append(pet)
                    }
                    PetFormMode::Add => {
                        tracing::debug!(id = pet.id, filter = ?self.filter, "added pet is outside the current filter");
                        true
                    }
                };
                if !spliced {
                    tracing::warn!(?mode, "saved pet has no place in the current list");
                }
                self.overlay = None;
                true
            }
        }
    }

    /// Forget every in-flight request; used when the screen goes away.
    pub(crate) fn retire(&mut self) {
        self.fetch.retire();
        self.close_overlay();
    }
}
