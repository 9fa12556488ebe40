//! Pet overlay: edit an existing pet or add a new one.

use crate::client::PetstoreClient;
use crate::form::draft::PetDraft;
use crate::form::submit::SubmitState;
use crate::form::Completion;
use crate::types::{Category, Pet};
use crate::view::request::{Dispatch, Outcome, RequestTracker, Ticket};

pub const UPDATE_PET_FAILED: &str = "Failed to update pet";
pub const ADD_PET_FAILED: &str = "Failed to add pet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetFormMode {
    /// Full-record replace of the pet with this id.
    Edit { id: i64 },
    Add,
}

/// Draft plus the category options offered by the category selector.
#[derive(Debug)]
pub struct PetForm {
    client: PetstoreClient,
    mode: PetFormMode,
    draft: PetDraft,
    categories: Vec<Category>,
    categories_fetch: RequestTracker,
    submit: SubmitState,
}

impl PetForm {
    /// Opens on a copy of `pet`. The returned dispatch loads category options.
    pub fn edit(client: PetstoreClient, pet: &Pet) -> (Self, Dispatch) {
        Self::open(client, PetFormMode::Edit { id: pet.id }, PetDraft::from_pet(pet))
    }

    pub fn add(client: PetstoreClient) -> (Self, Dispatch) {
        Self::open(client, PetFormMode::Add, PetDraft::default())
    }

    fn open(client: PetstoreClient, mode: PetFormMode, draft: PetDraft) -> (Self, Dispatch) {
        let mut categories_fetch = RequestTracker::default();
        let dispatch = categories_fetch.issue(client.build_list_categories());
        let form = Self {
            client,
            mode,
            draft,
            categories: Vec::new(),
            categories_fetch,
            submit: SubmitState::default(),
        };
        (form, dispatch)
    }

    pub fn mode(&self) -> PetFormMode {
        self.mode
    }

    pub fn draft(&self) -> &PetDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PetDraft {
        &mut self.draft
    }

    /// Options for the category selector; empty until loaded or if loading failed.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn select_category(&mut self, id: Option<i64>) {
        self.draft.select_category(&self.categories, id);
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_submitting()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.submit.error()
    }

    fn failure_message(&self) -> &'static str {
        match self.mode {
            PetFormMode::Edit { .. } => UPDATE_PET_FAILED,
            PetFormMode::Add => ADD_PET_FAILED,
        }
    }

    /// Validates the draft and dispatches it. `None` when blocked.
    pub fn submit(&mut self) -> Option<Dispatch> {
        if let Err(message) = self.draft.validate() {
            self.submit.reject(message);
            return None;
        }
        let request = match self.mode {
            PetFormMode::Edit { id } => self.client.build_update_pet(&self.draft.to_pet(id)),
            PetFormMode::Add => self.client.build_add_pet(&self.draft.to_new_pet()),
        };
        let failure = self.failure_message();
        self.submit.begin(request, failure)
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> Completion<Pet> {
        if self.categories_fetch.settle(ticket) {
            match outcome.and_then(|response| self.client.parse_list_categories(response)) {
                Ok(categories) => self.categories = categories,
                Err(err) => tracing::error!(error = %err, "Failed to fetch categories"),
            }
            return Completion::Applied;
        }

        if !self.submit.settle(ticket) {
            return Completion::Ignored;
        }
        let parsed = outcome.and_then(|response| match self.mode {
            PetFormMode::Edit { .. } => self.client.parse_update_pet(response),
            PetFormMode::Add => self.client.parse_add_pet(response),
        });
        match parsed {
            Ok(pet) => Completion::Saved(pet),
            Err(err) => {
                let failure = self.failure_message();
                self.submit.fail(failure, &err);
                Completion::Applied
            }
        }
    }

    /// Drops any in-flight request so its response is ignored.
    pub(crate) fn retire(&mut self) {
        self.categories_fetch.retire();
        self.submit.retire();
    }
}
