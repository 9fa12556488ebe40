//! Category overlays. Both hold only a name.

use crate::client::PetstoreClient;
use crate::form::submit::SubmitState;
use crate::form::{Completion, NAME_REQUIRED};
use crate::types::{Category, NewCategory};
use crate::view::request::{Dispatch, Outcome, Ticket};

pub const UPDATE_CATEGORY_FAILED: &str = "Failed to update category";
pub const ADD_CATEGORY_FAILED: &str = "Failed to add category";

/// Renames an existing category.
#[derive(Debug)]
pub struct EditCategoryForm {
    client: PetstoreClient,
    original: Category,
    name: String,
    submit: SubmitState,
}

impl EditCategoryForm {
    pub fn new(client: PetstoreClient, category: &Category) -> Self {
        Self {
            client,
            original: category.clone(),
            name: category.name.clone(),
            submit: SubmitState::default(),
        }
    }

    pub fn category_id(&self) -> i64 {
        self.original.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_submitting()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.submit.error()
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        if self.name.trim().is_empty() {
            self.submit.reject(NAME_REQUIRED);
            return None;
        }
        let updated = Category {
            id: self.original.id,
            name: self.name.clone(),
        };
        let request = self.client.build_update_category(&updated);
        self.submit.begin(request, UPDATE_CATEGORY_FAILED)
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> Completion<Category> {
        if !self.submit.settle(ticket) {
            return Completion::Ignored;
        }
        match outcome.and_then(|response| self.client.parse_update_category(response)) {
            Ok(category) => Completion::Saved(category),
            Err(err) => {
                self.submit.fail(UPDATE_CATEGORY_FAILED, &err);
                Completion::Applied
            }
        }
    }

    pub(crate) fn retire(&mut self) {
        self.submit.retire();
    }
}

/// Creates a new category.
#[derive(Debug)]
pub struct AddCategoryForm {
    client: PetstoreClient,
    name: String,
    submit: SubmitState,
}

impl AddCategoryForm {
    pub fn new(client: PetstoreClient) -> Self {
        Self {
            client,
            name: String::new(),
            submit: SubmitState::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_submitting()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.submit.error()
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        if self.name.trim().is_empty() {
            self.submit.reject(NAME_REQUIRED);
            return None;
        }
        let request = self.client.build_add_category(&NewCategory {
            name: self.name.clone(),
        });
        self.submit.begin(request, ADD_CATEGORY_FAILED)
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> Completion<Category> {
        if !self.submit.settle(ticket) {
            return Completion::Ignored;
        }
        match outcome.and_then(|response| self.client.parse_add_category(response)) {
            Ok(category) => Completion::Saved(category),
            Err(err) => {
                self.submit.fail(ADD_CATEGORY_FAILED, &err);
                Completion::Applied
            }
        }
    }

    pub(crate) fn retire(&mut self) {
        self.submit.retire();
    }
}
