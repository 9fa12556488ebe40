//! Category list screen.

use crate::client::PetstoreClient;
use crate::form::{AddCategoryForm, Completion, EditCategoryForm};
use crate::types::Category;
use crate::view::collection::LoadState;
use crate::view::request::{Dispatch, Outcome, RequestTracker, Ticket};

pub const FETCH_CATEGORIES_FAILED: &str = "Failed to fetch categories";

/// The overlay currently shown over the category list.
#[derive(Debug)]
pub enum CategoryOverlay {
    Edit(EditCategoryForm),
    Add(AddCategoryForm),
}

impl CategoryOverlay {
    pub fn name(&self) -> &str {
        match self {
            CategoryOverlay::Edit(form) => form.name(),
            CategoryOverlay::Add(form) => form.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            CategoryOverlay::Edit(form) => form.set_name(name),
            CategoryOverlay::Add(form) => form.set_name(name),
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            CategoryOverlay::Edit(form) => form.error(),
            CategoryOverlay::Add(form) => form.error(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            CategoryOverlay::Edit(form) => form.is_submitting(),
            CategoryOverlay::Add(form) => form.is_submitting(),
        }
    }

    pub fn submit(&mut self) -> Option<Dispatch> {
        match self {
            CategoryOverlay::Edit(form) => form.submit(),
            CategoryOverlay::Add(form) => form.submit(),
        }
    }

    fn retire(&mut self) {
        match self {
            CategoryOverlay::Edit(form) => form.retire(),
            CategoryOverlay::Add(form) => form.retire(),
        }
    }
}

#[derive(Debug)]
pub struct CategoryListView {
    client: PetstoreClient,
    state: LoadState<Category>,
    fetch: RequestTracker,
    overlay: Option<CategoryOverlay>,
}

impl CategoryListView {
    pub fn new(client: PetstoreClient) -> Self {
        Self {
            client,
            state: LoadState::Idle,
            fetch: RequestTracker::default(),
            overlay: None,
        }
    }

    pub fn mount(&mut self) -> Dispatch {
        self.state = LoadState::Loading;
        self.fetch.issue(self.client.build_list_categories())
    }

    pub fn state(&self) -> &LoadState<Category> {
        &self.state
    }

    pub fn items(&self) -> &[Category] {
        self.state.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.state.error()
    }

    pub fn overlay(&self) -> Option<&CategoryOverlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut CategoryOverlay> {
        self.overlay.as_mut()
    }

    /// Returns false when no listed category has `id`.
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(category) = self.state.find(id) else {
            tracing::warn!(id, "cannot edit category that is not listed");
            return false;
        };
        let form = EditCategoryForm::new(self.client.clone(), category);
        self.replace_overlay(CategoryOverlay::Edit(form));
        true
    }

    pub fn open_add(&mut self) {
        let form = AddCategoryForm::new(self.client.clone());
        self.replace_overlay(CategoryOverlay::Add(form));
    }

    fn replace_overlay(&mut self, overlay: CategoryOverlay) {
        if let Some(mut previous) = self.overlay.replace(overlay) {
            previous.retire();
        }
    }

    pub fn close_overlay(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.retire();
        }
    }

    pub fn submit_overlay(&mut self) -> Option<Dispatch> {
        self.overlay.as_mut()?.submit()
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if self.fetch.settle(ticket) {
            self.state = match outcome.and_then(|response| self.client.parse_list_categories(response)) {
                Ok(categories) => LoadState::Loaded(categories),
                Err(err) => {
                    tracing::error!(error = %err, "{FETCH_CATEGORIES_FAILED}");
                    LoadState::Failed(FETCH_CATEGORIES_FAILED)
                }
            };
            return true;
        }

        let completion = match self.overlay.as_mut() {
            Some(CategoryOverlay::Edit(form)) => form.complete(ticket, outcome).map_saved(Saved::Edited),
            Some(CategoryOverlay::Add(form)) => form.complete(ticket, outcome).map_saved(Saved::Added),
            None => return false,
        };
        match completion {
            Completion::Ignored => false,
            Completion::Applied => true,
            Completion::Saved(saved) => {
                let spliced = match saved {
                    Saved::Edited(category) => self.state.replace(category),
                    Saved::Added(category) => self.state.append(category),
                };
                if !spliced {
                    tracing::warn!("saved category has no place in the current list");
                }
                self.overlay = None;
                true
            }
        }
    }

    pub(crate) fn retire(&mut self) {
        self.fetch.retire();
        self.close_overlay();
    }
}

enum Saved {
    Edited(Category),
    Added(Category),
}
