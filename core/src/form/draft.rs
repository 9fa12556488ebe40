//! Editable copy of a pet record.

use crate::form::NAME_REQUIRED;
use crate::types::{Category, NewPet, Pet, PetStatus, Tag};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetDraft {
    name: String,
    photo_urls: Vec<String>,
    category: Option<Category>,
    tags: Option<Vec<Tag>>,
    status: Option<PetStatus>,
    staged_photo_url: String,
}

impl PetDraft {
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            photo_urls: pet.photo_urls.clone(),
            category: pet.category.clone(),
            tags: pet.tags.clone(),
            status: pet.status,
            staged_photo_url: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn status(&self) -> Option<PetStatus> {
        self.status
    }

    pub fn set_status(&mut self, status: Option<PetStatus>) {
        self.status = status;
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Picks the category with `id` out of `options`; `None` or an id not in
    /// `options` clears the selection.
    pub fn select_category(&mut self, options: &[Category], id: Option<i64>) {
        self.category = id.and_then(|id| options.iter().find(|c| c.id == id).cloned());
    }

    pub fn photo_urls(&self) -> &[String] {
        &self.photo_urls
    }

    /// Overwrite the URL at `index`. Returns false when out of range.
    pub fn set_photo_url(&mut self, index: usize, url: impl Into<String>) -> bool {
        match self.photo_urls.get_mut(index) {
            Some(slot) => {
                *slot = url.into();
                true
            }
            None => false,
        }
    }

    /// Remove the URL at `index`, keeping the others in order.
    pub fn remove_photo_url(&mut self, index: usize) -> Option<String> {
        (index < self.photo_urls.len()).then(|| self.photo_urls.remove(index))
    }

    pub fn staged_photo_url(&self) -> &str {
        &self.staged_photo_url
    }

    pub fn stage_photo_url(&mut self, url: impl Into<String>) {
        self.staged_photo_url = url.into();
    }

    /// Move the staged URL onto the list. Blank input is ignored and kept staged.
    pub fn add_staged_photo_url(&mut self) -> bool {
        if self.staged_photo_url.trim().is_empty() {
            return false;
        }
        let url = std::mem::take(&mut self.staged_photo_url);
        self.photo_urls.push(url);
        true
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err(NAME_REQUIRED);
        }
        Ok(())
    }

    pub fn to_pet(&self, id: i64) -> Pet {
        Pet {
            id,
            name: self.name.clone(),
            photo_urls: self.photo_urls.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            status: self.status,
        }
    }

    pub fn to_new_pet(&self) -> NewPet {
        NewPet {
            name: self.name.clone(),
            photo_urls: self.photo_urls.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            status: self.status,
        }
    }
}
