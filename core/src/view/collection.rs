//! Load state of a fetched collection and the splice operations applied to it.

use crate::types::Identified;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Not mounted yet.
    Idle,
    Loading,
    Loaded(Vec<T>),
    /// Holds the static user-facing message.
    Failed(&'static str),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T: Identified> LoadState<T> {
    /// Visible items. Empty unless loaded.
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Loaded(items) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&'static str> {
        match self {
            LoadState::Failed(message) => Some(*message),
            _ => None,
        }
    }

    pub fn find(&self, id: i64) -> Option<&T> {
        self.items().iter().find(|item| item.id() == id)
    }

    /// Replace the item with the same id in place. Returns false when absent.
    pub(crate) fn replace(&mut self, record: T) -> bool {
        match self {
            LoadState::Loaded(items) => replace_by_id(items, record),
            _ => false,
        }
    }

    /// Append to the end of a loaded list. Returns false when nothing is loaded.
    pub(crate) fn append(&mut self, record: T) -> bool {
        match self {
            LoadState::Loaded(items) => {
                items.push(record);
                true
            }
            _ => false,
        }
    }
}

/// Swap in `record` for the first item sharing its id; order is untouched.
pub fn replace_by_id<T: Identified>(items: &mut [T], record: T) -> bool {
    match items.iter_mut().find(|item| item.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}
