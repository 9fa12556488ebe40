//! Edit/add overlays.
//!
//! An overlay holds a draft, turns a submit into a `Dispatch`, and reports the
//! server's record back through `Completion::Saved` so the owning list can
//! splice it in. Failures stay inside the overlay as a static message.

pub mod category;
pub mod draft;
pub mod pet;
mod submit;

pub use category::{AddCategoryForm, EditCategoryForm};
pub use draft::PetDraft;
pub use pet::{PetForm, PetFormMode};

/// Shown when a submit is attempted with a blank name.
pub const NAME_REQUIRED: &str = "Name is required";

/// Result of offering a completed request to an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<T> {
    /// The ticket does not belong to this overlay (or is stale).
    Ignored,
    /// The overlay consumed the outcome and stays open.
    Applied,
    /// The submit succeeded with the server's record; the overlay is done.
    Saved(T),
}

impl<T> Completion<T> {
    pub(crate) fn map_saved<U>(self, f: impl FnOnce(T) -> U) -> Completion<U> {
        match self {
            Completion::Ignored => Completion::Ignored,
            Completion::Applied => Completion::Applied,
            Completion::Saved(record) => Completion::Saved(f(record)),
        }
    }
}
