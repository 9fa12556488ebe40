//! Petstore catalog client core.
//!
//! # Overview
//! A typed client for the pet and category endpoints plus the headless
//! screens of the catalog UI (pet list, category list, their edit/add
//! overlays, and the root toggle between them). Nothing here touches the
//! network: requests are built as data and responses are fed back in by the
//! host (host-does-IO).
//!
//! # Design
//! - `PetstoreClient` is stateless; it holds only the base path.
//! - Each endpoint is a `build_*` / `parse_*` pair so the I/O boundary is explicit.
//! - Screens tag each request with a `Ticket` and only apply outcomes they
//!   still await, so closing an overlay or switching screens discards late
//!   responses instead of mutating retired state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod view;

pub use client::PetstoreClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, ParseStatusError};
pub use form::{AddCategoryForm, Completion, EditCategoryForm, PetDraft, PetForm, PetFormMode};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Category, Identified, NewCategory, NewPet, Pet, PetStatus, Tag};
pub use view::{App, CategoryListView, Dispatch, LoadState, Outcome, PetListView, Screen, Ticket};
