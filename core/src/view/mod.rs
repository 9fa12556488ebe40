//! Headless screens: list views and the root component.
//!
//! Screens never perform I/O. Every operation that needs the backend returns
//! a `Dispatch`; the host runs the request and reports back with
//! `complete(ticket, outcome)`.

pub mod app;
pub mod categories;
pub mod collection;
pub mod pets;
pub mod request;

pub use app::{ActiveView, App, Screen};
pub use categories::{CategoryListView, CategoryOverlay};
pub use collection::LoadState;
pub use pets::PetListView;
pub use request::{Dispatch, Outcome, Ticket};
