//! Drives the root `App` from parsed commands, running every dispatch
//! through a `Transport` before returning.

use petstore_core::{App, Dispatch, PetstoreClient};
use thiserror::Error;

use crate::command::Command;
use crate::transport::Transport;

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("`{0}` only works on the pets screen")]
    PetsOnly(&'static str),

    #[error("no overlay is open; use `edit <id>` or `add`")]
    NoOverlay,

    #[error("nothing listed with id {0}")]
    UnknownId(i64),

    #[error("no category option with id {0}")]
    UnknownCategory(i64),

    #[error("no photo at index {0}")]
    PhotoIndex(usize),

    #[error("photo URL must not be blank")]
    BlankPhotoUrl,
}

pub struct Shell<T> {
    app: App,
    transport: T,
}

impl<T: Transport> Shell<T> {
    /// Mount the root screen and run its initial fetch.
    pub fn start(client: PetstoreClient, transport: T) -> Self {
        let (app, dispatch) = App::new(client);
        let mut shell = Self { app, transport };
        shell.run(dispatch);
        shell
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    fn run(&mut self, dispatch: Dispatch) {
        let outcome = self.transport.execute(dispatch.request);
        self.app.complete(dispatch.ticket, outcome);
    }

    fn run_opt(&mut self, dispatch: Option<Dispatch>) {
        if let Some(dispatch) = dispatch {
            self.run(dispatch);
        }
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::Show(screen) => {
                let dispatch = self.app.show(screen);
                self.run_opt(dispatch);
            }
            Command::Filter(filter) => {
                let view = self.app.pets_mut().ok_or(ShellError::PetsOnly("status"))?;
                let dispatch = view.set_filter(filter);
                self.run_opt(dispatch);
            }
            Command::Edit(id) => self.open_edit(id)?,
            Command::Add => {
                if let Some(view) = self.app.pets_mut() {
                    let dispatch = view.open_add();
                    self.run(dispatch);
                } else if let Some(view) = self.app.categories_mut() {
                    view.open_add();
                }
            }
            Command::SetName(name) => {
                if let Some(view) = self.app.pets_mut() {
                    let form = view.overlay_mut().ok_or(ShellError::NoOverlay)?;
                    form.draft_mut().set_name(name);
                } else if let Some(view) = self.app.categories_mut() {
                    let overlay = view.overlay_mut().ok_or(ShellError::NoOverlay)?;
                    overlay.set_name(name);
                }
            }
            Command::SetStatus(status) => {
                self.pet_form("set status")?.draft_mut().set_status(status);
            }
            Command::SetCategory(id) => {
                let form = self.pet_form("set category")?;
                if let Some(id) = id {
                    if !form.categories().iter().any(|c| c.id == id) {
                        return Err(ShellError::UnknownCategory(id));
                    }
                }
                form.select_category(id);
            }
            Command::PhotoAdd(url) => {
                let draft = self.pet_form("photo add")?.draft_mut();
                draft.stage_photo_url(url);
                if !draft.add_staged_photo_url() {
                    return Err(ShellError::BlankPhotoUrl);
                }
            }
            Command::PhotoSet(index, url) => {
                if !self.pet_form("photo set")?.draft_mut().set_photo_url(index, url) {
                    return Err(ShellError::PhotoIndex(index));
                }
            }
            Command::PhotoRemove(index) => {
                self.pet_form("photo rm")?
                    .draft_mut()
                    .remove_photo_url(index)
                    .ok_or(ShellError::PhotoIndex(index))?;
            }
            Command::Submit => {
                let dispatch = if let Some(view) = self.app.pets_mut() {
                    view.overlay().ok_or(ShellError::NoOverlay)?;
                    view.submit_overlay()
                } else if let Some(view) = self.app.categories_mut() {
                    view.overlay().ok_or(ShellError::NoOverlay)?;
                    view.submit_overlay()
                } else {
                    None
                };
                self.run_opt(dispatch);
            }
            Command::Cancel => {
                if let Some(view) = self.app.pets_mut() {
                    view.close_overlay();
                } else if let Some(view) = self.app.categories_mut() {
                    view.close_overlay();
                }
            }
            Command::Render => {}
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn open_edit(&mut self, id: i64) -> Result<(), ShellError> {
        if let Some(view) = self.app.pets_mut() {
            let dispatch = view.open_edit(id).ok_or(ShellError::UnknownId(id))?;
            self.run(dispatch);
        } else if let Some(view) = self.app.categories_mut() {
            if !view.open_edit(id) {
                return Err(ShellError::UnknownId(id));
            }
        }
        Ok(())
    }

    fn pet_form(&mut self, command: &'static str) -> Result<&mut petstore_core::PetForm, ShellError> {
        self.app
            .pets_mut()
            .ok_or(ShellError::PetsOnly(command))?
            .overlay_mut()
            .ok_or(ShellError::NoOverlay)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use petstore_core::{ApiError, HttpRequest, HttpResponse, Screen};

    use super::*;

    /// Replays canned outcomes in order and records the requests it saw.
    #[derive(Default)]
    struct Scripted {
        replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }

        fn fail(self) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(ApiError::TransportError("connection refused".to_string())));
            self
        }
    }

    impl Transport for &Scripted {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::TransportError("no scripted reply".to_string())))
        }
    }

    fn client() -> PetstoreClient {
        PetstoreClient::new("http://pets.test")
    }

    #[test]
    fn transport_failure_on_mount_shows_error() {
        let script = Scripted::default().fail();
        let shell = Shell::start(client(), &script);
        let view = shell.app().pets().unwrap();
        assert_eq!(view.error(), Some("Failed to fetch pets"));
        assert!(view.items().is_empty());
    }

    #[test]
    fn status_change_issues_exactly_one_fetch() {
        let script = Scripted::default().reply(200, "[]").reply(200, "[]");
        let mut shell = Shell::start(client(), &script);

        shell.handle(Command::Filter(Some(petstore_core::PetStatus::Pending))).unwrap();
        shell.handle(Command::Filter(Some(petstore_core::PetStatus::Pending))).unwrap();

        let seen = script.seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].path, "http://pets.test/pet/findByStatus?status=pending");
    }

    #[test]
    fn pet_only_commands_are_rejected_on_categories() {
        let script = Scripted::default().reply(200, "[]").reply(200, "[]");
        let mut shell = Shell::start(client(), &script);
        shell.handle(Command::Show(Screen::Categories)).unwrap();

        assert_eq!(shell.handle(Command::Filter(None)), Err(ShellError::PetsOnly("status")));
        assert_eq!(shell.handle(Command::SetName("x".to_string())), Err(ShellError::NoOverlay));
    }

    #[test]
    fn photo_removal_out_of_range_is_reported() {
        let script = Scripted::default()
            .reply(200, r#"[{"id":1,"name":"Rex","photoUrls":["a"]}]"#)
            .reply(200, "[]");
        let mut shell = Shell::start(client(), &script);
        shell.handle(Command::Edit(1)).unwrap();

        assert_eq!(shell.handle(Command::PhotoRemove(3)), Err(ShellError::PhotoIndex(3)));
        assert_eq!(shell.handle(Command::PhotoRemove(0)), Ok(Flow::Continue));
        let form = shell.app().pets().unwrap().overlay().unwrap();
        assert!(form.draft().photo_urls().is_empty());
    }

    #[test]
    fn unknown_edit_id_is_reported() {
        let script = Scripted::default().reply(200, "[]");
        let mut shell = Shell::start(client(), &script);
        assert_eq!(shell.handle(Command::Edit(5)), Err(ShellError::UnknownId(5)));
    }
}
