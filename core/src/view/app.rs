//! Root component: one list screen at a time.

use crate::client::PetstoreClient;
use crate::view::categories::CategoryListView;
use crate::view::pets::PetListView;
use crate::view::request::{Dispatch, Outcome, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Pets,
    Categories,
}

#[derive(Debug)]
pub enum ActiveView {
    Pets(PetListView),
    Categories(CategoryListView),
}

#[derive(Debug)]
pub struct App {
    client: PetstoreClient,
    active: ActiveView,
}

impl App {
    /// Mounts the pet screen; the returned dispatch is its initial fetch.
    pub fn new(client: PetstoreClient) -> (Self, Dispatch) {
        let mut pets = PetListView::new(client.clone());
        let dispatch = pets.mount();
        let app = Self {
            client,
            active: ActiveView::Pets(pets),
        };
        (app, dispatch)
    }

    pub fn screen(&self) -> Screen {
        match self.active {
            ActiveView::Pets(_) => Screen::Pets,
            ActiveView::Categories(_) => Screen::Categories,
        }
    }

    /// Switch screens. The old screen is retired and the new one mounted
    /// fresh; selecting the current screen does nothing.
    pub fn show(&mut self, screen: Screen) -> Option<Dispatch> {
        if self.screen() == screen {
            return None;
        }
        match &mut self.active {
            ActiveView::Pets(view) => view.retire(),
            ActiveView::Categories(view) => view.retire(),
        }
        let (active, dispatch) = match screen {
            Screen::Pets => {
                let mut view = PetListView::new(self.client.clone());
                let dispatch = view.mount();
                (ActiveView::Pets(view), dispatch)
            }
            Screen::Categories => {
                let mut view = CategoryListView::new(self.client.clone());
                let dispatch = view.mount();
                (ActiveView::Categories(view), dispatch)
            }
        };
        tracing::debug!(?screen, "switched screen");
        self.active = active;
        Some(dispatch)
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    pub fn pets(&self) -> Option<&PetListView> {
        match &self.active {
            ActiveView::Pets(view) => Some(view),
            ActiveView::Categories(_) => None,
        }
    }

    pub fn pets_mut(&mut self) -> Option<&mut PetListView> {
        match &mut self.active {
            ActiveView::Pets(view) => Some(view),
            ActiveView::Categories(_) => None,
        }
    }

    pub fn categories(&self) -> Option<&CategoryListView> {
        match &self.active {
            ActiveView::Categories(view) => Some(view),
            ActiveView::Pets(_) => None,
        }
    }

    pub fn categories_mut(&mut self) -> Option<&mut CategoryListView> {
        match &mut self.active {
            ActiveView::Categories(view) => Some(view),
            ActiveView::Pets(_) => None,
        }
    }

    /// Deliver a finished request. Responses for retired screens are dropped.
    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        let claimed = match &mut self.active {
            ActiveView::Pets(view) => view.complete(ticket, outcome),
            ActiveView::Categories(view) => view.complete(ticket, outcome),
        };
        if !claimed {
            tracing::debug!(%ticket, "discarding response nobody is waiting for");
        }
        claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;

    fn ok(body: &str) -> Outcome {
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    #[test]
    fn starts_on_pets_and_fetches() {
        let (app, dispatch) = App::new(PetstoreClient::new("http://localhost:8080"));
        assert_eq!(app.screen(), Screen::Pets);
        assert!(dispatch.request.path.contains("/pet/findByStatus"));
    }

    #[test]
    fn reselecting_current_screen_does_not_refetch() {
        let (mut app, _) = App::new(PetstoreClient::new("http://localhost:8080"));
        assert!(app.show(Screen::Pets).is_none());
    }

    #[test]
    fn switching_screens_drops_responses_for_the_old_one() {
        let (mut app, pets_fetch) = App::new(PetstoreClient::new("http://localhost:8080"));
        let categories_fetch = app.show(Screen::Categories).unwrap();
        assert!(categories_fetch.request.path.ends_with("/category"));

        assert!(!app.complete(pets_fetch.ticket, ok("[]")));
        assert!(app.complete(categories_fetch.ticket, ok(r#"[{"id":1,"name":"Dogs"}]"#)));
        assert_eq!(app.categories().unwrap().items().len(), 1);
    }

    #[test]
    fn returning_to_a_screen_mounts_it_fresh() {
        let (mut app, first) = App::new(PetstoreClient::new("http://localhost:8080"));
        app.complete(first.ticket, ok(r#"[{"id":1,"name":"Rex","photoUrls":[]}]"#));
        app.show(Screen::Categories);
        let again = app.show(Screen::Pets).unwrap();

        assert!(app.pets().unwrap().is_loading());
        assert_ne!(again.ticket, first.ticket);
    }
}
