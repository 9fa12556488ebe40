//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises the client and the
//! headless screens over real HTTP using ureq. Validates that request building,
//! response parsing, and list splicing agree with the actual backend.

use petstore_core::{
    ApiError, App, Category, Completion, Dispatch, HttpMethod, HttpRequest, HttpResponse, NewCategory,
    NewPet, PetListView, PetStatus, PetstoreClient, Screen, Ticket,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data rather than `Err` so the core decides
/// what counts as failure.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn run(dispatch: Dispatch) -> (Ticket, Result<HttpResponse, ApiError>) {
    (dispatch.ticket, Ok(execute(dispatch.request)))
}

/// Start a mock server on a random port and return its base URL.
fn spawn_server(store: mock_server::Store) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, store).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn client_lifecycle() {
    let client = PetstoreClient::new(&spawn_server(mock_server::Store::default()));

    // Empty catalog.
    let pets = client
        .parse_find_pets_by_status(execute(client.build_find_pets_by_status(None)))
        .unwrap();
    assert!(pets.is_empty());

    // Create a category and a pet in it.
    let req = client
        .build_add_category(&NewCategory {
            name: "Dogs".to_string(),
        })
        .unwrap();
    let dogs = client.parse_add_category(execute(req)).unwrap();

    let req = client
        .build_add_pet(&NewPet {
            name: "Rex".to_string(),
            photo_urls: vec!["rex.png".to_string()],
            category: Some(dogs.clone()),
            tags: None,
            status: Some(PetStatus::Available),
        })
        .unwrap();
    let rex = client.parse_add_pet(execute(req)).unwrap();
    assert_eq!(rex.category, Some(dogs.clone()));

    // Fetch by id.
    let fetched = client.parse_get_pet(execute(client.build_get_pet(rex.id))).unwrap();
    assert_eq!(fetched, rex);

    // Full-record replace.
    let mut sold = rex.clone();
    sold.status = Some(PetStatus::Sold);
    let updated = client
        .parse_update_pet(execute(client.build_update_pet(&sold).unwrap()))
        .unwrap();
    assert_eq!(updated, sold);

    // Filter reflects the new status.
    let available = client
        .parse_find_pets_by_status(execute(client.build_find_pets_by_status(Some(PetStatus::Available))))
        .unwrap();
    assert!(available.is_empty());

    // Rename the category.
    let renamed = Category {
        id: dogs.id,
        name: "Hounds".to_string(),
    };
    let category = client
        .parse_update_category(execute(client.build_update_category(&renamed).unwrap()))
        .unwrap();
    assert_eq!(category, renamed);

    // Missing records surface as NotFound.
    let err = client.parse_get_pet(execute(client.build_get_pet(999))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    let mut ghost = rex.clone();
    ghost.id = 999;
    let err = client
        .parse_update_pet(execute(client.build_update_pet(&ghost).unwrap()))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn pet_screen_edit_round_trip() {
    let client = PetstoreClient::new(&spawn_server(mock_server::Store::seeded()));
    let mut view = PetListView::new(client);

    let (ticket, outcome) = run(view.mount());
    assert!(view.complete(ticket, outcome));
    let before: Vec<i64> = view.items().iter().map(|p| p.id).collect();
    assert_eq!(before.len(), 2);

    let target = before[1];
    let (ticket, outcome) = run(view.open_edit(target).unwrap());
    view.complete(ticket, outcome);

    let form = view.overlay_mut().unwrap();
    assert_eq!(form.categories().len(), 4);
    form.draft_mut().set_name("Renamed");
    form.draft_mut().stage_photo_url("https://images.example/extra.jpg");
    assert!(form.draft_mut().add_staged_photo_url());
    form.select_category(Some(1));

    let (ticket, outcome) = run(view.submit_overlay().unwrap());
    assert!(view.complete(ticket, outcome));
    assert!(view.overlay().is_none());

    let after: Vec<i64> = view.items().iter().map(|p| p.id).collect();
    assert_eq!(after, before);
    let edited = &view.items()[1];
    assert_eq!(edited.name, "Renamed");
    assert_eq!(edited.photo_urls.len(), 2);
    assert_eq!(edited.category.as_ref().map(|c| c.name.as_str()), Some("Dogs"));
}

#[test]
fn pet_screen_filter_change() {
    let client = PetstoreClient::new(&spawn_server(mock_server::Store::seeded()));
    let mut view = PetListView::new(client);
    let (ticket, outcome) = run(view.mount());
    view.complete(ticket, outcome);

    let (ticket, outcome) = run(view.set_filter(Some(PetStatus::Sold)).unwrap());
    view.complete(ticket, outcome);
    assert_eq!(view.items().len(), 1);
    assert_eq!(view.items()[0].name, "Fido");

    let (ticket, outcome) = run(view.set_filter(None).unwrap());
    view.complete(ticket, outcome);
    assert_eq!(view.items().len(), 4);
}

#[test]
fn category_screen_add_and_edit() {
    let client = PetstoreClient::new(&spawn_server(mock_server::Store::seeded()));
    let (mut app, initial) = App::new(client);
    let (ticket, outcome) = run(initial);
    app.complete(ticket, outcome);

    let (ticket, outcome) = run(app.show(Screen::Categories).unwrap());
    assert!(app.complete(ticket, outcome));
    let view = app.categories_mut().unwrap();
    assert_eq!(view.items().len(), 4);

    view.open_add();
    view.overlay_mut().unwrap().set_name("Reptiles");
    let (ticket, outcome) = run(view.submit_overlay().unwrap());
    assert!(app.complete(ticket, outcome));

    let view = app.categories_mut().unwrap();
    let names: Vec<&str> = view.items().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Dogs", "Cats", "Birds", "Fish", "Reptiles"]);

    assert!(view.open_edit(2));
    view.overlay_mut().unwrap().set_name("Felines");
    let (ticket, outcome) = run(view.submit_overlay().unwrap());
    app.complete(ticket, outcome);

    let names: Vec<&str> = app
        .categories()
        .unwrap()
        .items()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["Dogs", "Felines", "Birds", "Fish", "Reptiles"]);
}

#[test]
fn unreachable_backend_surfaces_static_message() {
    // Bind and drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut view = PetListView::new(PetstoreClient::new(&format!("http://127.0.0.1:{port}")));
    let dispatch = view.mount();

    let agent = ureq::Agent::config_builder().build().new_agent();
    let outcome: Result<HttpResponse, ApiError> = agent
        .get(&dispatch.request.path)
        .call()
        .map(|_| unreachable!("nothing is listening"))
        .map_err(|e| ApiError::TransportError(e.to_string()));
    view.complete(dispatch.ticket, outcome);

    assert_eq!(view.error(), Some("Failed to fetch pets"));
    assert!(view.items().is_empty());
}

#[test]
fn edit_form_failure_keeps_overlay_open() {
    let client = PetstoreClient::new(&spawn_server(mock_server::Store::seeded()));
    let (mut form, categories) = petstore_core::PetForm::edit(
        client,
        &petstore_core::Pet {
            id: 404,
            name: "Phantom".to_string(),
            photo_urls: Vec::new(),
            category: None,
            tags: None,
            status: None,
        },
    );
    let (ticket, outcome) = run(categories);
    form.complete(ticket, outcome);

    let (ticket, outcome) = run(form.submit().unwrap());
    assert_eq!(form.complete(ticket, outcome), Completion::Applied);
    assert_eq!(form.error(), Some("Failed to update pet"));
}
