use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    pub category: Option<Category>,
    pub tags: Option<Vec<Tag>>,
    pub status: Option<PetStatus>,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub status: Option<PetStatus>,
}

/// In-memory backing store. Ids are assigned from per-collection counters.
#[derive(Debug, Default)]
pub struct Store {
    pets: BTreeMap<i64, Pet>,
    categories: BTreeMap<i64, Category>,
    next_pet_id: i64,
    next_category_id: i64,
}

impl Store {
    /// Sample catalog for local runs.
    pub fn seeded() -> Self {
        let mut store = Store::default();
        let [dogs, cats, birds, _fish] = ["Dogs", "Cats", "Birds", "Fish"].map(|name| {
            store.insert_category(NewCategory {
                name: name.to_string(),
            })
        });
        let samples = [
            ("Rex", dogs.clone(), PetStatus::Available),
            ("Whiskers", cats, PetStatus::Available),
            ("Tweety", birds, PetStatus::Pending),
            ("Fido", dogs, PetStatus::Sold),
        ];
        for (name, category, status) in samples {
            store.insert_pet(NewPet {
                name: name.to_string(),
                photo_urls: vec![format!("https://images.example/{}.jpg", name.to_lowercase())],
                category: Some(category),
                tags: None,
                status: Some(status),
            });
        }
        store
    }

    pub fn insert_category(&mut self, input: NewCategory) -> Category {
        self.next_category_id += 1;
        let category = Category {
            id: self.next_category_id,
            name: input.name,
        };
        self.categories.insert(category.id, category.clone());
        category
    }

    pub fn insert_pet(&mut self, input: NewPet) -> Pet {
        self.next_pet_id += 1;
        let pet = Pet {
            id: self.next_pet_id,
            name: input.name,
            photo_urls: input.photo_urls,
            category: input.category,
            tags: input.tags,
            status: input.status,
        };
        self.pets.insert(pet.id, pet.clone());
        pet
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/pet", post(add_pet).put(update_pet))
        .route("/pet/findByStatus", get(find_pets_by_status))
        .route("/pet/{id}", get(get_pet))
        .route("/category", get(list_categories).post(add_category).put(update_category))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn find_pets_by_status(
    State(db): State<Db>,
    Query(query): Query<StatusQuery>,
) -> Json<Vec<Pet>> {
    let store = db.read().await;
    let pets = store
        .pets
        .values()
        .filter(|pet| query.status.is_none() || pet.status == query.status)
        .cloned()
        .collect();
    Json(pets)
}

async fn get_pet(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Pet>, StatusCode> {
    let store = db.read().await;
    store.pets.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn add_pet(State(db): State<Db>, Json(input): Json<NewPet>) -> Json<Pet> {
    Json(db.write().await.insert_pet(input))
}

async fn update_pet(State(db): State<Db>, Json(pet): Json<Pet>) -> Result<Json<Pet>, StatusCode> {
    let mut store = db.write().await;
    let slot = store.pets.get_mut(&pet.id).ok_or(StatusCode::NOT_FOUND)?;
    *slot = pet.clone();
    Ok(Json(pet))
}

async fn list_categories(State(db): State<Db>) -> Json<Vec<Category>> {
    let store = db.read().await;
    Json(store.categories.values().cloned().collect())
}

async fn add_category(State(db): State<Db>, Json(input): Json<NewCategory>) -> Json<Category> {
    Json(db.write().await.insert_category(input))
}

async fn update_category(
    State(db): State<Db>,
    Json(category): Json<Category>,
) -> Result<Json<Category>, StatusCode> {
    let mut store = db.write().await;
    let slot = store.categories.get_mut(&category.id).ok_or(StatusCode::NOT_FOUND)?;
    *slot = category.clone();
    Ok(Json(category))
}
