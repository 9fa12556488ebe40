//! Stateless HTTP request builder and response parser for the petstore API.
//!
//! # Design
//! `PetstoreClient` holds only a base path. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The host executes the round-trip in between,
//! which keeps this module deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Category, NewCategory, NewPet, Pet, PetStatus};

/// Synchronous, stateless client for the pet and category endpoints.
#[derive(Debug, Clone)]
pub struct PetstoreClient {
    base_path: String,
}

impl PetstoreClient {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_path)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    // --- pets ---

    /// `None` asks for every pet regardless of status.
    pub fn build_find_pets_by_status(&self, status: Option<PetStatus>) -> HttpRequest {
        let path = match status {
            Some(status) => format!("{}/pet/findByStatus?status={status}", self.base_path),
            None => format!("{}/pet/findByStatus", self.base_path),
        };
        HttpRequest::get(path)
    }

    pub fn build_get_pet(&self, id: i64) -> HttpRequest {
        HttpRequest::get(format!("{}/pet/{id}", self.base_path))
    }

    pub fn build_add_pet(&self, input: &NewPet) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, format!("{}/pet", self.base_path), body))
    }

    /// Full-record replace; the id travels in the body.
    pub fn build_update_pet(&self, pet: &Pet) -> Result<HttpRequest, ApiError> {
        let body = to_json(pet)?;
        Ok(HttpRequest::json(HttpMethod::Put, format!("{}/pet", self.base_path), body))
    }

    pub fn parse_find_pets_by_status(&self, response: HttpResponse) -> Result<Vec<Pet>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_pet(&self, response: HttpResponse) -> Result<Pet, ApiError> {
        parse_json(response)
    }

    pub fn parse_add_pet(&self, response: HttpResponse) -> Result<Pet, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_pet(&self, response: HttpResponse) -> Result<Pet, ApiError> {
        parse_json(response)
    }

    // --- categories ---

    pub fn build_list_categories(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/category", self.base_path))
    }

    pub fn build_add_category(&self, input: &NewCategory) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, format!("{}/category", self.base_path), body))
    }

    pub fn build_update_category(&self, category: &Category) -> Result<HttpRequest, ApiError> {
        let body = to_json(category)?;
        Ok(HttpRequest::json(HttpMethod::Put, format!("{}/category", self.base_path), body))
    }

    pub fn parse_list_categories(&self, response: HttpResponse) -> Result<Vec<Category>, ApiError> {
        parse_json(response)
    }

    pub fn parse_add_category(&self, response: HttpResponse) -> Result<Category, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_category(&self, response: HttpResponse) -> Result<Category, ApiError> {
        parse_json(response)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PetstoreClient {
        PetstoreClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn find_pets_by_status_puts_filter_in_query() {
        let req = client().build_find_pets_by_status(Some(PetStatus::Pending));
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/pet/findByStatus?status=pending");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn find_pets_without_filter_has_no_query() {
        let req = client().build_find_pets_by_status(None);
        assert_eq!(req.path, "http://localhost:8080/pet/findByStatus");
    }

    #[test]
    fn build_get_pet_produces_correct_request() {
        let req = client().build_get_pet(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/pet/42");
    }

    #[test]
    fn build_add_pet_serializes_payload() {
        let input = NewPet {
            name: "Rex".to_string(),
            photo_urls: vec!["a.png".to_string()],
            category: Some(Category { id: 1, name: "Dogs".to_string() }),
            tags: None,
            status: Some(PetStatus::Available),
        };
        let req = client().build_add_pet(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/pet");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Rex");
        assert_eq!(body["photoUrls"][0], "a.png");
        assert_eq!(body["category"]["name"], "Dogs");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_pet_sends_full_record() {
        let pet = Pet {
            id: 3,
            name: "Tom".to_string(),
            photo_urls: Vec::new(),
            category: None,
            tags: None,
            status: Some(PetStatus::Sold),
        };
        let req = client().build_update_pet(&pet).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/pet");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["status"], "sold");
        assert_eq!(body["photoUrls"], serde_json::json!([]));
    }

    #[test]
    fn category_requests_target_category_collection() {
        let c = client();
        assert_eq!(c.build_list_categories().path, "http://localhost:8080/category");

        let add = c.build_add_category(&NewCategory { name: "Fish".to_string() }).unwrap();
        assert_eq!(add.method, HttpMethod::Post);
        assert_eq!(add.body.as_deref(), Some(r#"{"name":"Fish"}"#));

        let update = c
            .build_update_category(&Category { id: 4, name: "Fishes".to_string() })
            .unwrap();
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.path, "http://localhost:8080/category");
    }

    #[test]
    fn parse_find_pets_success() {
        let body = r#"[{"id":1,"name":"Rex","photoUrls":[],"status":"available"}]"#;
        let pets = client().parse_find_pets_by_status(response(200, body)).unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].name, "Rex");
        assert_eq!(pets[0].status, Some(PetStatus::Available));
    }

    #[test]
    fn any_2xx_counts_as_success() {
        let category = client()
            .parse_add_category(response(201, r#"{"id":9,"name":"Birds"}"#))
            .unwrap();
        assert_eq!(category, Category { id: 9, name: "Birds".to_string() });
    }

    #[test]
    fn parse_update_pet_not_found() {
        let err = client().parse_update_pet(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_categories_server_error() {
        let err = client()
            .parse_list_categories(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_get_pet_bad_json() {
        let err = client().parse_get_pet(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PetstoreClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_path(), "http://localhost:8080/api");
        assert_eq!(client.build_list_categories().path, "http://localhost:8080/api/category");
    }
}
