use std::sync::Arc;

use axum::{extract::State, Json};

use models::{BookStore, IdGenerator};

/// Shared handler state: the identifier source for freshly built records.
#[derive(Clone)]
pub struct ServerState {
    pub ids: Arc<dyn IdGenerator>,
}

/// List the bookstore branches known to the service.
#[utoipa::path(get, path = "/api/bookstore", tag = "bookstore", responses((status = 200, description = "OK")))]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<BookStore>> {
    Json(branches(state.ids.as_ref()))
}

/// The catalogue: a fixed single-branch listing, rebuilt on every call.
fn branches(ids: &dyn IdGenerator) -> Vec<BookStore> {
    vec![BookStore {
        name: "Waterstones".to_string(),
        address_line1: "The Dolphin & Anchor".to_string(),
        address_line2: "West Street".to_string(),
        city: "Chichester".to_string(),
        post_code: "PO19 1QD".to_string(),
        telephone_number: "01234 773030".to_string(),
        ..BookStore::new(ids)
    }]
}
