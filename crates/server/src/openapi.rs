use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Doc-only mirror of `models::BookStore`; keeps the models crate free of
/// OpenAPI derives.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookStoreDoc {
    pub id: Uuid,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: Option<String>,
    pub city: String,
    pub post_code: String,
    pub telephone_number: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::bookstores::list,
    ),
    components(
        schemas(
            HealthResponse,
            BookStoreDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "bookstore")
    )
)]
pub struct ApiDoc;
