use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use models::UuidV4Generator;
use server::routes::{self, bookstores::ServerState};

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState {
        ids: Arc::new(UuidV4Generator),
    };
    let app: Router = routes::build_router(cors(), state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_list_bookstores_returns_the_single_branch() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/bookstore", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    let stores = body.as_array().expect("body should be a JSON array");
    assert_eq!(stores.len(), 1);

    let store = &stores[0];
    assert_eq!(store["name"], "Waterstones");
    assert_eq!(store["addressLine1"], "The Dolphin & Anchor");
    assert_eq!(store["addressLine2"], "West Street");
    assert_eq!(store["city"], "Chichester");
    assert_eq!(store["postCode"], "PO19 1QD");
    assert_eq!(store["telephoneNumber"], "01234 773030");
    assert!(store["addressLine3"].is_null());

    let id = store["id"].as_str().expect("id should be string-encoded");
    Uuid::parse_str(id).expect("id should be a valid uuid");
    Ok(())
}

#[tokio::test]
async fn e2e_repeat_calls_mint_fresh_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let first = c
        .get(format!("{}/api/bookstore", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let second = c
        .get(format!("{}/api/bookstore", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    let (a, b) = (&first[0], &second[0]);
    assert_ne!(a["id"], b["id"], "each call mints a fresh id");
    for field in [
        "name",
        "addressLine1",
        "addressLine2",
        "addressLine3",
        "city",
        "postCode",
        "telephoneNumber",
    ] {
        assert_eq!(a[field], b[field], "field {field} should match across calls");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api-docs/openapi.json", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    assert!(doc["paths"]["/api/bookstore"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_route_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/nothing-here", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    Ok(())
}
