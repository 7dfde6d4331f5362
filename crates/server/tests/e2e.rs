//! Real-socket checks with an HTTP client.

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use tokio::net::TcpListener;

use server::routes;
use server::startup::build_cors;
use server::store::AppState;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = routes::build_router(AppState::unconfigured(), build_cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_unconfigured_store_reports_error_json() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/api/businesses", app.base_url))
        .header("Origin", "https://app.example.com")
        .json(&serde_json::json!({"name": "Acme", "icon": "a.png"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert_eq!(res.headers()["content-type"], "application/json");
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "DATABASE_URL not set");
    Ok(())
}
