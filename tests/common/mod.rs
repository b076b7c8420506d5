use std::sync::Arc;

use anyhow::Result;
use homes_api::homes::{self, HomeStore};

pub struct TestServer {
    pub base_url: String,
}

/// Serve the real home routes on an ephemeral port with a fresh store, so
/// every test runs against isolated state.
pub async fn spawn_server() -> Result<TestServer> {
    let store = Arc::new(HomeStore::new());
    let app = homes::router(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server error: {}", e);
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
    })
}
