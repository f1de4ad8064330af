//! Shared helpers for HTTP-level tests

use mechtrack_backend::api;
use mechtrack_backend::state::AppState;
use std::path::Path;
use tokio::net::TcpListener;

/// Serve the app on an ephemeral port and return its base URL
pub async fn spawn_app(state: AppState, public_dir: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api::router(state, public_dir);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
