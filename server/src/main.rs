mod routes;
mod services;
mod state;
mod store;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let store_path = std::path::PathBuf::from(
        std::env::var("ITEMS_STORE_PATH").unwrap_or_else(|_| "data/items.json".into()),
    );

    let loaded = store::load(&store_path).expect("item store load failed");
    tracing::info!(count = loaded.len(), path = %store_path.display(), "item store loaded");

    let state = state::AppState::new(loaded, store_path);

    // Spawn background persistence task.
    let _persistence = services::persistence::spawn_persistence_task(state.clone());

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "itemboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
