mod config;
mod data;
mod render;
mod routes;
mod state;
mod templates;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let fixture = data::load_fixture(&config.fixture_path)
        .await
        .expect("fixture load failed");
    tracing::info!(
        path = %config.fixture_path.display(),
        articles = fixture.articles.len(),
        authors = fixture.authors.len(),
        "fixture loaded"
    );

    let state = state::AppState::from_config(config.clone(), fixture).expect("data source init failed");
    match config.data_source {
        config::DataSourceKind::Remote => tracing::info!(url = %config.data_url(), "rendering from remote data"),
        config::DataSourceKind::Fixture => tracing::info!("rendering from in-memory fixture"),
    }

    let app = routes::app(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "articles server listening");
    axum::serve(listener, app).await.expect("server failed");
}
