use cooking_book::app::database_service::DatabaseService;
use cooking_book::domain::model::{SchemaSet, TextLimits};
use cooking_book::infra::config;
use cooking_book::transport;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let limits = TextLimits {
        min: config::min_text_length(),
        max: config::max_text_length(),
    };
    // Schemas are built once here and injected; no global validator state.
    let schemas = Arc::new(SchemaSet::new(&limits));

    let db = DatabaseService::connect(&config::database_url()).await?;
    info!("database ready, tables ensured");

    let app_state = transport::http::AppState {
        db: Arc::new(db),
        schemas,
        limits,
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "cooking book API listening");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
