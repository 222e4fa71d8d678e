use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_backend::config::Config;
use portfolio_backend::handlers::{
    DiagnosticsResponse, InsertedResponse, ItemsResponse, MessageResponse,
};
use portfolio_backend::models::{Contact, Project};
use portfolio_backend::state::AppState;
use portfolio_backend::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::root,
        handlers::health::hello,
        handlers::health::test_database,
        handlers::project::list_projects,
        handlers::project::create_project,
        handlers::contact::list_contacts,
        handlers::contact::create_contact,
    ),
    components(schemas(
        Project,
        Contact,
        ItemsResponse,
        InsertedResponse,
        MessageResponse,
        DiagnosticsResponse,
    )),
    tags(
        (name = "Health", description = "Liveness and diagnostic endpoints"),
        (name = "Projects", description = "Portfolio project endpoints"),
        (name = "Contacts", description = "Contact form endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (LOG_FORMAT=json for structured output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.server_addr();

    // Initialize application state (database is optional)
    let state = AppState::new(config).await;

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
