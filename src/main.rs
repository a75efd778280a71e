use clap::Parser;
use dotenv::dotenv;
use items_api::{AppState, Args, OPENAPI_URL, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "items_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let app = web::router(AppState::new());

    let address = args.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Server running on http://{address}");
    tracing::info!("Interactive docs at http://{address}/docs and http://{address}/redoc");
    tracing::info!("OpenAPI schema at http://{address}{OPENAPI_URL}");
    axum::serve(listener, app).await?;

    Ok(())
}
