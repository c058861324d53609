use std::net::SocketAddr;

use stock_price_checker::app::build_app;
use stock_price_checker::config::Config;
use stock_price_checker::database::Database;
use stock_price_checker::quotes::HttpQuoteClient;
use stock_price_checker::state::AppState;
use stock_price_checker::store::PgStockStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("stock_price_checker=debug,tower_http=debug")
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize database
    let db = Database::new(&config.database_url).await?;
    db.ensure_schema().await?;

    // Build application
    let state = AppState {
        store: PgStockStore::new(db.pool().clone()),
        quotes: HttpQuoteClient::new(config.quote_api_base, config.quote_timeout)?,
    };
    let app = build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Stock price checker listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
