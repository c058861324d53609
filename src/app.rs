use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::quotes::QuoteSource;
use crate::state::AppState;
use crate::store::StockStore;

pub fn build_app<S, Q>(state: AppState<S, Q>) -> Router
where
    S: StockStore,
    Q: QuoteSource,
{
    Router::new()
        .route("/api/testing", get(handlers::testing::testing))
        .route(
            "/api/stock-prices",
            get(handlers::stocks::stock_prices::<S, Q>),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
