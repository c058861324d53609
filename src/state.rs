use crate::quotes::QuoteSource;
use crate::store::StockStore;

/// Collaborators are constructed once in `main` and injected here; tests
/// substitute in-memory implementations.
#[derive(Clone)]
pub struct AppState<S: StockStore, Q: QuoteSource> {
    pub store: S,
    pub quotes: Q,
}
