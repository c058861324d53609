use std::future::Future;

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::StockRecord;

/// Record store contract. The service layer only needs lookup by ticker and
/// an upsert; per-statement atomicity is the implementation's concern.
pub trait StockStore: Clone + Send + Sync + 'static {
    fn find_by_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<Option<StockRecord>>> + Send;

    /// Upsert by ticker. Saving a new record persists it with its generated
    /// identity and unchanged fields.
    fn save(&self, record: StockRecord) -> impl Future<Output = Result<StockRecord>> + Send;
}

#[derive(Clone)]
pub struct PgStockStore {
    pool: PgPool,
}

impl PgStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl StockStore for PgStockStore {
    async fn find_by_code(&self, code: &str) -> Result<Option<StockRecord>> {
        let record = sqlx::query_as::<_, StockRecord>(
            "SELECT id, code, likers FROM stocks WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("failed to look up stock {}", code))?;

        Ok(record)
    }

    async fn save(&self, record: StockRecord) -> Result<StockRecord> {
        let saved = sqlx::query_as::<_, StockRecord>(
            "INSERT INTO stocks (id, code, likers) VALUES ($1, $2, $3)
             ON CONFLICT (code) DO UPDATE SET likers = EXCLUDED.likers
             RETURNING id, code, likers",
        )
        .bind(record.id)
        .bind(&record.code)
        .bind(&record.likers)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("failed to save stock {}", record.code))?;

        Ok(saved)
    }
}
