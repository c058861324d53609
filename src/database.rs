use sqlx::PgPool;

pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let options = database_url
            .parse::<sqlx::postgres::PgConnectOptions>()?
            .statement_cache_capacity(0);

        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Bootstrap the stocks table when pointed at a fresh database.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS stocks (
                id UUID PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                likers TEXT[] NOT NULL DEFAULT '{}'
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
