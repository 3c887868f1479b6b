use async_trait::async_trait;
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
};

use crate::{
    CompanyId, CompanyView, PageRequest, Result, ViewStoreError,
    store::ViewStore,
};

/// PostgreSQL-backed view store implementation.
#[derive(Clone)]
pub struct PostgresViewStore {
    pool: PgPool,
}

impl PostgresViewStore {
    /// Creates a new PostgreSQL view store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool to `database_url` and wraps it in a store.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_view(row: PgRow) -> Result<CompanyView> {
        let identifier = CompanyId::from(row.try_get::<String, _>("identifier")?);
        let value = column_to_u64(&identifier, "value", row.try_get("value")?)?;
        let amount_of_shares = column_to_u64(
            &identifier,
            "amount_of_shares",
            row.try_get("amount_of_shares")?,
        )?;

        Ok(CompanyView {
            name: row.try_get("name")?,
            value,
            amount_of_shares,
            trade_started: row.try_get("trade_started")?,
            identifier,
        })
    }
}

fn column_to_u64(company_id: &CompanyId, field: &'static str, raw: i64) -> Result<u64> {
    u64::try_from(raw).map_err(|_| ViewStoreError::Corrupt {
        company_id: company_id.clone(),
        reason: format!("{field} is negative ({raw})"),
    })
}

fn u64_to_column(company_id: &CompanyId, field: &'static str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| ViewStoreError::ValueOutOfRange {
        company_id: company_id.clone(),
        field,
        value,
    })
}

#[async_trait]
impl ViewStore for PostgresViewStore {
    #[tracing::instrument(skip(self, view), fields(identifier = %view.identifier))]
    async fn upsert(&self, view: CompanyView) -> Result<()> {
        let value = u64_to_column(&view.identifier, "value", view.value)?;
        let amount_of_shares =
            u64_to_column(&view.identifier, "amount_of_shares", view.amount_of_shares)?;

        sqlx::query(
            r#"
            INSERT INTO company_views (identifier, name, value, amount_of_shares, trade_started)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (identifier) DO UPDATE SET
                name = EXCLUDED.name,
                value = EXCLUDED.value,
                amount_of_shares = EXCLUDED.amount_of_shares,
                trade_started = EXCLUDED.trade_started
            "#,
        )
        .bind(view.identifier.as_str())
        .bind(&view.name)
        .bind(value)
        .bind(amount_of_shares)
        .bind(view.trade_started)
        .execute(&self.pool)
        .await?;

        metrics::counter!("view_store_upserts").increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_identifier(&self, identifier: &CompanyId) -> Result<Option<CompanyView>> {
        let row = sqlx::query(
            r#"
            SELECT identifier, name, value, amount_of_shares, trade_started
            FROM company_views
            WHERE identifier = $1
            "#,
        )
        .bind(identifier.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_view).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn scan_page(&self, page: PageRequest) -> Result<Vec<CompanyView>> {
        // Postgres LIMIT/OFFSET are signed; anything beyond i64::MAX is past the end.
        let Ok(skip) = i64::try_from(page.skip()) else {
            return Ok(Vec::new());
        };
        let limit = i64::try_from(page.size()).unwrap_or(i64::MAX);

        // The column is declared COLLATE "C", matching the in-memory byte order.
        let rows = sqlx::query(
            r#"
            SELECT identifier, name, value, amount_of_shares, trade_started
            FROM company_views
            ORDER BY identifier
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_view).collect()
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company_views")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
