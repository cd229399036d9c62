//! The item store: trait seam plus the PostgreSQL implementation.

use crate::error::AppError;
use crate::model::Item;
use crate::query::ListQuery;
use crate::sql;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Access to the item collection. Handlers receive this through `AppState`
/// rather than a process global, so tests can substitute an in-memory store.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Matching items in sort order, at most `query.limit` of them.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Item>, AppError>;

    /// One item by id, or None.
    async fn get(&self, id: Uuid) -> Result<Option<Item>, AppError>;

    /// Insert `item`; the store assigns the id. Returns the stored row.
    async fn insert(&self, item: Item) -> Result<Item, AppError>;

    /// Overwrite the mutable fields of the row with `item.id`.
    async fn update(&self, item: &Item) -> Result<(), AppError>;

    /// Delete by id. Succeeds whether or not a row matched.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Cheap connectivity probe for the readiness endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        PgItemStore { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Item>, AppError> {
        let q = sql::select_list(query);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut stmt = sqlx::query_as::<_, Item>(&q.sql);
        for p in &q.params {
            stmt = stmt.bind(p);
        }
        let items = stmt.fetch_all(&self.pool).await?;
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>, AppError> {
        let sql = sql::select_by_id();
        tracing::debug!(sql = %sql, id = %id, "query");
        let item = sqlx::query_as::<_, Item>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn insert(&self, item: Item) -> Result<Item, AppError> {
        let sql = sql::insert();
        tracing::debug!(sql = %sql, "query");
        let created = sqlx::query_as::<_, Item>(&sql)
            .bind(&item.title)
            .bind(&item.description)
            .bind(&item.price)
            .bind(&item.category)
            .bind(item.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, item: &Item) -> Result<(), AppError> {
        let sql = sql::update();
        tracing::debug!(sql = %sql, id = %item.id, "query");
        sqlx::query(&sql)
            .bind(&item.title)
            .bind(&item.description)
            .bind(&item.price)
            .bind(&item.category)
            .bind(item.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let sql = sql::delete();
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the items table if missing. Run once at startup; a failure here
/// doubles as the initial connectivity check and aborts the process.
pub async fn ensure_items_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS "items" (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price TEXT NOT NULL,
            category TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}
