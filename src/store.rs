//! `purposes` table DDL and persistence. One `PurposeStore` owns the pool; every
//! read-then-write mutation runs in its own `BEGIN IMMEDIATE` transaction, so
//! the write lock is taken up front and concurrent writers queue on the busy
//! timeout instead of failing a lock upgrade.

use crate::config::Settings;
use crate::error::AppError;
use crate::model::{ListFilter, NewPurpose, Purpose, PurposeChanges, PurposeRow};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{Executor, QueryBuilder, Sqlite, SqliteConnection, Transaction};
use std::str::FromStr;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const PURPOSES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS purposes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(100) NOT NULL UNIQUE CHECK (length(name) <= 100),
        description TEXT NOT NULL DEFAULT '',
        is_active BOOLEAN NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PurposeStore {
    pool: SqlitePool,
}

impl PurposeStore {
    pub fn new(pool: SqlitePool) -> Self {
        PurposeStore { pool }
    }

    /// Open (creating if missing) the database named by `settings.database_url`.
    /// In-memory databases are pinned to a single long-lived connection so every
    /// query sees the same data; file databases use WAL so readers do not block
    /// the writer.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&settings.database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);
        let (options, pool_options) = if settings.database_url.contains(":memory:") {
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (options, pool_options)
        } else {
            let options = options.journal_mode(SqliteJournalMode::Wal);
            (options, SqlitePoolOptions::new().max_connections(settings.max_connections))
        };
        let pool = pool_options.connect_with(options).await?;
        tracing::info!(url = %settings.database_url, "database connected");
        Ok(PurposeStore::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Transaction holding the database write lock from its first statement.
    async fn begin_write(&self) -> Result<Transaction<'static, Sqlite>, AppError> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Create the `purposes` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(PURPOSES_DDL).execute(&self.pool).await?;
        Ok(())
    }

    /// Round trip to the database, used by readiness checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// Insert a new purpose. The name pre-check gives the friendly conflict;
    /// the UNIQUE constraint settles races between concurrent creates.
    pub async fn create(&self, new: &NewPurpose) -> Result<Purpose, AppError> {
        let mut tx = self.begin_write().await?;
        if fetch_by_name(&mut *tx, &new.name).await?.is_some() {
            return Err(AppError::Conflict(new.name.clone()));
        }
        let row = insert(&mut tx, new, Utc::now()).await?;
        tx.commit().await?;
        tracing::info!(id = row.id, name = %row.name, "purpose created");
        Ok(row.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Purpose>, AppError> {
        Ok(fetch_by_id(&self.pool, id).await?.map(Purpose::from))
    }

    /// Exact, case-sensitive lookup.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Purpose>, AppError> {
        Ok(fetch_by_name(&self.pool, name).await?.map(Purpose::from))
    }

    /// Filtered, paginated listing in insertion order.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Purpose>, AppError> {
        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM purposes", COLUMNS));
        let mut sep = " WHERE ";
        if let Some(needle) = &filter.name_contains {
            qb.push(sep)
                .push("lower(name) LIKE lower(")
                .push_bind(like_pattern(needle))
                .push(") ESCAPE '\\'");
            sep = " AND ";
        }
        if let Some(active) = filter.is_active {
            qb.push(sep).push("is_active = ").push_bind(active);
        }
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.skip);
        tracing::debug!(sql = %qb.sql(), ?filter, "query");
        let rows = qb.build_query_as::<PurposeRow>().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Purpose::from).collect())
    }

    /// Apply the supplied fields. Returns `None` when `id` does not exist.
    pub async fn update(&self, id: i64, changes: &PurposeChanges) -> Result<Option<Purpose>, AppError> {
        let mut tx = self.begin_write().await?;
        let Some(current) = fetch_by_id(&mut *tx, id).await? else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            if *name != current.name && fetch_by_name(&mut *tx, name).await?.is_some() {
                return Err(AppError::Conflict(name.clone()));
            }
        }

        let merged = PurposeRow {
            id,
            name: changes.name.clone().unwrap_or(current.name),
            description: changes.description.clone().unwrap_or(current.description),
            is_active: changes.is_active.unwrap_or(current.is_active),
            created_at: current.created_at,
            updated_at: Utc::now().max(current.updated_at),
        };
        let row = write_update(&mut tx, &merged).await?;
        tx.commit().await?;
        tracing::info!(id, "purpose updated");
        Ok(Some(row.into()))
    }

    /// Remove a purpose, returning its last stored state.
    pub async fn delete(&self, id: i64) -> Result<Option<Purpose>, AppError> {
        let sql = format!("DELETE FROM purposes WHERE id = ? RETURNING {}", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, PurposeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if row.is_some() {
            tracing::info!(id, "purpose deleted");
        }
        Ok(row.map(Purpose::from))
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM purposes")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}

async fn fetch_by_id<'e, E>(executor: E, id: i64) -> Result<Option<PurposeRow>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT {} FROM purposes WHERE id = ?", COLUMNS);
    sqlx::query_as::<_, PurposeRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

async fn fetch_by_name<'e, E>(executor: E, name: &str) -> Result<Option<PurposeRow>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT {} FROM purposes WHERE name = ?", COLUMNS);
    sqlx::query_as::<_, PurposeRow>(&sql)
        .bind(name)
        .fetch_optional(executor)
        .await
}

/// INSERT without the name pre-check; `created_at` and `updated_at` share `now`.
async fn insert(
    conn: &mut SqliteConnection,
    new: &NewPurpose,
    now: DateTime<Utc>,
) -> Result<PurposeRow, AppError> {
    let sql = format!(
        "INSERT INTO purposes (name, description, is_active, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {}",
        COLUMNS
    );
    tracing::debug!(sql = %sql, name = %new.name, "query");
    sqlx::query_as::<_, PurposeRow>(&sql)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.is_active)
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await
        .map_err(|e| unique_to_conflict(e, &new.name))
}

/// UPDATE without the name pre-check. `created_at` is never written.
async fn write_update(conn: &mut SqliteConnection, row: &PurposeRow) -> Result<PurposeRow, AppError> {
    let sql = format!(
        "UPDATE purposes SET name = ?, description = ?, is_active = ?, updated_at = ? WHERE id = ? RETURNING {}",
        COLUMNS
    );
    tracing::debug!(sql = %sql, id = row.id, "query");
    sqlx::query_as::<_, PurposeRow>(&sql)
        .bind(&row.name)
        .bind(&row.description)
        .bind(row.is_active)
        .bind(row.updated_at)
        .bind(row.id)
        .fetch_one(conn)
        .await
        .map_err(|e| unique_to_conflict(e, &row.name))
}

fn unique_to_conflict(err: sqlx::Error, name: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(name.to_string()),
        _ => AppError::Db(err),
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped.
fn like_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}
