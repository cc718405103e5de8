//! PostgreSQL record store
//!
//! Persists mapped records into `public.users` with one multi-row INSERT per
//! batch. Nested objects land in jsonb columns; a missing tree is stored as
//! SQL NULL.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, Postgres};
use sqlx::QueryBuilder;
use tracing::{debug, info};

use crate::app::adapters::store::RecordStore;
use crate::app::models::MappedRecord;
use crate::config::DatabaseConfig;
use crate::{Error, Result};

/// Destination table definition, created on demand before ingestion
const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS public.users (
    id serial4 PRIMARY KEY,
    "name" varchar NOT NULL,
    age int4 NOT NULL,
    address jsonb NULL,
    additional_info jsonb NULL
)"#;

/// Record store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect a pool using the configured connection settings
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to PostgreSQL at {}", config.display_target());

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(30))
            .connect(&config.url())
            .await
            .map_err(|e| {
                Error::persistence(
                    format!("failed to connect to {}", config.display_target()),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by callers that manage their own pool)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn ensure_schema(&self) -> Result<()> {
        debug!("Ensuring public.users table exists");
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::persistence("failed to create public.users table", e))?;
        Ok(())
    }

    async fn bulk_insert(&self, records: &[MappedRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(r#"INSERT INTO public.users ("name", age, address, additional_info) "#);

        builder.push_values(records, |mut row, record| {
            row.push_bind(&record.name)
                .push_bind(record.age)
                .push_bind(&record.address)
                .push_bind(&record.additional_info);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| {
                Error::persistence(format!("bulk insert of {} records failed", records.len()), e)
            })?;

        debug!("Inserted batch of {} records", records.len());
        Ok(())
    }
}
