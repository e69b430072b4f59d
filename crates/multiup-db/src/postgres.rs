use async_trait::async_trait;
use chrono::{DateTime, Utc};
use multiup_core::models::MediaRecord;
use multiup_core::AppError;
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::store::{ensure_persistable, MediaStore};

/// Embedded migrations for the media table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Row shape of the media table.
#[derive(Debug, FromRow)]
struct MediaRow {
    id: Uuid,
    context: String,
    provider_name: String,
    filename: String,
    content_type: String,
    size_bytes: i64,
    uploaded_at: DateTime<Utc>,
}

impl MediaRow {
    fn into_record(self) -> MediaRecord {
        MediaRecord {
            id: Some(self.id),
            context: self.context,
            provider_name: self.provider_name,
            filename: self.filename,
            content_type: self.content_type,
            size_bytes: self.size_bytes,
            binary_content: None,
            uploaded_at: Some(self.uploaded_at),
        }
    }
}

/// Postgres-backed media store.
#[derive(Clone)]
pub struct PgMediaStore {
    pool: PgPool,
}

impl PgMediaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaStore for PgMediaStore {
    #[tracing::instrument(skip(self, record), fields(provider = %record.provider_name, context = %record.context))]
    async fn save(&self, mut record: MediaRecord) -> Result<MediaRecord, AppError> {
        ensure_persistable(&record)?;

        // The binary content is consumed by the write; the byte payload
        // itself is the provider's storage concern, not the record's.
        record.binary_content = None;

        let id = Uuid::new_v4();
        let row: MediaRow = sqlx::query_as::<Postgres, MediaRow>(
            r#"
            INSERT INTO media (id, context, provider_name, filename, content_type, size_bytes, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6, now())
            RETURNING id, context, provider_name, filename, content_type, size_bytes, uploaded_at
            "#,
        )
        .bind(id)
        .bind(&record.context)
        .bind(&record.provider_name)
        .bind(&record.filename)
        .bind(&record.content_type)
        .bind(record.size_bytes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(media_id = %row.id, "Media record persisted");
        Ok(row.into_record())
    }
}
