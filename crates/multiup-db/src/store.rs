use async_trait::async_trait;
use multiup_core::models::MediaRecord;
use multiup_core::AppError;

/// Persistence seam for media records.
///
/// `save` performs exactly one write and returns the record with its
/// assigned id; the transient binary content is consumed by the write and
/// absent from the returned record.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Blank record for binding, no id assigned yet.
    fn new_record(&self) -> MediaRecord {
        MediaRecord::blank()
    }

    async fn save(&self, record: MediaRecord) -> Result<MediaRecord, AppError>;
}

/// Guard shared by every store: a record without a provider name and a
/// context must never reach storage.
pub(crate) fn ensure_persistable(record: &MediaRecord) -> Result<(), AppError> {
    if !record.is_persistable() {
        return Err(AppError::Internal(
            "Refusing to persist media record without provider name and context".to_string(),
        ));
    }
    Ok(())
}
