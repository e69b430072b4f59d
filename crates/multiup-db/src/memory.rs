use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use multiup_core::models::MediaRecord;
use multiup_core::AppError;
use uuid::Uuid;

use crate::store::{ensure_persistable, MediaStore};

/// In-memory media store for tests.
///
/// Records every successful save so tests can assert on write counts and
/// persisted field values.
#[derive(Debug, Default)]
pub struct MemoryMediaStore {
    records: Mutex<Vec<MediaRecord>>,
}

impl MemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persistence writes performed so far.
    pub fn write_count(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    /// Snapshot of all persisted records.
    pub fn records(&self) -> Vec<MediaRecord> {
        self.records.lock().expect("store lock poisoned").clone()
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn save(&self, mut record: MediaRecord) -> Result<MediaRecord, AppError> {
        ensure_persistable(&record)?;

        record.binary_content = None;
        record.id = Some(Uuid::new_v4());
        record.uploaded_at = Some(Utc::now());

        self.records
            .lock()
            .expect("store lock poisoned")
            .push(record.clone());
        Ok(record)
    }
}
