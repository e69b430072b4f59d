use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context assigned to records when the request does not name one.
pub const DEFAULT_CONTEXT: &str = "default";

/// Rendition requested when asking a provider for a public URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlFormat {
    /// Admin-facing rendition, shown in the upload acknowledgement.
    Admin,
    /// Full-size reference rendition.
    Reference,
}

/// One uploaded asset.
///
/// `id` is absent until the first successful save assigns it. The binary
/// content is transient: it is consumed at persist time and not retained
/// on the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: Option<Uuid>,
    pub context: String,
    pub provider_name: String,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: i64,
    #[serde(skip)]
    pub binary_content: Option<Bytes>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl MediaRecord {
    /// Blank record, as handed out by a store before binding.
    pub fn blank() -> Self {
        Self {
            id: None,
            context: String::new(),
            provider_name: String::new(),
            filename: String::new(),
            content_type: String::new(),
            size_bytes: 0,
            binary_content: None,
            uploaded_at: None,
        }
    }

    /// A record may only be persisted with a provider name and a context.
    pub fn is_persistable(&self) -> bool {
        !self.provider_name.is_empty() && !self.context.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_record_is_not_persistable() {
        assert!(!MediaRecord::blank().is_persistable());
    }

    #[test]
    fn test_record_with_provider_and_context_is_persistable() {
        let mut record = MediaRecord::blank();
        record.provider_name = "image".to_string();
        record.context = DEFAULT_CONTEXT.to_string();
        assert!(record.is_persistable());
    }

    #[test]
    fn test_binary_content_is_not_serialized() {
        let mut record = MediaRecord::blank();
        record.binary_content = Some(Bytes::from_static(b"raw"));
        let json = serde_json::to_value(&record).expect("serialize");
        assert!(json.get("binary_content").is_none());
    }
}
