use serde::Serialize;
use uuid::Uuid;

/// JSON acknowledgement of one upload submission.
///
/// Constructed per request, never persisted. The `status` discriminator is
/// part of the wire contract consumed by the admin upload widget.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UploadOutcome {
    Ok {
        /// Admin-facing public URL of the stored item.
        path: String,
        /// Edit link for the assigned record.
        edit: String,
        id: Uuid,
    },
    Error {
        /// One human-readable message per violated constraint, in order.
        errors: Vec<String>,
    },
}
