//! Upload binding and validation
//!
//! Binding and validation are two explicit steps: raw submitted fields are
//! first parsed into an [`UploadBinding`], then [`validate`] checks the
//! binding against the provider's limits and returns every violation in
//! field order. A binding with zero violations can be turned into a
//! persistable [`MediaRecord`].

use bytes::Bytes;

use crate::models::MediaRecord;
use crate::provider::ProviderDescriptor;

/// Raw submitted upload fields, parsed but not yet validated.
#[derive(Debug, Clone)]
pub struct UploadBinding {
    pub provider_name: String,
    pub context: String,
    pub filename: String,
    pub content_type: String,
    pub content: Bytes,
}

/// One violated upload constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Filename is missing")]
    MissingFilename,

    #[error("File is empty")]
    EmptyFile,

    #[error("File size {size} bytes exceeds the maximum of {max} bytes")]
    FileTooLarge { size: usize, max: usize },

    #[error("Content type '{content_type}' is not allowed for provider '{provider}'")]
    InvalidContentType {
        content_type: String,
        provider: String,
    },

    #[error("File extension '{extension}' is not allowed for provider '{provider}'")]
    InvalidExtension { extension: String, provider: String },

    #[error("File has no extension")]
    MissingExtension,
}

/// Size limit applied to every provider.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_file_size: usize,
}

fn extension_of(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

/// Check one binding against the provider's allowlists and the size limit.
///
/// Returns every violated constraint, ordered filename -> content ->
/// content type -> extension. Empty allowlists on the provider mean
/// "accept anything" (the generic file provider).
pub fn validate(
    binding: &UploadBinding,
    provider: &ProviderDescriptor,
    limits: UploadLimits,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if binding.filename.is_empty() {
        violations.push(Violation::MissingFilename);
    }

    if binding.content.is_empty() {
        violations.push(Violation::EmptyFile);
    } else if binding.content.len() > limits.max_file_size {
        violations.push(Violation::FileTooLarge {
            size: binding.content.len(),
            max: limits.max_file_size,
        });
    }

    let allowed_types = provider.allowed_content_types();
    if !allowed_types.is_empty() && !allowed_types.iter().any(|t| t == &binding.content_type) {
        violations.push(Violation::InvalidContentType {
            content_type: binding.content_type.clone(),
            provider: provider.name().to_string(),
        });
    }

    let allowed_exts = provider.allowed_extensions();
    if !allowed_exts.is_empty() && !binding.filename.is_empty() {
        match extension_of(&binding.filename) {
            Some(ext) => {
                let ext = ext.to_ascii_lowercase();
                if !allowed_exts.iter().any(|allowed| allowed == &ext) {
                    violations.push(Violation::InvalidExtension {
                        extension: ext,
                        provider: provider.name().to_string(),
                    });
                }
            }
            None => violations.push(Violation::MissingExtension),
        }
    }

    violations
}

impl UploadBinding {
    /// Populate a blank record from the bound fields. The caller is
    /// expected to have validated the binding first (the validated
    /// strategy) or to knowingly skip that step (the deprecated direct
    /// strategy).
    pub fn into_record(self, mut record: MediaRecord) -> MediaRecord {
        record.context = self.context;
        record.provider_name = self.provider_name;
        record.filename = self.filename;
        record.content_type = self.content_type;
        record.size_bytes = self.content.len() as i64;
        record.binary_content = Some(self.content);
        record
    }
}
