//! Provider pool
//!
//! Providers are the pluggable handlers behind uploads (image, file,
//! video, ...). The pool is an explicit name -> descriptor mapping built
//! once at startup from configuration; lookup is a pure function with a
//! typed not-found outcome.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{MediaRecord, UrlFormat, DEFAULT_CONTEXT};

/// Immutable description of one upload target.
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    name: String,
    label: String,
    /// Base URL under which this provider serves stored items.
    public_base_url: String,
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

/// Serializable subset of a descriptor for the select-provider view.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderView {
    pub name: String,
    pub label: String,
}

impl ProviderDescriptor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        public_base_url: impl Into<String>,
        allowed_extensions: Vec<String>,
        allowed_content_types: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            public_base_url: public_base_url.into(),
            allowed_extensions,
            allowed_content_types,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.allowed_content_types
    }

    /// Public URL for a stored record in the requested rendition.
    /// Returns `None` for records that have not been persisted yet.
    pub fn public_url(&self, record: &MediaRecord, format: UrlFormat) -> Option<String> {
        let id: Uuid = record.id?;
        let rendition = match format {
            UrlFormat::Admin => "admin",
            UrlFormat::Reference => "reference",
        };
        Some(format!(
            "{}/{}/{}/{}/{}/{}",
            self.public_base_url.trim_end_matches('/'),
            self.name,
            record.context,
            id,
            rendition,
            record.filename,
        ))
    }

    pub fn view(&self) -> ProviderView {
        ProviderView {
            name: self.name.clone(),
            label: self.label.clone(),
        }
    }
}

/// Name-indexed provider registry with a context -> provider-names map.
#[derive(Debug, Clone, Default)]
pub struct ProviderPool {
    providers: HashMap<String, ProviderDescriptor>,
    /// Ordered provider names per context (order controls the select view).
    contexts: HashMap<String, Vec<String>>,
}

impl ProviderPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for the given contexts.
    pub fn register(&mut self, descriptor: ProviderDescriptor, contexts: &[String]) {
        for context in contexts {
            self.contexts
                .entry(context.clone())
                .or_default()
                .push(descriptor.name.clone());
        }
        self.providers.insert(descriptor.name.clone(), descriptor);
    }

    pub fn resolve(&self, name: &str) -> Result<&ProviderDescriptor, AppError> {
        self.providers
            .get(name)
            .ok_or_else(|| AppError::UnknownProvider {
                name: name.to_string(),
            })
    }

    /// Providers applicable to a context, in registration order.
    /// Unknown contexts yield an empty list.
    pub fn providers_by_context(&self, context: &str) -> Vec<&ProviderDescriptor> {
        self.contexts
            .get(context)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| self.providers.get(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn default_context(&self) -> &str {
        DEFAULT_CONTEXT
    }
}

/// Build the provider pool from configuration.
///
/// Three providers ship with the add-on: `image` and `video` with their
/// configured allowlists, and the catch-all `file` provider. All are
/// registered for every configured context.
pub fn create_pool(config: &crate::config::Config) -> ProviderPool {
    let mut pool = ProviderPool::new();
    pool.register(
        ProviderDescriptor::new(
            "image",
            "Image",
            config.public_base_url.clone(),
            config.image_allowed_extensions.clone(),
            config.image_allowed_content_types.clone(),
        ),
        &config.contexts,
    );
    pool.register(
        ProviderDescriptor::new(
            "video",
            "Video",
            config.public_base_url.clone(),
            config.video_allowed_extensions.clone(),
            config.video_allowed_content_types.clone(),
        ),
        &config.contexts,
    );
    pool.register(
        ProviderDescriptor::new(
            "file",
            "File",
            config.public_base_url.clone(),
            Vec::new(),
            Vec::new(),
        ),
        &config.contexts,
    );
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn image_provider() -> ProviderDescriptor {
        ProviderDescriptor::new(
            "image",
            "Image",
            "http://localhost:3000/media/",
            vec!["jpg".to_string(), "png".to_string()],
            vec!["image/jpeg".to_string(), "image/png".to_string()],
        )
    }

    fn pool() -> ProviderPool {
        let mut pool = ProviderPool::new();
        pool.register(
            image_provider(),
            &[DEFAULT_CONTEXT.to_string(), "gallery".to_string()],
        );
        pool.register(
            ProviderDescriptor::new("file", "File", "http://localhost:3000/media/", vec![], vec![]),
            &[DEFAULT_CONTEXT.to_string()],
        );
        pool
    }

    #[test]
    fn test_resolve_known_provider() {
        let pool = pool();
        assert_eq!(pool.resolve("image").expect("resolve").name(), "image");
    }

    #[test]
    fn test_resolve_unknown_provider() {
        let pool = pool();
        match pool.resolve("hologram") {
            Err(AppError::UnknownProvider { name }) => assert_eq!(name, "hologram"),
            other => panic!("expected UnknownProvider, got {:?}", other.map(|p| p.name())),
        }
    }

    #[test]
    fn test_providers_by_context_preserves_registration_order() {
        let pool = pool();
        let names: Vec<&str> = pool
            .providers_by_context(DEFAULT_CONTEXT)
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(names, vec!["image", "file"]);
    }

    #[test]
    fn test_unknown_context_is_empty() {
        assert!(pool().providers_by_context("nowhere").is_empty());
    }

    #[test]
    fn test_public_url_requires_persisted_record() {
        let provider = image_provider();
        let mut record = MediaRecord::blank();
        record.provider_name = "image".to_string();
        record.context = "gallery".to_string();
        record.filename = "cat.png".to_string();
        record.binary_content = Some(Bytes::from_static(b"png"));
        assert!(provider.public_url(&record, UrlFormat::Admin).is_none());

        record.id = Some(Uuid::new_v4());
        let url = provider
            .public_url(&record, UrlFormat::Admin)
            .expect("url for persisted record");
        assert!(url.starts_with("http://localhost:3000/media/image/gallery/"));
        assert!(url.ends_with("/admin/cat.png"));
    }
}
