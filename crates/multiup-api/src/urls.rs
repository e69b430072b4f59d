//! Admin URL generation
//!
//! The admin panel owns routing for its generic screens; this component
//! only needs to point at a few of them.

/// Builds URLs into the admin panel from its configured base URL.
#[derive(Debug, Clone)]
pub struct AdminUrls {
    admin_base_url: String,
}

impl AdminUrls {
    pub fn new(admin_base_url: String) -> Self {
        Self {
            admin_base_url: admin_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Edit screen for a persisted media record.
    pub fn edit_url(&self, id: uuid::Uuid) -> String {
        format!("{}/media/{}/edit", self.admin_base_url, id)
    }

    /// Form action the upload widget posts to.
    pub fn multi_upload_url(&self, provider: &str, context: &str) -> String {
        format!(
            "{}/media/multi-upload?provider={}&context={}",
            self.admin_base_url, provider, context
        )
    }

    /// The host framework's generic media create screen.
    pub fn generic_create_url(&self) -> String {
        format!("{}/media/new", self.admin_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_edit_url() {
        let urls = AdminUrls::new("http://localhost:3000/admin/".to_string());
        let id = Uuid::new_v4();
        assert_eq!(
            urls.edit_url(id),
            format!("http://localhost:3000/admin/media/{}/edit", id)
        );
    }

    #[test]
    fn test_multi_upload_url() {
        let urls = AdminUrls::new("http://localhost:3000/admin".to_string());
        assert_eq!(
            urls.multi_upload_url("image", "gallery"),
            "http://localhost:3000/admin/media/multi-upload?provider=image&context=gallery"
        );
    }
}
