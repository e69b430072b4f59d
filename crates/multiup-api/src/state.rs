//! Application state shared by all handlers.

use std::sync::Arc;

use multiup_core::provider::ProviderPool;
use multiup_core::Config;
use multiup_db::MediaStore;

use crate::urls::AdminUrls;

pub struct AppState {
    pub config: Config,
    pub providers: ProviderPool,
    pub store: Arc<dyn MediaStore>,
    pub urls: AdminUrls,
}

impl AppState {
    pub fn new(config: Config, providers: ProviderPool, store: Arc<dyn MediaStore>) -> Self {
        let urls = AdminUrls::new(config.admin_base_url.clone());
        Self {
            config,
            providers,
            store,
            urls,
        }
    }
}
