//! Shared application state.

use forge_engine::ObjectHandler;

use crate::config::AppConfig;

/// State handed to every route. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub handler: ObjectHandler,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(handler: ObjectHandler, config: AppConfig) -> Self {
        Self { handler, config }
    }

    /// Open the declaration store named by `config` and build the state.
    pub async fn open(config: AppConfig) -> Result<Self, forge_engine::HandlerError> {
        let handler = ObjectHandler::open(config.store_config()).await?;
        Ok(Self::new(handler, config))
    }
}
