use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::events::EventLogger;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub logger: EventLogger,
}
