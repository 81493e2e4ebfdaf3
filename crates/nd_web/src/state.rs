use nd_client::NewsSource;
use std::sync::Arc;

pub struct AppState {
    pub source: Arc<dyn NewsSource>,
}
