use std::sync::Arc;

use crate::services::api::BookingApi;

pub struct AppState {
    pub api: Arc<dyn BookingApi>,
}
