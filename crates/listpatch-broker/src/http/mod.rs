pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::post, Router};
use listpatch_core::HttpTransport;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppContext<T>
where
    T: HttpTransport + 'static,
{
    pub transport: Arc<T>,
}

pub type SharedContext<T> = Arc<AppContext<T>>;

pub fn router<T>(context: SharedContext<T>) -> Router
where
    T: HttpTransport + 'static,
{
    Router::new()
        .route(
            "/update-list-item",
            post(handlers::update_item::update::<T>),
        )
        .with_state(context)
}
