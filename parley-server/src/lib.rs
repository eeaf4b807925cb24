pub mod room;
pub mod session;
pub mod signaling;

pub use room::{RoomFullError, RoomStore};
pub use session::{SessionState, SignalingSession};
pub use signaling::{RoomRelay, SignalingOutput, SignalingService, ws_handler};

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state handed to every WebSocket handler.
#[derive(Clone)]
pub struct AppState {
    pub signaling: SignalingService,
    pub rooms: RoomStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            signaling: SignalingService::new(),
            rooms: RoomStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The signaling router: one upgrade endpoint, permissive CORS.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}
