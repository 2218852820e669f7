//! API interface implementations

pub mod calls_handler;
pub mod dto;
pub mod router;
pub mod websocket;

pub use calls_handler::AppState;
pub use dto::ApiResponse;
pub use router::build_router;
