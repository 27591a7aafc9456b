pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod validation;

pub use error::ApiError;
pub use routes::create_api_routes;
pub use state::AppState;
