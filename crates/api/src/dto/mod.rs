pub mod cache;
pub mod message;

pub use cache::CacheStatsResponse;
pub use message::{HealthResponse, MessageResponse};
