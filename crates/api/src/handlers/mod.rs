pub mod cache;
pub mod entities;
pub mod health;

pub use cache::get_cache_stats;
pub use entities::Resource;
pub use health::health_check;
