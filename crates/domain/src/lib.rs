//! Scrapbook Domain Layer
pub mod config;
pub mod entity;
pub mod errors;
mod owned_record;
pub mod scrap;
pub mod task;
pub mod user;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use entity::CachedEntity;
pub use errors::DomainError;
pub use scrap::{NewScrap, Scrap, ScrapPatch};
pub use task::{NewTask, Task, TaskPatch};
pub use user::{NewUser, User, UserPatch};
