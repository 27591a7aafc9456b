//! Scrapbook Application Layer
//!
//! Ports for the entity store and the cache, the cache-aside service that
//! coordinates them, and the controllers exposing that service through
//! transport-neutral request/response descriptors.
pub mod controllers;
pub mod ports;
pub mod request;
pub mod services;

pub use controllers::{EntityController, RequestMapping, ScrapController, TaskController, UserController};
pub use request::{RequestBody, RequestParams, ResponseStatus, ServiceRequest, ServiceResponse};
pub use services::CacheAsideService;
