mod entity_controller;
mod mapping;

pub use entity_controller::{EntityController, ScrapController, TaskController, UserController};
pub use mapping::RequestMapping;
