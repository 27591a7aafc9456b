use scrapbook_application::ports::CacheStore;
use scrapbook_application::{ScrapController, TaskController, UserController};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub scraps: Arc<ScrapController>,
    pub tasks: Arc<TaskController>,
    pub users: Arc<UserController>,
    pub cache: Arc<dyn CacheStore>,
}
