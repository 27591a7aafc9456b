pub mod memory;

pub use memory::InMemoryCacheStore;
