pub mod service;

pub use service::LevelService;
