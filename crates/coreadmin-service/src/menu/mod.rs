pub mod service;

pub use service::MenuTreeService;
