pub mod service;

pub use service::FormService;
