pub mod service;

pub use service::PrivilegeService;
