pub mod model;

pub use model::{LevelPrivilege, PrivilegeRecord};
