//! sqlx-backed store implementations.

pub mod form;
pub mod level;
pub mod menu;
pub mod privilege;
pub mod user;

pub use form::FormRepository;
pub use level::LevelRepository;
pub use menu::MenuTreeRepository;
pub use privilege::PrivilegeRepository;
pub use user::UserRepository;
