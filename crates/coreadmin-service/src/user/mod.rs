pub mod service;

pub use service::{UserDraft, UserService};
