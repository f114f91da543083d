pub mod model;

pub use model::{MenuTree, MenuTreeRecord};
