pub mod model;

pub use model::{FormGrant, Level, LevelDetail, LevelRecord};
