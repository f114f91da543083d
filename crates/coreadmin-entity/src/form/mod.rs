pub mod model;
pub mod path_api;

pub use model::{Form, FormRecord};
pub use path_api::PathApi;
