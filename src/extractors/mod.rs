mod json;
mod path;

pub use json::JsonBody;
pub use path::PurposeId;
