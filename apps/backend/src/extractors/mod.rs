pub mod validated_json;

pub use validated_json::{BodyLimit, ValidatedJson, DEFAULT_BODY_LIMIT};
