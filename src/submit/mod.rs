mod decode;
mod encode;
mod error;

pub use decode::{bind_pairs, parse_urlencoded_body, seed_json};
pub use encode::{DELETE_ON, INITIAL_FORMS, TOTAL_FORMS, roster_json, submission_pairs, urlencoded_body};
pub use error::BindError;
