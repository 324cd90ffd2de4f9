//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub mod base {
    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn locale() -> String {
        "he".into()
    }
}

pub mod content {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "content/posts".into()
    }

    pub fn extension() -> String {
        "md".into()
    }
}
