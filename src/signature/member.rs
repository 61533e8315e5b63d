use serde::{Deserialize, Serialize};

/// A named, typed field of a complex signature at a fixed byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub type_name: String,
    pub name: String,
    pub offset: u32,
}

impl Member {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, offset: u32) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            offset,
        }
    }
}

impl From<(&str, &str, u32)> for Member {
    fn from((type_name, name, offset): (&str, &str, u32)) -> Self {
        Member::new(type_name, name, offset)
    }
}
