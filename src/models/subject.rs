//! Subject is an academic course that questions are tagged with
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Equality covers every field; the store has no other key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    pub name: String,
    pub level_count: u32,
}

impl Subject {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        level_count: u32,
    ) -> Result<Self, ModelError> {
        let code = code.into();
        if level_count == 0 {
            return Err(ModelError::ZeroLevels(code));
        }
        Ok(Self {
            code,
            name: name.into(),
            level_count,
        })
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
