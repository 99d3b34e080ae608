use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named bucket time is tracked against. The name is the key records refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
    pub updated_at: DateTime<Local>,
}

impl Project {
    pub fn new(name: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            active: true,
            updated_at: now,
        }
    }
}
