use serde::{Deserialize, Serialize};

/// Roster entry supplied by the (external) employee store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
}

impl Employee {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}
