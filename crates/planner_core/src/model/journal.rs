//! Journal singleton: free-text gratitude and thoughts.

use serde::{Deserialize, Serialize};

/// The two free-text areas of the daily journal. Not a list; the latest
/// text simply replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub gratitude: String,
    #[serde(default)]
    pub thoughts: String,
}

impl Journal {
    pub fn is_empty(&self) -> bool {
        self.gratitude.is_empty() && self.thoughts.is_empty()
    }
}
