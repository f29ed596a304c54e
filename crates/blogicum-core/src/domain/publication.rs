use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visibility flag and creation time carried by every publishable record.
///
/// `created_at` is fixed when the record is first inserted and never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Publication {
    /// A visible record created now.
    pub fn new() -> Self {
        Self {
            is_published: true,
            created_at: Utc::now(),
        }
    }

    /// A hidden record created now.
    pub fn hidden() -> Self {
        Self {
            is_published: false,
            ..Self::new()
        }
    }
}

impl Default for Publication {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "is_published={}, created_at={}",
            self.is_published,
            self.created_at.to_rfc3339()
        )
    }
}
