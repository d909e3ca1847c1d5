//! Review page returned by `/product/{id}/reviews`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewPage {
    /// Star distribution keyed by star count as a string (`"1"` to `"5"`).
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub stars: HashMap<String, StarBucket>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub rating_average: f64,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub reviews_count: u64,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub reviews: Vec<Review>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub paging: Paging,
}

impl ReviewPage {
    /// Distribution bucket for `star`, zeroed when the backend omitted it.
    #[must_use]
    pub fn star(&self, star: u8) -> StarBucket {
        self.stars
            .get(&star.to_string())
            .copied()
            .unwrap_or_default()
    }

    /// Number of review pages, never less than 1.
    #[must_use]
    pub fn last_page(&self) -> u32 {
        self.paging.last_page.max(1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StarBucket {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub last_page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub created_by: Option<Reviewer>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub vote_attributes: VoteAttributes,
    /// Unix timestamp in seconds.
    #[serde(default)]
    pub created_at: i64,
}

impl Review {
    #[must_use]
    pub fn reviewer_name(&self) -> &str {
        self.created_by
            .as_ref()
            .map_or("Anonymous", |r| r.name.as_str())
    }

    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
}

/// Tags other shoppers agreed with, e.g. "Fast delivery".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteAttributes {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub agree: Vec<String>,
}
