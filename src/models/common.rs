//! Common types shared across FreshService models.
//!
//! This module defines pagination options and the small reference types
//! that several resources embed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp as returned by the API (RFC 3339, UTC).
pub type Timestamp = DateTime<Utc>;

/// Pagination parameters accepted by every list endpoint.
///
/// Zero values are left out of the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number, starting at 1.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub page: u32,

    /// Results per page (the API caps this at 100).
    #[serde(default, skip_serializing_if = "is_zero")]
    pub per_page: u32,
}

impl ListOptions {
    /// Creates empty options (server defaults for page and page size).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a specific page.
    pub fn page(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

pub(crate) fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Someone who performed an action, as `{id, name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User ID.
    #[serde(default)]
    pub id: u64,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A user reference carrying an email instead of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorEmail {
    /// User ID.
    #[serde(default)]
    pub id: u64,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// A rich-text block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// HTML content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Description {
    /// Wraps HTML content.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            description: Some(html.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_builder() {
        let opts = ListOptions::new().with_page(3).with_per_page(25);
        assert_eq!(opts, ListOptions::page(3, 25));
    }

    #[test]
    fn test_list_options_skips_zero_fields() {
        let json = serde_json::to_value(ListOptions::new().with_per_page(10)).unwrap();
        assert_eq!(json, serde_json::json!({"per_page": 10}));
    }

    #[test]
    fn test_actor_tolerates_missing_name() {
        let actor: Actor = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(actor.id, 7);
        assert!(actor.name.is_none());
    }
}
