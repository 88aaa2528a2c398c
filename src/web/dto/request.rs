//! Request DTOs for Web API.

use serde::{de, Deserialize, Deserializer};
use validator::Validate;

use super::validation::no_control_chars;

/// Create posting request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostingRequest {
    #[validate(length(min = 1, max = 200), custom(function = "no_control_chars"))]
    pub title: String,
    #[validate(length(min = 1, max = 10000), custom(function = "no_control_chars"))]
    pub content: String,
    /// Also accepted as `category`.
    #[serde(alias = "category")]
    pub category_id: i64,
}

/// Update posting request. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePostingRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200), custom(function = "no_control_chars"))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 10000), custom(function = "no_control_chars"))]
    pub content: Option<String>,
}

/// Create comment request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000), custom(function = "no_control_chars"))]
    pub content: String,
    /// Reply target; omitted or null for a top-level comment.
    #[serde(default)]
    pub parent_comment_id: Option<i64>,
}

/// Update comment request.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 1000), custom(function = "no_control_chars"))]
    pub content: Option<String>,
}

/// Query parameters for the posting list.
#[derive(Debug, Default, Deserialize)]
pub struct ListPostingsQuery {
    /// Substring of title or content.
    #[serde(default)]
    pub keyword: Option<String>,
    /// Empty means no category filter.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category_id: Option<i64>,
}

/// Deserialize an optional integer where an empty string means absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

impl ListPostingsQuery {
    /// The keyword, treating an empty one as absent.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }
}

/// Page selector for comment lists.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// 1-indexed page (default: 1).
    #[serde(default)]
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}
