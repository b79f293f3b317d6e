//! Knowledge base models: categories, folders and articles.
//!
//! Folders live under a category and articles live under a folder, so the
//! list filters for folders and articles carry the parent ID.

use serde::{Deserialize, Serialize};

use super::{ListOptions, Timestamp};

/// Article status codes.
pub mod article_status {
    /// Draft.
    pub const DRAFT: u32 = 1;
    /// Published.
    pub const PUBLISHED: u32 = 2;
}

/// Article type codes.
pub mod article_type {
    /// Permanent article.
    pub const PERMANENT: u32 = 1;
    /// Workaround.
    pub const WORKAROUND: u32 = 2;
}

/// A top-level knowledge base category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionCategory {
    /// Category ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Sort order.
    pub position: Option<u32>,
    /// Whether the category ships with the account.
    pub default_category: bool,
    /// Portals the category is shown in.
    pub visible_in_portals: Vec<u64>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET solutions/categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolutionCategories {
    /// The categories.
    #[serde(default)]
    pub categories: Vec<SolutionCategory>,
}

/// Single-category envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SolutionCategoryEnvelope {
    /// The category.
    pub category: SolutionCategory,
}

/// Payload for creating or updating a category.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolutionCategoryModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub visible_in_portals: Vec<u64>,
}

/// Who must approve article changes in a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalSettings {
    /// Approval workflow code.
    pub approval_type: u32,
    /// Approving agents.
    pub approver_ids: Vec<u64>,
}

/// A folder inside a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionFolder {
    /// Folder ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Sort order.
    pub position: Option<u32>,
    /// Whether the folder ships with the account.
    pub default_folder: bool,
    /// Parent category.
    pub category_id: Option<u64>,
    /// Visibility code.
    pub visibility: Option<u32>,
    /// Departments that can see the folder.
    pub department_ids: Vec<u64>,
    /// Agent groups that can see the folder.
    pub group_ids: Vec<u64>,
    /// Requester groups that can see the folder.
    pub requester_group_ids: Vec<u64>,
    /// Groups that can manage the folder.
    pub manage_by_group_ids: Vec<u64>,
    /// Approval workflow.
    pub approval_settings: Option<ApprovalSettings>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET solutions/folders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolutionFolders {
    /// The folders.
    #[serde(default)]
    pub folders: Vec<SolutionFolder>,
}

/// Single-folder envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SolutionFolderEnvelope {
    /// The folder.
    pub folder: SolutionFolder,
}

/// Payload for creating or updating a folder. Fields mirror [`SolutionFolder`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolutionFolderModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Only honored on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    pub visibility: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub department_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requester_group_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub manage_by_group_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_settings: Option<ApprovalSettings>,
}

/// Filters for `GET solutions/folders`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListSolutionFoldersOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Parent category; the API requires it.
    pub category_id: u64,
}

impl ListSolutionFoldersOptions {
    /// Lists the folders of `category_id`.
    pub fn new(category_id: u64) -> Self {
        Self {
            list: ListOptions::default(),
            category_id,
        }
    }
}

/// A knowledge base article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionArticle {
    /// Article ID.
    pub id: u64,
    /// Title.
    pub title: Option<String>,
    /// HTML body.
    pub description: Option<String>,
    /// Sort order.
    pub position: Option<u32>,
    /// See [`article_type`].
    pub article_type: u32,
    /// Parent folder.
    pub folder_id: Option<u64>,
    /// Parent category.
    pub category_id: Option<u64>,
    /// See [`article_status`].
    pub status: u32,
    /// Approval state code.
    pub approval_status: Option<u32>,
    /// Upvotes.
    pub thumbs_up: u64,
    /// Downvotes.
    pub thumbs_down: u64,
    /// Author.
    pub agent_id: Option<u64>,
    /// View count.
    pub views: u64,
    /// Tags.
    pub tags: Vec<String>,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Link to the article, if external.
    pub url: Option<String>,
    /// Next review date.
    pub review_date: Option<Timestamp>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Collection returned by `GET solutions/articles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolutionArticles {
    /// The articles on this page.
    #[serde(default)]
    pub articles: Vec<SolutionArticle>,
}

/// Single-article envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SolutionArticleEnvelope {
    /// The article.
    pub article: SolutionArticle,
}

/// Payload for `POST solutions/articles`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSolutionArticleModel {
    pub title: String,
    pub description: String,
    pub article_type: u32,
    pub folder_id: u64,
    pub status: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<Timestamp>,
}

/// Payload for `PUT solutions/articles/{id}`. Unset fields are left unchanged.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSolutionArticleModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<Timestamp>,
}

/// Filters for `GET solutions/articles`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListSolutionArticlesOptions {
    /// Pagination.
    #[serde(flatten)]
    pub list: ListOptions,
    /// Parent folder; the API requires it.
    pub folder_id: u64,
}

impl ListSolutionArticlesOptions {
    /// Lists the articles of `folder_id`.
    pub fn new(folder_id: u64) -> Self {
        Self {
            list: ListOptions::default(),
            folder_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_filter_carries_parent() {
        let json = serde_json::to_value(ListSolutionFoldersOptions::new(8)).unwrap();
        assert_eq!(json, serde_json::json!({"category_id": 8}));
    }

    #[test]
    fn test_article_deserialization() {
        let json = r#"{"article": {"id": 4, "title": "Reset VPN", "status": 2, "article_type": 1,
            "folder_id": 9, "tags": ["vpn"], "views": 31}}"#;
        let envelope: SolutionArticleEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.article.status, article_status::PUBLISHED);
        assert_eq!(envelope.article.tags, vec!["vpn".to_string()]);
        assert_eq!(envelope.article.views, 31);
    }
}
