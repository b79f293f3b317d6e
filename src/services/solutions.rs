//! Knowledge base: solution categories, folders and articles.

use crate::client::{Client, Response, Result};
use crate::models::{
    CreateSolutionArticleModel, ListOptions, ListSolutionArticlesOptions, ListSolutionFoldersOptions,
    SolutionArticle, SolutionArticleEnvelope, SolutionArticles, SolutionCategories, SolutionCategory,
    SolutionCategoryEnvelope, SolutionCategoryModel, SolutionFolder, SolutionFolderEnvelope, SolutionFolderModel,
    SolutionFolders, UpdateSolutionArticleModel,
};

/// Operations on `solutions`.
#[derive(Debug, Clone, Copy)]
pub struct SolutionService<'a> {
    client: &'a Client,
}

impl<'a> SolutionService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a category by ID.
    pub async fn get_category(&self, id: u64) -> Result<Response<SolutionCategory>> {
        let response = self
            .client
            .get::<SolutionCategoryEnvelope>(&format!("solutions/categories/{}", id))
            .await?;
        Ok(response.map(|e| e.category))
    }

    /// Lists categories.
    pub async fn list_categories(&self, opts: Option<&ListOptions>) -> Result<Response<SolutionCategories>> {
        self.client.list("solutions/categories", opts).await
    }

    /// Creates a category.
    pub async fn create_category(&self, category: &SolutionCategoryModel) -> Result<Response<SolutionCategory>> {
        let response = self
            .client
            .post::<SolutionCategoryEnvelope, _>("solutions/categories", Some(category))
            .await?;
        Ok(response.map(|e| e.category))
    }

    /// Updates a category.
    pub async fn update_category(
        &self,
        id: u64,
        category: &SolutionCategoryModel,
    ) -> Result<Response<SolutionCategory>> {
        let response = self
            .client
            .put::<SolutionCategoryEnvelope, _>(&format!("solutions/categories/{}", id), Some(category))
            .await?;
        Ok(response.map(|e| e.category))
    }

    /// Deletes a category.
    pub async fn delete_category(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("solutions/categories/{}", id)).await
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, id: u64) -> Result<Response<SolutionFolder>> {
        let response = self
            .client
            .get::<SolutionFolderEnvelope>(&format!("solutions/folders/{}", id))
            .await?;
        Ok(response.map(|e| e.folder))
    }

    /// Lists the folders of a category.
    pub async fn list_folders(&self, opts: &ListSolutionFoldersOptions) -> Result<Response<SolutionFolders>> {
        self.client.list("solutions/folders", Some(opts)).await
    }

    /// Creates a folder.
    pub async fn create_folder(&self, folder: &SolutionFolderModel) -> Result<Response<SolutionFolder>> {
        let response = self
            .client
            .post::<SolutionFolderEnvelope, _>("solutions/folders", Some(folder))
            .await?;
        Ok(response.map(|e| e.folder))
    }

    /// Updates a folder.
    pub async fn update_folder(&self, id: u64, folder: &SolutionFolderModel) -> Result<Response<SolutionFolder>> {
        let response = self
            .client
            .put::<SolutionFolderEnvelope, _>(&format!("solutions/folders/{}", id), Some(folder))
            .await?;
        Ok(response.map(|e| e.folder))
    }

    /// Deletes a folder.
    pub async fn delete_folder(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("solutions/folders/{}", id)).await
    }

    /// Gets an article by ID.
    pub async fn get_article(&self, id: u64) -> Result<Response<SolutionArticle>> {
        let response = self
            .client
            .get::<SolutionArticleEnvelope>(&format!("solutions/articles/{}", id))
            .await?;
        Ok(response.map(|e| e.article))
    }

    /// Lists the articles of a folder.
    pub async fn list_articles(&self, opts: &ListSolutionArticlesOptions) -> Result<Response<SolutionArticles>> {
        self.client.list("solutions/articles", Some(opts)).await
    }

    /// Creates an article.
    pub async fn create_article(&self, article: &CreateSolutionArticleModel) -> Result<Response<SolutionArticle>> {
        let response = self
            .client
            .post::<SolutionArticleEnvelope, _>("solutions/articles", Some(article))
            .await?;
        Ok(response.map(|e| e.article))
    }

    /// Updates an article.
    pub async fn update_article(
        &self,
        id: u64,
        article: &UpdateSolutionArticleModel,
    ) -> Result<Response<SolutionArticle>> {
        let response = self
            .client
            .put::<SolutionArticleEnvelope, _>(&format!("solutions/articles/{}", id), Some(article))
            .await?;
        Ok(response.map(|e| e.article))
    }

    /// Deletes an article.
    pub async fn delete_article(&self, id: u64) -> Result<Response<bool>> {
        self.client.delete(&format!("solutions/articles/{}", id)).await
    }

    /// Submits an article to the folder's approvers.
    pub async fn send_for_approval(&self, id: u64) -> Result<Response<SolutionArticle>> {
        let response = self
            .client
            .put::<SolutionArticleEnvelope, ()>(&format!("solutions/articles/{}/send_for_approval", id), None)
            .await?;
        Ok(response.map(|e| e.article))
    }
}
