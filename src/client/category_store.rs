use reqwest::Method;
use uuid::Uuid;

use crate::client::{ApiClient, ClientError};
use crate::models::{CategoryView, MessageBody};
use crate::services::category::{CreateCategory, UpdateCategory};

/// `itemCount` values are as fresh as the last `load`/`refresh`. Item writes made
/// through a `MenuStore` do not touch them.
pub struct CategoryStore {
    api: ApiClient,
    categories: Vec<CategoryView>,
    fresh: bool,
}

impl CategoryStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            categories: Vec::new(),
            fresh: false,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut ApiClient {
        &mut self.api
    }

    pub fn categories(&self) -> &[CategoryView] {
        &self.categories
    }

    pub fn get(&self, id: Uuid) -> Option<&CategoryView> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Fetches the list unless a fresh copy is already held.
    pub async fn load(&mut self) -> Result<&[CategoryView], ClientError> {
        if !self.fresh {
            self.refresh().await?;
        }
        Ok(&self.categories)
    }

    pub async fn refresh(&mut self) -> Result<&[CategoryView], ClientError> {
        self.categories = self.api.get("/api/categories").await?;
        self.fresh = true;
        Ok(&self.categories)
    }

    /// Marks the copy stale, the next `load` goes back to the server.
    pub fn invalidate(&mut self) {
        self.fresh = false;
    }

    pub async fn add(&mut self, category: &CreateCategory) -> Result<CategoryView, ClientError> {
        let created: CategoryView = self
            .api
            .send(Method::POST, "/api/categories", Some(category))
            .await?;

        self.categories.push(created.clone());
        Ok(created)
    }

    pub async fn update(
        &mut self,
        id: Uuid,
        changes: &UpdateCategory,
    ) -> Result<CategoryView, ClientError> {
        let updated: CategoryView = self
            .api
            .send(Method::PUT, &format!("/api/categories/{id}"), Some(changes))
            .await?;

        if let Some(slot) = self.categories.iter_mut().find(|c| c.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        let _: MessageBody = self
            .api
            .send::<(), _>(Method::DELETE, &format!("/api/categories/{id}"), None)
            .await?;

        self.categories.retain(|c| c.id != id);
        Ok(())
    }
}
