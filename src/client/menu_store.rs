use reqwest::Method;
use uuid::Uuid;

use crate::client::{ApiClient, ClientError};
use crate::models::{MenuItemView, MessageBody};
use crate::services::menu::MenuItemInput;

pub struct MenuStore {
    api: ApiClient,
    items: Vec<MenuItemView>,
    fresh: bool,
}

impl MenuStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            items: Vec::new(),
            fresh: false,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut ApiClient {
        &mut self.api
    }

    pub fn items(&self) -> &[MenuItemView] {
        &self.items
    }

    pub fn items_in_category(&self, category_id: Uuid) -> Vec<&MenuItemView> {
        self.items
            .iter()
            .filter(|item| item.category.id == category_id)
            .collect()
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub async fn load(&mut self) -> Result<&[MenuItemView], ClientError> {
        if !self.fresh {
            self.refresh().await?;
        }
        Ok(&self.items)
    }

    pub async fn refresh(&mut self) -> Result<&[MenuItemView], ClientError> {
        self.items = self.api.get("/api/menu").await?;
        self.fresh = true;
        Ok(&self.items)
    }

    pub fn invalidate(&mut self) {
        self.fresh = false;
    }

    pub async fn add(&mut self, item: &MenuItemInput) -> Result<MenuItemView, ClientError> {
        let created: MenuItemView = self.api.send(Method::POST, "/api/menu", Some(item)).await?;

        self.items.push(created.clone());
        Ok(created)
    }

    pub async fn update(
        &mut self,
        id: Uuid,
        item: &MenuItemInput,
    ) -> Result<MenuItemView, ClientError> {
        let updated: MenuItemView = self
            .api
            .send(Method::PUT, &format!("/api/menu/{id}"), Some(item))
            .await?;

        if let Some(slot) = self.items.iter_mut().find(|i| i.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<(), ClientError> {
        let _: MessageBody = self
            .api
            .send::<(), _>(Method::DELETE, &format!("/api/menu/{id}"), None)
            .await?;

        self.items.retain(|i| i.id != id);
        Ok(())
    }
}
