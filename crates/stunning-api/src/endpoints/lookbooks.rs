use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Lookbook, LookbookEntry, NewLookbook, NewLookbookEntry};

pub struct Lookbooks<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Lookbooks<'_> {
    pub async fn list(&self, client_id: Option<i64>) -> Result<Vec<Lookbook>, ApiError> {
        let mut req = self.api.request(Method::GET, "/lookbooks/");
        if let Some(id) = client_id {
            req = req.query(&[("client_id", id)]);
        }
        self.api.send_json(req).await
    }

    pub async fn get(&self, id: i64) -> Result<Lookbook, ApiError> {
        self.api
            .send_json(self.api.request(Method::GET, &format!("/lookbooks/{id}")))
            .await
    }

    pub async fn create(&self, lookbook: &NewLookbook) -> Result<Lookbook, ApiError> {
        let req = self.api.request(Method::POST, "/lookbooks/").json(lookbook);
        self.api.send_json(req).await
    }

    pub async fn entries(&self, lookbook_id: i64) -> Result<Vec<LookbookEntry>, ApiError> {
        let path = format!("/lookbooks/{lookbook_id}/entries/");
        self.api
            .send_json(self.api.request(Method::GET, &path))
            .await
    }

    pub async fn add_entry(
        &self,
        lookbook_id: i64,
        entry: &NewLookbookEntry,
    ) -> Result<LookbookEntry, ApiError> {
        let path = format!("/lookbooks/{lookbook_id}/entries/");
        let req = self.api.request(Method::POST, &path).json(entry);
        self.api.send_json(req).await
    }
}
