use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Client, ClientUpdate, NewClient};

pub struct Clients<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Clients<'_> {
    pub async fn list(&self) -> Result<Vec<Client>, ApiError> {
        self.api
            .send_json(self.api.request(Method::GET, "/clients/"))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Client, ApiError> {
        self.api
            .send_json(self.api.request(Method::GET, &format!("/clients/{id}")))
            .await
    }

    pub async fn create(&self, client: &NewClient) -> Result<Client, ApiError> {
        let req = self.api.request(Method::POST, "/clients/").json(client);
        self.api.send_json(req).await
    }

    pub async fn update(&self, id: i64, update: &ClientUpdate) -> Result<Client, ApiError> {
        let req = self
            .api
            .request(Method::PUT, &format!("/clients/{id}"))
            .json(update);
        self.api.send_json(req).await
    }

    /// Delete a client; the backend answers with the removed record.
    pub async fn delete(&self, id: i64) -> Result<Client, ApiError> {
        self.api
            .send_json(self.api.request(Method::DELETE, &format!("/clients/{id}")))
            .await
    }
}
