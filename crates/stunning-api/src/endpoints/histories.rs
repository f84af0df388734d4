use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::History;

pub struct Histories<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Histories<'_> {
    /// Past generations. `model_id` is the only filter ever sent.
    pub async fn list(&self, model_id: Option<i64>) -> Result<Vec<History>, ApiError> {
        let mut req = self.api.request(Method::GET, "/histories/");
        if let Some(id) = model_id {
            req = req.query(&[("model_id", id)]);
        }
        self.api.send_json(req).await
    }

    pub async fn get(&self, id: i64) -> Result<History, ApiError> {
        self.api
            .send_json(self.api.request(Method::GET, &format!("/histories/{id}")))
            .await
    }
}
