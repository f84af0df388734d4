use reqwest::multipart::Form;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Model, NewModel};

pub struct Models<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Models<'_> {
    /// List models, optionally only those belonging to one client.
    pub async fn list(&self, client_id: Option<i64>) -> Result<Vec<Model>, ApiError> {
        let mut req = self.api.request(Method::GET, "/models/");
        if let Some(id) = client_id {
            req = req.query(&[("client_id", id)]);
        }
        self.api.send_json(req).await
    }

    pub async fn get(&self, id: i64) -> Result<Model, ApiError> {
        self.api
            .send_json(self.api.request(Method::GET, &format!("/models/{id}")))
            .await
    }

    /// Upload reference photos and create a model from them.
    pub async fn create(&self, model: NewModel) -> Result<Model, ApiError> {
        let mut form = Form::new()
            .text("client_id", model.client_id.to_string())
            .text("name", model.name);
        for image in model.reference_images {
            form = form.part("reference_images", image.into_part()?);
        }

        let req = self.api.request(Method::POST, "/models/").multipart(form);
        self.api.send_json(req).await
    }

    pub async fn delete(&self, id: i64) -> Result<Model, ApiError> {
        self.api
            .send_json(self.api.request(Method::DELETE, &format!("/models/{id}")))
            .await
    }
}
