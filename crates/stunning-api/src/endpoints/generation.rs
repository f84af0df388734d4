use reqwest::multipart::Form;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{GenerationRequest, GenerationResponse, InpaintRequest};

pub struct Generation<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Generation<'_> {
    /// Render a model with the selected layers and prompt.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ApiError> {
        let req = self.api.request(Method::POST, "/generate/").json(request);
        self.api.send_json(req).await
    }

    /// Repaint the masked region of an image.
    pub async fn inpaint(&self, request: InpaintRequest) -> Result<GenerationResponse, ApiError> {
        let mut form = Form::new()
            .text("model_id", request.model_id.to_string())
            .text("prompt", request.prompt);
        if let Some(negative) = request.negative_prompt {
            form = form.text("negative_prompt", negative);
        }
        let form = form
            .part("image", request.image.into_part()?)
            .part("mask", request.mask.into_part()?);

        let req = self.api.request(Method::POST, "/inpaint/").multipart(form);
        self.api.send_json(req).await
    }
}
