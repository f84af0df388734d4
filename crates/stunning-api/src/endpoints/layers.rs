use reqwest::multipart::Form;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Layer, LayerKind, NewLayer};

pub struct Layers<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Layers<'_> {
    /// List styling layers, optionally of one kind only.
    pub async fn list(&self, kind: Option<LayerKind>) -> Result<Vec<Layer>, ApiError> {
        let mut req = self.api.request(Method::GET, "/layers/");
        if let Some(kind) = kind {
            req = req.query(&[("type", kind.as_str())]);
        }
        self.api.send_json(req).await
    }

    pub async fn get(&self, id: i64) -> Result<Layer, ApiError> {
        self.api
            .send_json(self.api.request(Method::GET, &format!("/layers/{id}")))
            .await
    }

    pub async fn create(&self, layer: NewLayer) -> Result<Layer, ApiError> {
        let mut form = Form::new()
            .text("name", layer.name)
            .text("type", layer.kind.as_str())
            .text("prompt", layer.prompt)
            .text("strength", layer.strength.to_string());
        if let Some(negative) = layer.negative_prompt {
            form = form.text("negative_prompt", negative);
        }
        if let Some(image) = layer.reference_image {
            form = form.part("reference_image", image.into_part()?);
        }

        let req = self.api.request(Method::POST, "/layers/").multipart(form);
        self.api.send_json(req).await
    }

    pub async fn delete(&self, id: i64) -> Result<Layer, ApiError> {
        self.api
            .send_json(self.api.request(Method::DELETE, &format!("/layers/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ApiClient;
    use crate::test_support::serve_once;
    use crate::types::{LayerKind, NewLayer};

    const LAYER_JSON: &str = r#"{"id":2,"name":"Red dress","type":"outfit",
        "prompt":"red evening dress","negative_prompt":null,"strength":1.0,
        "reference_image_path":null,"created_at":"2024-03-05T08:00:00",
        "updated_at":"2024-03-05T08:00:00"}"#;

    #[tokio::test]
    async fn test_list_by_kind() {
        let server = serve_once(200, &format!("[{LAYER_JSON}]")).await;
        let api = ApiClient::builder().base_url(&server.base_url).build().unwrap();

        let layers = api.layers().list(Some(LayerKind::Outfit)).await.unwrap();
        assert_eq!(layers[0].kind, LayerKind::Outfit);
        assert_eq!(server.captured().await.target, "/layers/?type=outfit");
    }

    #[tokio::test]
    async fn test_create_without_image_is_still_multipart() {
        let server = serve_once(200, LAYER_JSON).await;
        let api = ApiClient::builder().base_url(&server.base_url).build().unwrap();

        let layer = NewLayer {
            name: "Red dress".into(),
            kind: LayerKind::Outfit,
            prompt: "red evening dress".into(),
            negative_prompt: Some("blurry".into()),
            strength: 0.75,
            reference_image: None,
        };
        api.layers().create(layer).await.unwrap();

        let captured = server.captured().await;
        assert!(captured
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data"));
        let body = captured.body_text();
        assert!(body.contains(r#"name="type""#));
        assert!(body.contains("outfit"));
        assert!(body.contains(r#"name="negative_prompt""#));
        assert!(body.contains("0.75"));
        assert!(!body.contains(r#"name="reference_image""#));
    }

    #[tokio::test]
    async fn test_delete() {
        let server = serve_once(200, LAYER_JSON).await;
        let api = ApiClient::builder().base_url(&server.base_url).build().unwrap();

        api.layers().delete(2).await.unwrap();
        let captured = server.captured().await;
        assert_eq!(captured.method, "DELETE");
        assert_eq!(captured.target, "/layers/2");
        assert_eq!(captured.header("content-type"), Some("application/json"));
    }
}
