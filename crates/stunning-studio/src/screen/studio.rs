use futures::future::join3;

use stunning_api::types::{GenerationRequest, Layer, LayerKind, Model};
use stunning_api::{ApiClient, ApiError};
use stunning_core::query::{QueryCache, QueryKey, QueryState};

/// Styling studio state: layer picks, prompt and the last generated image.
#[derive(Default)]
pub struct StudioScreen {
    pub hair_layer_id: Option<i64>,
    pub outfit_layer_id: Option<i64>,
    pub scene_layer_id: Option<i64>,
    pub prompt: String,
    pub preview_collapsed: bool,
    pub generated_image: Option<String>,
    /// Message of the last failed generation, if any.
    pub last_error: Option<String>,
    layers: QueryCache<Vec<Layer>>,
    models: QueryCache<Vec<Model>>,
}

impl StudioScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn layer_key(kind: LayerKind) -> QueryKey {
        QueryKey::new(format!("{kind}Layers"))
    }

    fn models_key(client_id: i64) -> QueryKey {
        QueryKey::new("models").param(Some(client_id))
    }

    pub fn toggle_preview(&mut self) {
        self.preview_collapsed = !self.preview_collapsed;
    }

    /// Pick (or clear) the layer used for `kind`.
    pub fn select_layer(&mut self, kind: LayerKind, id: Option<i64>) {
        match kind {
            LayerKind::Hair => self.hair_layer_id = id,
            LayerKind::Outfit => self.outfit_layer_id = id,
            LayerKind::Scene => self.scene_layer_id = id,
        }
    }

    /// Fetch the three layer lists concurrently; each lands in its own entry.
    pub async fn load_layers(&mut self, api: &ApiClient) {
        let hair = self.layers.begin(Self::layer_key(LayerKind::Hair));
        let outfit = self.layers.begin(Self::layer_key(LayerKind::Outfit));
        let scene = self.layers.begin(Self::layer_key(LayerKind::Scene));

        let layers = api.layers();
        let (h, o, s) = join3(
            layers.list(Some(LayerKind::Hair)),
            layers.list(Some(LayerKind::Outfit)),
            layers.list(Some(LayerKind::Scene)),
        )
        .await;

        self.layers.resolve(hair, h);
        self.layers.resolve(outfit, o);
        self.layers.resolve(scene, s);
    }

    pub fn layers(&self, kind: LayerKind) -> Option<&QueryState<Vec<Layer>>> {
        self.layers.get(&Self::layer_key(kind))
    }

    /// Sidebar gallery of the active client's models.
    pub async fn load_models(&mut self, api: &ApiClient, client_id: i64) -> &QueryState<Vec<Model>> {
        self.models
            .fetch(Self::models_key(client_id), api.models().list(Some(client_id)))
            .await
    }

    pub fn generation_request(&self, model_id: i64) -> GenerationRequest {
        GenerationRequest {
            model_id,
            hair_layer_id: self.hair_layer_id,
            outfit_layer_id: self.outfit_layer_id,
            scene_layer_id: self.scene_layer_id,
            prompt: self.prompt.clone(),
            negative_prompt: None,
            settings: None,
        }
    }

    /// Submit a generation for `model_id`. On success the image path is
    /// kept for the preview; on failure the error is logged and recorded and
    /// the screen stays usable.
    pub async fn generate(&mut self, api: &ApiClient, model_id: i64) -> Result<&str, ApiError> {
        let request = self.generation_request(model_id);
        match api.generation().generate(&request).await {
            Ok(response) => {
                self.last_error = None;
                Ok(self.generated_image.insert(response.image_path).as_str())
            }
            Err(e) => {
                tracing::error!(model_id, error = %e, "error generating image");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
