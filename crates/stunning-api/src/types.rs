use chrono::NaiveDateTime;
use reqwest::multipart::Part;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ── Auth ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ── Clients ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Free-form branding settings; `primary`/`secondary`/`accent` colours
    /// when the client has a theme.
    pub theme_settings: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewClient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_settings: Option<serde_json::Value>,
}

/// Partial update; only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_settings: Option<serde_json::Value>,
}

// ── Models ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub client_id: i64,
    pub reference_image_path: Option<String>,
    #[serde(default)]
    pub base_embedding: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Multipart payload for creating a model from reference photos.
#[derive(Debug, Clone)]
pub struct NewModel {
    pub client_id: i64,
    pub name: String,
    pub reference_images: Vec<Upload>,
}

// ── Layers ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Hair,
    Outfit,
    Scene,
}

impl LayerKind {
    pub const ALL: &[LayerKind] = &[Self::Hair, Self::Outfit, Self::Scene];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Outfit => "outfit",
            Self::Scene => "scene",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hair" => Ok(Self::Hair),
            "outfit" => Ok(Self::Outfit),
            "scene" => Ok(Self::Scene),
            other => Err(format!("unknown layer type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub strength: f64,
    pub reference_image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Multipart payload for creating a styling layer.
#[derive(Debug, Clone)]
pub struct NewLayer {
    pub name: String,
    pub kind: LayerKind,
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub strength: f64,
    pub reference_image: Option<Upload>,
}

// ── Generation ───────────────────────────────────────────────────

/// Body of `POST /generate/`. Unselected layers are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model_id: i64,
    pub hair_layer_id: Option<i64>,
    pub outfit_layer_id: Option<i64>,
    pub scene_layer_id: Option<i64>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    pub image_path: String,
    #[serde(default)]
    pub history_id: Option<i64>,
}

/// Multipart payload for `POST /inpaint/`.
#[derive(Debug, Clone)]
pub struct InpaintRequest {
    pub model_id: i64,
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub image: Upload,
    pub mask: Upload,
}

// ── History & lookbooks ─────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct History {
    pub id: i64,
    pub model_id: i64,
    pub image_path: String,
    pub prompt: Option<String>,
    pub negative_prompt: Option<String>,
    pub settings: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Lookbook {
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewLookbook {
    pub client_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookbookEntry {
    pub id: i64,
    pub lookbook_id: i64,
    pub history_id: i64,
    pub order: i64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewLookbookEntry {
    pub lookbook_id: i64,
    pub history_id: i64,
    pub order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ── Uploads ──────────────────────────────────────────────────────

/// A file sent as one part of a multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime {
            Some(mime) => Ok(part.mime_str(&mime)?),
            None => Ok(part),
        }
    }
}
