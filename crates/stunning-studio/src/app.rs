use std::sync::Arc;

use stunning_api::types::Client;
use stunning_api::{ApiClient, FileTokenStore, TokenStore};
use stunning_core::config::AppConfig;
use stunning_core::{Session, StyleVariables};

use crate::error::AppError;
use crate::screen::clients::ClientsScreen;
use crate::screen::{Page, Router};

/// Everything a screen needs, built once and passed down explicitly.
pub struct App {
    pub session: Session,
    pub api: ApiClient,
    pub router: Arc<Router>,
    /// Style variables the current theme was last applied to.
    pub style: StyleVariables,
}

impl App {
    pub fn new(config: &AppConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let router = Arc::new(Router::new());
        let api = ApiClient::builder()
            .base_url(config.api.base_url.as_str())
            .tokens(tokens)
            .navigator(router.clone())
            .build()?;

        let mut app = Self {
            session: Session::with_theme(config.theme.clone()),
            api,
            router,
            style: StyleVariables::new(),
        };
        app.apply_theme();
        Ok(app)
    }

    /// Build from config with the token persisted in the data directory.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let tokens = Arc::new(FileTokenStore::new(AppConfig::token_path()));
        Self::new(config, tokens)
    }

    pub fn apply_theme(&mut self) {
        self.session.apply_theme(Some(&mut self.style));
    }

    /// Select a client by id, adopting its theme when it has one.
    pub async fn select_client(&mut self, id: i64) -> Result<Client, AppError> {
        let (client, theme_changed) =
            ClientsScreen::select_by_id(&self.api, id, &mut self.session).await?;
        if theme_changed {
            self.apply_theme();
        }
        Ok(client)
    }

    /// Whether an auth failure has sent the user to the login view.
    pub fn needs_login(&self) -> bool {
        self.router.page() == Page::Login
    }
}
