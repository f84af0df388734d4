use stunning_api::types::Client;
use stunning_api::{ApiClient, ApiError};
use stunning_core::query::{QueryCache, QueryKey, QueryState};
use stunning_core::{Session, Theme};

/// Client overview: the full client list plus a name filter.
#[derive(Default)]
pub struct ClientsScreen {
    cache: QueryCache<Vec<Client>>,
    pub search: String,
}

impl ClientsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn key() -> QueryKey {
        QueryKey::new("clients")
    }

    pub async fn load(&mut self, api: &ApiClient) -> &QueryState<Vec<Client>> {
        self.cache.fetch(Self::key(), api.clients().list()).await
    }

    pub fn state(&self) -> Option<&QueryState<Vec<Client>>> {
        self.cache.get(&Self::key())
    }

    /// Loaded clients whose name contains the search text, ignoring case.
    pub fn visible(&self) -> Vec<&Client> {
        let needle = self.search.trim().to_lowercase();
        self.state()
            .and_then(QueryState::data)
            .map(|clients| {
                clients
                    .iter()
                    .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Make `client` the active client. Its theme replaces the session theme
    /// when the client defines all three colours. Returns whether the theme
    /// changed, so the caller knows to re-apply it.
    pub fn select(client: &Client, session: &mut Session) -> bool {
        session.set_active_client(client.id, client.name.clone());
        let theme = client.theme_settings.as_ref().and_then(Theme::from_settings);
        match theme {
            Some(theme) if &theme != session.theme() => {
                session.set_theme(theme);
                true
            }
            _ => false,
        }
    }

    /// Fetch a single client by id and select it.
    pub async fn select_by_id(
        api: &ApiClient,
        id: i64,
        session: &mut Session,
    ) -> Result<(Client, bool), ApiError> {
        let client = api.clients().get(id).await?;
        let theme_changed = Self::select(&client, session);
        Ok((client, theme_changed))
    }
}

#[cfg(test)]
pub(crate) fn client_fixture(id: i64, name: &str, theme: Option<serde_json::Value>) -> Client {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "description": null,
        "theme_settings": theme,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": "2024-01-01T00:00:00"
    }))
    .unwrap()
}
