use stunning_api::types::History;
use stunning_api::ApiClient;
use stunning_core::query::{QueryCache, QueryKey, QueryState};

/// Characters of the prompt shown on a history card.
const PROMPT_PREVIEW_CHARS: usize = 30;

/// History browser, optionally narrowed to one model.
#[derive(Default)]
pub struct LookbookScreen {
    pub selected_model_id: Option<i64>,
    cache: QueryCache<Vec<History>>,
}

impl LookbookScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(model_id: Option<i64>) -> QueryKey {
        QueryKey::new("histories").param(model_id)
    }

    pub async fn load(&mut self, api: &ApiClient) -> &QueryState<Vec<History>> {
        let model_id = self.selected_model_id;
        self.cache
            .fetch(Self::key(model_id), api.histories().list(model_id))
            .await
    }

    pub fn state(&self) -> Option<&QueryState<Vec<History>>> {
        self.cache.get(&Self::key(self.selected_model_id))
    }

    /// Route that reopens a past generation in the studio.
    pub fn restore_route(history_id: i64) -> String {
        format!("/studio?history={history_id}")
    }

    /// Card caption for a history entry's prompt.
    pub fn prompt_preview(history: &History) -> String {
        match history.prompt.as_deref() {
            Some(prompt) if !prompt.is_empty() => {
                let head: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
                format!("Prompt: {head}...")
            }
            _ => "No prompt".to_owned(),
        }
    }
}
