pub mod clients;
pub mod lookbook;
pub mod studio;

use std::sync::Mutex;

use stunning_api::Navigator;
use stunning_core::query::QueryState;

use crate::error::AppError;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Clients,
    Models,
    Studio,
    Lookbook,
    Login,
    Settings,
    Unknown,
}

impl Page {
    /// Resolve a route path (query string ignored) to a page.
    pub fn from_path(path: &str) -> Self {
        let path = path.split('?').next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Self::Clients,
            "/login" => Self::Login,
            "/studio" => Self::Studio,
            "/lookbook" => Self::Lookbook,
            "/settings" => Self::Settings,
            p if p.starts_with("/clients/") && p.ends_with("/models") => Self::Models,
            p if p.starts_with("/clients") => Self::Clients,
            _ => Self::Unknown,
        }
    }
}

/// Data of a finished load, or the failure as an [`AppError::Query`].
pub fn ready<'a, T>(resource: &str, state: &'a QueryState<T>) -> Result<&'a T, AppError> {
    match state {
        QueryState::Ready(data) => Ok(data),
        QueryState::Failed(message) => Err(AppError::Query {
            resource: resource.to_owned(),
            message: message.clone(),
        }),
        QueryState::Loading => Err(AppError::Query {
            resource: resource.to_owned(),
            message: "still loading".to_owned(),
        }),
    }
}

/// Tracks the current route; handed to the API client as its navigator.
#[derive(Debug)]
pub struct Router {
    history: Mutex<Vec<String>>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            history: Mutex::new(vec!["/".to_owned()]),
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> String {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.last().cloned())
            .unwrap_or_else(|| "/".to_owned())
    }

    pub fn page(&self) -> Page {
        Page::from_path(&self.current())
    }

    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!(%path, "route changed");
        if let Ok(mut history) = self.history.lock() {
            history.push(path);
        }
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str) {
        self.push(path);
    }
}
