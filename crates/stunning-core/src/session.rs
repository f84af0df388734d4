//! Per-run session state: the visual theme and the client being worked on.
//!
//! A [`Session`] is created once by the application and handed to every
//! screen that needs it. Writes replace values wholesale (last write wins).
//! Pushing the theme into a rendering surface is a separate, explicit step
//! ([`Session::apply_theme`]) so the state itself never touches any display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Style variable receiving [`Theme::primary`].
pub const PRIMARY_VAR: &str = "--client-primary";
/// Style variable receiving [`Theme::secondary`].
pub const SECONDARY_VAR: &str = "--client-secondary";
/// Style variable receiving [`Theme::accent`].
pub const ACCENT_VAR: &str = "--client-accent";

/// Three-colour palette for the current client.
///
/// Colour strings are passed through as-is; a malformed value only shows up
/// as a visual defect wherever it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Theme {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }

    /// Build a theme from a client's `theme_settings` object.
    ///
    /// Returns `None` unless all three colours are present as strings.
    pub fn from_settings(settings: &serde_json::Value) -> Option<Self> {
        let color = |key: &str| settings.get(key)?.as_str().map(str::to_owned);
        Some(Self {
            primary: color("primary")?,
            secondary: color("secondary")?,
            accent: color("accent")?,
        })
    }

    /// The three `(variable, value)` pairs this theme writes.
    pub fn variables(&self) -> [(&'static str, &str); 3] {
        [
            (PRIMARY_VAR, self.primary.as_str()),
            (SECONDARY_VAR, self.secondary.as_str()),
            (ACCENT_VAR, self.accent.as_str()),
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#0ea5e9", "#64748b", "#3b82f6")
    }
}

/// Identity of the client currently selected in the studio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveClient {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl ActiveClient {
    pub fn is_selected(&self) -> bool {
        self.id.is_some()
    }
}

/// Anything that can receive global style variables.
pub trait StyleSurface {
    fn set_property(&mut self, name: &str, value: &str);
}

/// In-memory style surface that remembers every variable written to it.
#[derive(Debug, Clone, Default)]
pub struct StyleVariables {
    vars: BTreeMap<String, String>,
    writes: usize,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Total number of `set_property` calls received.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Render the variables as a `:root` CSS block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl StyleSurface for StyleVariables {
    fn set_property(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_owned(), value.to_owned());
        self.writes += 1;
    }
}

/// Session state shared by every screen of a running studio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    theme: Theme,
    client: ActiveClient,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a configured theme instead of the built-in one.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            client: ActiveClient::default(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the whole theme. Call [`Session::apply_theme`] afterwards to
    /// update the rendering surface.
    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(?theme, "theme replaced");
        self.theme = theme;
    }

    pub fn active_client(&self) -> &ActiveClient {
        &self.client
    }

    /// Set only the client id; the name is left untouched.
    pub fn set_active_client_id(&mut self, id: Option<i64>) {
        self.client.id = id;
    }

    /// Set only the client name; the id is left untouched.
    pub fn set_active_client_name(&mut self, name: Option<String>) {
        self.client.name = name;
    }

    /// Set id and name together so they always describe the same client.
    pub fn set_active_client(&mut self, id: i64, name: impl Into<String>) {
        self.client = ActiveClient {
            id: Some(id),
            name: Some(name.into()),
        };
        tracing::debug!(client_id = id, "active client selected");
    }

    pub fn clear_active_client(&mut self) {
        self.client = ActiveClient::default();
    }

    /// Write the current theme into `surface` as three style variables.
    ///
    /// Without a surface (headless use) this does nothing.
    pub fn apply_theme(&self, surface: Option<&mut dyn StyleSurface>) {
        let Some(surface) = surface else {
            tracing::trace!("no style surface, theme not applied");
            return;
        };
        for (name, value) in self.theme.variables() {
            surface.set_property(name, value);
        }
    }
}
