//! Endpoint groups, one per backend resource family.
//!
//! Each function issues exactly one request.

mod auth;
mod clients;
mod generation;
mod histories;
mod layers;
mod lookbooks;
mod models;

pub use auth::Auth;
pub use clients::Clients;
pub use generation::Generation;
pub use histories::Histories;
pub use layers::Layers;
pub use lookbooks::Lookbooks;
pub use models::Models;

use crate::client::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> Auth<'_> {
        Auth { api: self }
    }

    pub fn clients(&self) -> Clients<'_> {
        Clients { api: self }
    }

    pub fn models(&self) -> Models<'_> {
        Models { api: self }
    }

    pub fn layers(&self) -> Layers<'_> {
        Layers { api: self }
    }

    pub fn generation(&self) -> Generation<'_> {
        Generation { api: self }
    }

    pub fn histories(&self) -> Histories<'_> {
        Histories { api: self }
    }

    pub fn lookbooks(&self) -> Lookbooks<'_> {
        Lookbooks { api: self }
    }
}
