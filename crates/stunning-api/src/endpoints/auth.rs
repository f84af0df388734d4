use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Token, User};

pub struct Auth<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Auth<'_> {
    /// Exchange credentials for an access token and keep it in the token
    /// store for later requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        let req = self
            .api
            .request(Method::POST, "/token")
            .form(&[("username", username), ("password", password)]);
        let token: Token = self.api.send_json(req).await?;
        self.api.tokens().store(&token.access_token)?;
        tracing::info!(username, "logged in");
        Ok(token)
    }

    /// Forget the stored token. No request is made.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.api.tokens().clear()
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.api
            .send_json(self.api.request(Method::GET, "/users/me"))
            .await
    }
}
