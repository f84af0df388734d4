//! What the client does when a response comes back with a given status.

/// Path the default policy sends the user to after an auth failure.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyAction {
    /// Hand the response to the normal success/error handling.
    Proceed,
    /// Forget the stored token, navigate to `to`, and fail the call.
    ClearTokenAndRedirect { to: String },
}

/// Maps a response status to an action, consulted for every response.
pub trait ResponsePolicy: Send + Sync {
    fn on_status(&self, status: u16) -> PolicyAction;
}

/// Something that can move the user to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Default policy: a 401 clears the token and redirects to the login view.
#[derive(Debug, Clone)]
pub struct RedirectOnUnauthorized {
    pub login_path: String,
}

impl Default for RedirectOnUnauthorized {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_owned(),
        }
    }
}

impl ResponsePolicy for RedirectOnUnauthorized {
    fn on_status(&self, status: u16) -> PolicyAction {
        if status == 401 {
            PolicyAction::ClearTokenAndRedirect {
                to: self.login_path.clone(),
            }
        } else {
            PolicyAction::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_401_redirects() {
        let policy = RedirectOnUnauthorized::default();
        assert_eq!(
            policy.on_status(401),
            PolicyAction::ClearTokenAndRedirect {
                to: "/login".into()
            }
        );
        for status in [200, 201, 400, 403, 404, 500] {
            assert_eq!(policy.on_status(status), PolicyAction::Proceed);
        }
    }

    #[test]
    fn test_custom_login_path() {
        let policy = RedirectOnUnauthorized {
            login_path: "/auth/sign-in".into(),
        };
        assert_eq!(
            policy.on_status(401),
            PolicyAction::ClearTokenAndRedirect {
                to: "/auth/sign-in".into()
            }
        );
    }
}
