use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::Api;
use crate::auth::dto::{GoogleLoginRequest, GoogleLoginResponse, User};
use crate::error::ApiError;

/// Observable session state. `user == None` is the anonymous state;
/// `loading` is true only while a login is in flight.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Owns the authenticated-user record and the auth calls that mutate it.
///
/// The session credential itself is a server-managed cookie carried by the
/// transport; this store only observes whether credential-gated calls
/// succeed. Construct one per UI context and share it by `Arc`.
pub struct SessionStore {
    api: Api,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Resolves the current session from the server-held cookie.
    ///
    /// Failure is silent by contract: a 401 or a dead network both leave the
    /// store anonymous, and the caller learns nothing beyond the resulting
    /// state.
    pub async fn fetch_me(&self) {
        let result = self.api.get::<User>("/v1/auth/me").await;
        let mut state = self.state.write().await;
        match result {
            Ok(user) => {
                debug!(user_id = %user.id, "session resolved");
                state.user = Some(user);
            }
            Err(err) => {
                debug!(error = %err, "no active session");
                state.user = None;
            }
        }
    }

    /// Exchanges a Google id token for a session. The server sets the
    /// session cookie as a side effect of a successful exchange.
    ///
    /// Unlike [`fetch_me`](Self::fetch_me), failure propagates and leaves
    /// `user` untouched: a rejected login must not log anyone out.
    pub async fn login_with_google(&self, id_token: &str) -> Result<User, ApiError> {
        self.state.write().await.loading = true;
        let result = self
            .api
            .post::<GoogleLoginResponse, _>(
                "/v1/auth/google",
                &GoogleLoginRequest {
                    id_token: id_token.to_string(),
                },
            )
            .await;
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(resp) => {
                debug!(user_id = %resp.user.id, "logged in");
                state.user = Some(resp.user.clone());
                Ok(resp.user)
            }
            Err(err) => {
                warn!(error = %err, "google login failed");
                Err(err)
            }
        }
    }

    /// Asks the server to invalidate the session, then clears local state
    /// whether or not that call succeeded. A UI left "logged in" after a
    /// failed network call is the worse outcome.
    pub async fn logout(&self) {
        if let Err(err) = self.api.post::<Value, _>("/v1/auth/logout", &json!({})).await {
            warn!(error = %err, "logout request failed; clearing local session anyway");
        }
        self.state.write().await.user = None;
    }
}
