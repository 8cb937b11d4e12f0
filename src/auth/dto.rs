use serde::{Deserialize, Serialize};

/// Identity record for the signed-in user, replaced wholesale on every
/// fetch or login. Absence in the store means anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Request body for the Google token exchange.
#[derive(Debug, Serialize)]
pub struct GoogleLoginRequest {
    pub id_token: String,
}

/// Response returned after a successful token exchange. The session cookie
/// arrives as a header side effect, not in the body.
#[derive(Debug, Deserialize)]
pub struct GoogleLoginResponse {
    pub user: User,
}
