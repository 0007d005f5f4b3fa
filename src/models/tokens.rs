use serde::{Deserialize, Serialize};

use crate::models::User;

/// Access + refresh token pair, exactly as `POST /auth/refresh-token` returns
/// it. Both tokens are opaque bearer strings - nothing client-side ever
/// inspects their contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Response body of `POST /auth/google-signin`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}
