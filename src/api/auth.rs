use serde_json::json;

use crate::client::ApiClient;
use crate::models::SignInResponse;
use crate::Result;

/// `POST /auth/google-signin` - exchanges a Google ID token for this API's
/// own token pair plus the user record. The caller decides what to do with
/// the result (normally `Application::sign_in_with_google`, which commits it
/// to the session store).
///
/// The companion `POST /auth/refresh-token` endpoint is consumed by the
/// pipeline itself and intentionally has no function here.
#[tracing::instrument(skip(client, id_token))]
pub async fn google_sign_in(client: &ApiClient, id_token: &str) -> Result<SignInResponse> {
    client
        .post("/auth/google-signin", &json!({ "idToken": id_token }))
        .await
}
